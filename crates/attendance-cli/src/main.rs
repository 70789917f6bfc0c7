//! Attendance CLI
//!
//! Command-line tool for loading a people list, picking who is present,
//! and writing a dated attendance file.

mod checklist;

use attendance_core::{
    ensure_input, AttendanceConfig, Checklist, Error, NameSet, ResolveRule, Selection, Table,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "attendance")]
#[command(about = "Take attendance from a tab-separated people list", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// People list to load (overrides the config file)
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Directory for attendance files (overrides the config file)
    #[arg(short, long, global = true)]
    output_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tick people off in an interactive checklist and save
    Check,

    /// Record attendance for the given people without prompting
    Record {
        /// Name of a person who is present (repeatable)
        #[arg(short, long = "name", required_unless_present = "all")]
        names: Vec<String>,

        /// Mark everyone as present
        #[arg(short, long, conflicts_with = "names")]
        all: bool,
    },

    /// Show the names found in the people list
    Names {
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: NamesFormat,
    },

    /// Show columns, inferred kinds and the first rows of the people list
    Inspect {
        /// Maximum number of rows to display
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },

    /// Create a configuration file template
    InitConfig {
        /// Output path for the configuration file
        #[arg(long)]
        output: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum NamesFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        if e.is_load_error() {
            eprintln!("Error: could not load the people list: {}", e);
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let env = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn,attendance_core=info"))
    };
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> attendance_core::Result<()> {
    let mut config = match &cli.config {
        Some(path) => AttendanceConfig::load(path)?,
        None => AttendanceConfig::default(),
    };
    if let Some(input) = cli.input {
        config.input = input;
    }
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }

    match cli.command {
        Commands::Check => cmd_check(&config),
        Commands::Record { names, all } => cmd_record(&config, &names, all),
        Commands::Names { format } => cmd_names(&config, format),
        Commands::Inspect { limit } => cmd_inspect(&config, limit),
        Commands::InitConfig { output } => cmd_init_config(&config, &output),
    }
}

/// Load the people list, failing before any interaction if it is missing
fn load_people(config: &AttendanceConfig) -> attendance_core::Result<Table> {
    ensure_input(&config.input)?;
    let table = config.loader().load(&config.input)?;
    info!("data loaded from {}", config.input.display());
    info!("available columns: {:?}", table.headers());
    Ok(table)
}

/// Resolve names; a missing name column is a warning, not a failure
fn resolve(config: &AttendanceConfig, table: &Table) -> attendance_core::Result<NameSet> {
    match config.resolver().resolve(table) {
        Ok(set) => Ok(set),
        Err(e @ Error::NoNameColumn { .. }) => {
            eprintln!("Warning: {}", e);
            Ok(NameSet::default())
        }
        Err(e) => Err(e),
    }
}

fn cmd_check(config: &AttendanceConfig) -> attendance_core::Result<()> {
    let table = load_people(config)?;
    let names = resolve(config, &table)?;
    let mut list = Checklist::new(&names);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let saves = checklist::run(&mut list, &config.recorder(), stdin.lock(), &mut stdout)?;

    info!("checklist closed after {} save(s)", saves.len());
    Ok(())
}

fn cmd_record(config: &AttendanceConfig, names: &[String], all: bool) -> attendance_core::Result<()> {
    let table = load_people(config)?;
    let set = resolve(config, &table)?;

    let selection = if all {
        Selection::all(&set)
    } else {
        Selection::from_names(&set, names)?
    };

    let summary = config.recorder().save(&selection)?;
    println!("{}", summary);

    Ok(())
}

fn cmd_names(config: &AttendanceConfig, format: NamesFormat) -> attendance_core::Result<()> {
    let table = load_people(config)?;
    let set = resolve(config, &table)?;

    match format {
        NamesFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&set)?);
        }
        NamesFormat::Text => {
            if !set.is_empty() {
                let rule = match set.rule {
                    Some(ResolveRule::Canonical) => "matched header",
                    Some(ResolveRule::Inferred) => "inferred",
                    None => "explicit",
                };
                println!("Column: {} ({})", set.column, rule);
                println!("Names ({}):", set.len());
            }
            for name in set.names() {
                println!("  {}", name);
            }
        }
    }

    Ok(())
}

fn cmd_inspect(config: &AttendanceConfig, limit: usize) -> attendance_core::Result<()> {
    let table = load_people(config)?;

    println!("File: {}", table.source_path.display());
    println!("Columns: {}", table.column_count());
    println!("Rows: {}", table.row_count());
    println!();

    for column in &table.columns {
        println!("  {:>3}  {:<24} {}", column.index, column.name, column.kind.label());
    }
    println!();

    // Print header
    let header: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
    println!("{}", header.join("\t"));
    println!("{}", "-".repeat(header.len() * 12));

    for row in table.rows.iter().take(limit) {
        let values: Vec<String> = row.cells.iter().map(|c| c.to_string_value()).collect();
        println!("{}", values.join("\t"));
    }

    if table.row_count() > limit {
        println!("... ({} more rows)", table.row_count() - limit);
    }

    Ok(())
}

fn cmd_init_config(config: &AttendanceConfig, output: &PathBuf) -> attendance_core::Result<()> {
    config.save(output)?;
    println!("Created config file: {}", output.display());
    println!();
    println!("Edit the file to point at your people list, then run:");
    println!("  attendance --config {} check", output.display());

    Ok(())
}
