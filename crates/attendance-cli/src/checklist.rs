//! Line-oriented checklist for the terminal

use attendance_core::{Checklist, Error, Recorder, Result, SaveSummary};
use std::io::{BufRead, Write};

const HELP: &str = "Commands: <n>... toggle row(s), a = select all, n = deselect all, \
l = list, s = save, q = quit";

/// Run the checklist until `q` or end of input; returns every successful save
pub fn run<R: BufRead, W: Write>(
    list: &mut Checklist,
    recorder: &Recorder,
    input: R,
    out: &mut W,
) -> Result<Vec<SaveSummary>> {
    let mut saves = Vec::new();

    writeln!(out, "Attendance")?;
    print_list(list, out)?;
    writeln!(out, "{}", HELP)?;
    print_count(list, out)?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim();

        match command {
            "" => continue,
            "q" => break,
            "a" => list.select_all(),
            "n" => list.deselect_all(),
            "l" => print_list(list, out)?,
            "s" => match recorder.save(&list.selection()) {
                Ok(summary) => {
                    writeln!(out, "{}", summary)?;
                    saves.push(summary);
                }
                Err(Error::EmptySelection) => writeln!(out, "Warning: no people selected")?,
                Err(e) => writeln!(out, "Error: {}", e)?,
            },
            _ => toggle_rows(list, command, out)?,
        }

        print_count(list, out)?;
    }

    Ok(saves)
}

fn toggle_rows<W: Write>(list: &mut Checklist, command: &str, out: &mut W) -> Result<()> {
    for token in command.split_whitespace() {
        let index = match token.parse::<usize>() {
            Ok(n) if n > 0 => n - 1,
            _ => {
                writeln!(out, "Unknown command '{}'. {}", token, HELP)?;
                continue;
            }
        };
        if list.toggle(index).is_err() {
            writeln!(out, "Warning: there is no row {} (list has {})", index + 1, list.len())?;
        }
    }
    Ok(())
}

fn print_list<W: Write>(list: &Checklist, out: &mut W) -> Result<()> {
    if list.is_empty() {
        writeln!(out, "(no names to show)")?;
    }
    for (i, (name, checked)) in list.rows().enumerate() {
        let mark = if checked { "x" } else { " " };
        writeln!(out, "{:>4}. [{}] {}", i + 1, mark, name)?;
    }
    Ok(())
}

fn print_count<W: Write>(list: &Checklist, out: &mut W) -> Result<()> {
    writeln!(out, "People selected: {}", list.selected_count())?;
    Ok(())
}
