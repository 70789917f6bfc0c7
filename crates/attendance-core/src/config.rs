//! Configuration file (JSON) for the attendance tool

use crate::error::{Error, Result};
use crate::loader::{TableLoader, TAB};
use crate::recorder::Recorder;
use crate::resolver::{NameResolver, SamplePolicy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Where to read people from and where to write attendance files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttendanceConfig {
    /// People list to load
    pub input: PathBuf,
    /// Directory for `attendances_*.csv` files
    pub output_dir: PathBuf,
    /// Field separator of the input file
    pub delimiter: char,
    /// Sampling rule for the fallback name-column heuristic
    pub sample_policy: SamplePolicy,
}

impl Default for AttendanceConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("people.tsv"),
            output_dir: PathBuf::from("."),
            delimiter: TAB as char,
            sample_policy: SamplePolicy::default(),
        }
    }
}

impl AttendanceConfig {
    /// Load a config file from JSON
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| Error::FileRead {
            path: path.as_ref().to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(Error::Json)
    }

    /// Save the config to JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Loader for the configured delimiter
    ///
    /// Only single-byte separators are meaningful; anything else falls back to tab.
    pub fn loader(&self) -> TableLoader {
        let delimiter = u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .unwrap_or(TAB);
        TableLoader::new().delimiter(delimiter)
    }

    pub fn resolver(&self) -> NameResolver {
        NameResolver::new(self.sample_policy)
    }

    pub fn recorder(&self) -> Recorder {
        Recorder::new(self.output_dir.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AttendanceConfig::default();
        assert_eq!(config.input, PathBuf::from("people.tsv"));
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.delimiter, '\t');
        assert_eq!(config.sample_policy, SamplePolicy::FirstCell);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AttendanceConfig =
            serde_json::from_str(r#"{"input": "data/dobs.tsv", "sample_policy": "first_present"}"#)
                .unwrap();

        assert_eq!(config.input, PathBuf::from("data/dobs.tsv"));
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.sample_policy, SamplePolicy::FirstPresent);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("attendance.json");
        let config = AttendanceConfig {
            delimiter: ';',
            ..AttendanceConfig::default()
        };

        config.save(&path).unwrap();
        assert_eq!(AttendanceConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_bad_json_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("attendance.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(AttendanceConfig::load(&path), Err(Error::Json(_))));
    }
}
