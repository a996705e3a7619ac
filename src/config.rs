//! Data directory handling for the big7 CLI.
//!
//! The data directory (default `$HOME/big7`, overridable with `--big7-home`
//! or `BIG7_HOME`) holds the record slot file. The slot file name carries the
//! original storage key, `big7-records`.

use crate::{fs, Result};
use anyhow::Context;
use std::path::{Path, PathBuf};

const RECORDS_JSON: &str = "big7-records.json";

/// The `Config` object represents the paths of the data directory. It creates
/// the directory on first use, so a fresh machine works without a setup step.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Config {
    root: PathBuf,
    records_path: PathBuf,
}

impl Config {
    /// Resolves the data directory at `big7_home`, creating it if needed.
    pub fn new(big7_home: impl Into<PathBuf>) -> Result<Self> {
        let root = big7_home.into();
        fs::create_dir_all(&root).context("Unable to create the big7 home directory")?;
        let records_path = root.join(RECORDS_JSON);
        Ok(Self { root, records_path })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The path of the record slot file.
    pub fn records_path(&self) -> &Path {
        &self.records_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_the_home_directory() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("big7");
        let config = Config::new(&home).unwrap();
        assert!(home.is_dir());
        assert_eq!(config.root(), home);
        assert_eq!(config.records_path(), home.join(RECORDS_JSON));
    }

    #[test]
    fn test_existing_directory_is_fine() {
        let dir = TempDir::new().unwrap();
        let first = Config::new(dir.path()).unwrap();
        let second = Config::new(dir.path()).unwrap();
        assert_eq!(first, second);
    }
}
