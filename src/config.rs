// src/config.rs

use anyhow::{ensure, Result};
use std::{env, path::PathBuf};

/// Environment variable naming the permit export to load.
pub const CSV_PATH_VAR: &str = "CSV_PATH";

/// Export location used when `CSV_PATH` is unset.
pub const DEFAULT_CSV_PATH: &str = "data/data.csv";

/// Runtime configuration for the query engine's single input.
#[derive(Debug, Clone)]
pub struct Config {
    pub csv_path: PathBuf,
}

impl Config {
    /// Resolve configuration from the environment, falling back to the
    /// bundled default export path.
    pub fn from_env() -> Result<Self> {
        let raw = env::var(CSV_PATH_VAR).unwrap_or_else(|_| DEFAULT_CSV_PATH.to_string());
        Self::with_csv_path(raw.into())
    }

    /// Validate that `csv_path` points at a regular file before the engine
    /// ever tries to read it.
    pub fn with_csv_path(csv_path: PathBuf) -> Result<Self> {
        ensure!(
            csv_path.is_file(),
            "csv path {} does not exist or is not a regular file",
            csv_path.display()
        );
        Ok(Self { csv_path })
    }
}
