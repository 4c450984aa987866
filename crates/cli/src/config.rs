// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Instance directory and configuration.
//!
//! Each deployment keeps its state in an instance directory. It holds the
//! SQLite database and an optional `config.toml` with:
//! - `secret_key`: session signing key (default `"dev"`, override in production)
//! - `database`: database file path, relative to the instance directory unless absolute

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::env;
use crate::error::{Error, Result};

const INSTANCE_DIR_NAME: &str = "instance";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "blogr.sqlite";

/// Instance configuration stored in `<instance>/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_secret_key")]
    pub secret_key: String,
    /// Database path; `None` means `blogr.sqlite` inside the instance directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
}

fn default_secret_key() -> String {
    "dev".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            secret_key: default_secret_key(),
            database: None,
        }
    }
}

impl Config {
    /// Loads configuration from the given instance directory.
    ///
    /// A missing `config.toml` yields the defaults.
    pub fn load(instance_dir: &Path) -> Result<Self> {
        let config_path = instance_dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            tracing::debug!("no config at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Saves configuration to the given instance directory.
    pub fn save(&self, instance_dir: &Path) -> Result<()> {
        let config_path = instance_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }
}

/// Pick the instance directory: explicit flag, then `BLOGR_INSTANCE_PATH`,
/// then `./instance`.
pub fn resolve_instance_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = flag.or_else(env::instance_path) {
        return Ok(path);
    }
    Ok(std::env::current_dir()?.join(INSTANCE_DIR_NAME))
}

/// Create the instance directory if it does not exist yet.
pub fn ensure_instance_dir(instance_dir: &Path) -> Result<()> {
    fs::create_dir_all(instance_dir)?;
    Ok(())
}

/// Get the database path from config
pub fn get_db_path(instance_dir: &Path, config: &Config) -> PathBuf {
    match &config.database {
        Some(path) if path.is_absolute() => path.clone(),
        Some(path) => instance_dir.join(path),
        None => instance_dir.join(DB_FILE_NAME),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
