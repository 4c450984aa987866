// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! blogr - command-line host for the blog database.
//!
//! Resolves the instance directory, loads its configuration, and runs the
//! storage operations from [`blogr_core`].
//!
//! ```rust,ignore
//! use blogr::{config, Config, Database};
//!
//! let instance = config::resolve_instance_dir(None)?;
//! let config = Config::load(&instance)?;
//! let mut db = Database::open(&config::get_db_path(&instance, &config))?;
//! db.init_schema()?;
//! ```

mod cli;
mod commands;

pub mod config;
pub mod env;
pub mod error;
pub mod logging;

pub use blogr_core::Database;
pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{Error, Result};

/// Execute a parsed command line. This is the main entry point for library
/// users and lets tests run commands without spawning a process.
pub fn run(cli: Cli) -> Result<()> {
    let instance = cli.instance;
    match cli.command {
        Command::InitDb => commands::init_db::run(instance),
        Command::Schema => commands::schema::run(),
        Command::Config => commands::config::run(instance),
    }
}
