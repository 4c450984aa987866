// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Parser, Subcommand};
use std::path::PathBuf;

const QUICKSTART_HELP: &str = "\
Get started:
  blogr init-db                    Create the database in ./instance
  blogr --instance /srv/blog init-db
  blogr config                     Show where the database lives";

#[derive(Parser)]
#[command(name = "blogr")]
#[command(about = "Manage the blog database")]
#[command(version)]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    /// Instance directory holding config.toml and the database
    /// (default: $BLOGR_INSTANCE_PATH, then ./instance)
    #[arg(long, global = true, value_name = "DIR")]
    pub instance: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clear the existing data and create new tables
    #[command(name = "init-db")]
    InitDb,

    /// Print the SQL schema applied by init-db
    Schema,

    /// Show the resolved instance directory and database path
    Config,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
