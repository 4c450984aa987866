// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::error::Result;

use super::open_instance;

/// Print the resolved instance directory and database path.
pub fn run(instance: Option<PathBuf>) -> Result<()> {
    let instance = open_instance(instance)?;
    println!("instance: {}", instance.dir.display());
    println!("database: {}", instance.db_path.display());
    if instance.config.secret_key == "dev" {
        println!("secret_key: dev (default, override in config.toml)");
    } else {
        println!("secret_key: set");
    }
    Ok(())
}
