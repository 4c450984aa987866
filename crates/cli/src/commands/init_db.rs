// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use blogr_core::Database;

use crate::error::Result;

use super::open_instance;

/// Clear the existing data and create new tables.
pub fn run(instance: Option<PathBuf>) -> Result<()> {
    let instance = open_instance(instance)?;
    tracing::info!("initializing database at {}", instance.db_path.display());

    let mut db = Database::open(&instance.db_path)?;
    db.init_schema()?;
    db.close()?;

    println!("Initialized the database.");
    Ok(())
}

#[cfg(test)]
#[path = "init_db_tests.rs"]
mod tests;
