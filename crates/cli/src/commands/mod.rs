// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod config;
pub mod init_db;
pub mod schema;

use std::path::PathBuf;

use crate::config::{ensure_instance_dir, get_db_path, resolve_instance_dir, Config};
use crate::error::Result;

/// Resolved locations for one instance.
pub(crate) struct Instance {
    pub dir: PathBuf,
    pub config: Config,
    pub db_path: PathBuf,
}

/// Resolve the instance directory, create it if needed, and load its config.
pub(crate) fn open_instance(flag: Option<PathBuf>) -> Result<Instance> {
    let dir = resolve_instance_dir(flag)?;
    ensure_instance_dir(&dir)?;
    let config = Config::load(&dir)?;
    let db_path = get_db_path(&dir, &config);
    Ok(Instance {
        dir,
        config,
        db_path,
    })
}
