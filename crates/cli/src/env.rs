// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.

use std::path::PathBuf;

/// Environment variable name constants.
pub mod vars {
    pub const BLOGR_INSTANCE_PATH: &str = "BLOGR_INSTANCE_PATH";
    pub const RUST_LOG: &str = "RUST_LOG";
}

/// Returns the value of `BLOGR_INSTANCE_PATH` if set and non-empty.
pub fn instance_path() -> Option<PathBuf> {
    std::env::var_os(vars::BLOGR_INSTANCE_PATH)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
