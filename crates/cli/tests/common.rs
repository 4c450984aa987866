// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// `blogr` command with the instance and log env vars cleared.
pub fn blogr() -> Command {
    let mut cmd = cargo_bin_cmd!("blogr");
    cmd.env_remove("BLOGR_INSTANCE_PATH");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Helper to create a temp directory with an initialized database in `./instance`
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    blogr()
        .arg("init-db")
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}
