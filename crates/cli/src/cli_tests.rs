// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use clap::CommandFactory;
use yare::parameterized;

#[test]
fn cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn parses_init_db() {
    let cli = Cli::try_parse_from(["blogr", "init-db"]).unwrap();
    assert!(matches!(cli.command, Command::InitDb));
    assert!(cli.instance.is_none());
}

#[parameterized(
    before_subcommand = { &["blogr", "--instance", "/tmp/blog", "init-db"] },
    after_subcommand = { &["blogr", "init-db", "--instance", "/tmp/blog"] },
)]
fn parses_instance_flag(args: &[&str]) {
    let cli = Cli::try_parse_from(args).unwrap();
    assert_eq!(cli.instance, Some(PathBuf::from("/tmp/blog")));
}

#[test]
fn rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["blogr", "migrate"]).is_err());
}
