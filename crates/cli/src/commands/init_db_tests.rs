// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::config::Config;
use blogr_core::{NewPost, NewUser};
use tempfile::TempDir;

#[test]
fn test_creates_instance_and_database() {
    let temp = TempDir::new().unwrap();
    let instance = temp.path().join("instance");

    run(Some(instance.clone())).unwrap();

    let db = Database::open(&instance.join("blogr.sqlite")).unwrap();
    assert_eq!(db.table_names().unwrap(), vec!["post", "user"]);
}

#[test]
fn test_rerun_discards_rows() {
    let temp = TempDir::new().unwrap();
    let instance = temp.path().to_path_buf();
    run(Some(instance.clone())).unwrap();

    let db_path = instance.join("blogr.sqlite");
    {
        let db = Database::open(&db_path).unwrap();
        let alice = db.create_user(&NewUser::new("alice", "h1")).unwrap();
        db.create_post(&NewPost::new(alice.id, "Hello", "World"))
            .unwrap();
    }

    run(Some(instance)).unwrap();

    let db = Database::open(&db_path).unwrap();
    assert!(db.list_posts().unwrap().is_empty());
    assert!(db.get_user_by_username("alice").is_err());
}

#[test]
fn test_uses_configured_database_path() {
    let temp = TempDir::new().unwrap();
    let instance = temp.path().to_path_buf();
    let config = Config {
        database: Some(PathBuf::from("data/custom.db")),
        ..Config::default()
    };
    config.save(&instance).unwrap();

    run(Some(instance.clone())).unwrap();

    assert!(instance.join("data/custom.db").exists());
    assert!(!instance.join("blogr.sqlite").exists());
}

#[test]
fn test_malformed_config_fails() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.toml"), "database = ").unwrap();

    let err = run(Some(temp.path().to_path_buf())).unwrap_err();
    assert!(matches!(err, crate::Error::Config(_)));
}
