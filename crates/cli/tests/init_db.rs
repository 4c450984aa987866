// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
use blogr_core::{Database, NewPost, NewUser};
use common::*;

#[test]
fn creates_instance_dir_and_database() {
    let temp = TempDir::new().unwrap();

    blogr()
        .arg("init-db")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized the database."));

    assert!(temp.path().join("instance").is_dir());
    assert!(temp.path().join("instance/blogr.sqlite").exists());
}

#[test]
fn runs_twice() {
    let temp = init_temp();

    blogr()
        .arg("init-db")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized the database."));
}

#[test]
fn instance_flag_overrides_default() {
    let temp = TempDir::new().unwrap();
    let instance = temp.path().join("elsewhere");

    blogr()
        .arg("--instance")
        .arg(&instance)
        .arg("init-db")
        .current_dir(temp.path())
        .assert()
        .success();

    assert!(instance.join("blogr.sqlite").exists());
    assert!(!temp.path().join("instance").exists());
}

#[test]
fn instance_env_var_is_honored() {
    let temp = TempDir::new().unwrap();
    let instance = temp.path().join("from-env");

    blogr()
        .env("BLOGR_INSTANCE_PATH", &instance)
        .arg("init-db")
        .current_dir(temp.path())
        .assert()
        .success();

    assert!(instance.join("blogr.sqlite").exists());
    assert!(!temp.path().join("instance").exists());
}

#[test]
fn malformed_config_reports_error() {
    let temp = TempDir::new().unwrap();
    let instance = temp.path().join("instance");
    std::fs::create_dir_all(&instance).unwrap();
    std::fs::write(instance.join("config.toml"), "secret_key = [").unwrap();

    blogr()
        .arg("init-db")
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error: config error"));
}

#[test]
fn scenario_user_post_join() {
    let temp = init_temp();
    let db = Database::open(&temp.path().join("instance/blogr.sqlite")).unwrap();

    db.create_user(&NewUser::new("alice", "h1")).unwrap();
    db.create_post(&NewPost::new(1, "Hello", "World")).unwrap();

    let posts = db.list_posts().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "Hello");
    assert_eq!(posts[0].body, "World");
    assert_eq!(posts[0].username, "alice");
}

#[test]
fn reinit_discards_data() {
    let temp = init_temp();
    let db_path = temp.path().join("instance/blogr.sqlite");
    {
        let db = Database::open(&db_path).unwrap();
        db.create_user(&NewUser::new("alice", "h1")).unwrap();
    }

    blogr()
        .arg("init-db")
        .current_dir(temp.path())
        .assert()
        .success();

    let db = Database::open(&db_path).unwrap();
    assert!(db.get_user_by_username("alice").is_err());
}
