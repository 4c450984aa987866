// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! blogr-core: Storage layer for the blogr blog.
//!
//! This crate owns the SQLite schema, the destructive schema initializer,
//! and the typed row access used by the `blogr` CLI.

pub mod db;
pub mod error;
pub mod post;
pub mod user;

pub use db::{init_schema, Database, SCHEMA};
pub use error::{Error, Result};
pub use post::{NewPost, Post, PostWithAuthor};
pub use user::{NewUser, User};
