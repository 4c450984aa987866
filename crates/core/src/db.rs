// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed storage for users and posts.
//!
//! [`init_schema`] is a destructive reset: it drops both tables and creates
//! them again from [`SCHEMA`]. The [`Database`] struct wraps one connection
//! with foreign-key enforcement switched on and provides typed row access.

use chrono::{DateTime, NaiveDateTime, Utc};
use rusqlite::{ffi, params, Connection, OptionalExtension, Row};
use std::path::Path;

use crate::error::{Error, Result};
use crate::post::{NewPost, Post, PostWithAuthor};
use crate::user::{NewUser, User};

/// SQL schema for the blog database.
///
/// Drops `user` and `post` if present, then creates them. `user` is created
/// first because `post.author_id` references it.
pub const SCHEMA: &str = include_str!("schema.sql");

/// Drop and recreate every table in [`SCHEMA`], discarding all rows.
///
/// The batch runs in one transaction, so a failing statement leaves the
/// previous tables in place. Foreign-key enforcement is suspended while the
/// tables are dropped and put back to its prior setting afterward.
pub fn init_schema(conn: &mut Connection) -> Result<()> {
    let enforced: bool = conn.query_row("PRAGMA foreign_keys", [], |row| row.get(0))?;
    set_foreign_keys(conn, false)?;

    tracing::info!("resetting blog schema");
    let result = reset_tables(conn);
    if let Err(e) = &result {
        tracing::warn!("schema reset failed: {}", e);
    }

    let restored = set_foreign_keys(conn, enforced);
    result.and(restored)
}

fn reset_tables(conn: &mut Connection) -> Result<()> {
    let tx = conn.transaction()?;
    tx.execute_batch(SCHEMA)?;
    tx.commit()?;
    Ok(())
}

fn set_foreign_keys(conn: &Connection, on: bool) -> Result<()> {
    let sql = if on {
        "PRAGMA foreign_keys = ON;"
    } else {
        "PRAGMA foreign_keys = OFF;"
    };
    conn.execute_batch(sql)?;
    Ok(())
}

/// Parse a `created` value from the database.
///
/// SQLite's `CURRENT_TIMESTAMP` writes `YYYY-MM-DD HH:MM:SS` in UTC; RFC3339
/// text written by other tools is accepted too.
fn parse_timestamp(
    value: &str,
    column: &str,
) -> std::result::Result<DateTime<Utc>, rusqlite::Error> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(Error::CorruptedData(format!(
                    "invalid timestamp '{value}' in column '{column}'"
                ))),
            )
        })
}

fn user_from_row(row: &Row<'_>) -> std::result::Result<User, rusqlite::Error> {
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        password: row.get(2)?,
    })
}

fn post_from_row(row: &Row<'_>) -> std::result::Result<Post, rusqlite::Error> {
    let created: String = row.get(2)?;
    Ok(Post {
        id: row.get(0)?,
        author_id: row.get(1)?,
        created: parse_timestamp(&created, "created")?,
        title: row.get(3)?,
        body: row.get(4)?,
    })
}

/// SQLite database connection with blog storage operations.
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Database {
    /// Open a database file, creating it and its parent directory if needed.
    ///
    /// The schema is not touched; call [`Database::init_schema`] to create it.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        tracing::debug!("opening database at {}", path.display());
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;

        Ok(Database { conn })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(Database { conn })
    }

    /// Clear all existing data and create fresh tables.
    pub fn init_schema(&mut self) -> Result<()> {
        init_schema(&mut self.conn)
    }

    /// Close the connection, reporting any error SQLite raises while closing.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| Error::Database(e))
    }

    /// Names of all user-defined tables, sorted.
    pub fn table_names(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT name FROM sqlite_master
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
             ORDER BY name",
        )?;
        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        Ok(names)
    }

    /// The stored `CREATE TABLE` statement for `name`, if the table exists.
    pub fn table_sql(&self, name: &str) -> Result<Option<String>> {
        let sql = self
            .conn
            .query_row(
                "SELECT sql FROM sqlite_master WHERE type = 'table' AND name = ?1",
                params![name],
                |row| row.get(0),
            )
            .optional()?;
        Ok(sql)
    }

    /// Register a user.
    pub fn create_user(&self, user: &NewUser) -> Result<User> {
        self.conn
            .execute(
                "INSERT INTO user (username, password) VALUES (?1, ?2)",
                params![user.username, user.password],
            )
            .map_err(Error::from)
            .map_err(|e| match e.constraint_code() {
                Some(ffi::SQLITE_CONSTRAINT_UNIQUE) => Error::UsernameTaken(user.username.clone()),
                _ => e,
            })?;

        Ok(User {
            id: self.conn.last_insert_rowid(),
            username: user.username.clone(),
            password: user.password.clone(),
        })
    }

    pub fn get_user(&self, id: i64) -> Result<User> {
        self.conn
            .query_row(
                "SELECT id, username, password FROM user WHERE id = ?1",
                params![id],
                user_from_row,
            )
            .optional()?
            .ok_or_else(|| Error::UserNotFound(id.to_string()))
    }

    pub fn get_user_by_username(&self, username: &str) -> Result<User> {
        self.conn
            .query_row(
                "SELECT id, username, password FROM user WHERE username = ?1",
                params![username],
                user_from_row,
            )
            .optional()?
            .ok_or_else(|| Error::UserNotFound(username.to_string()))
    }

    /// Delete a user. Users who still own posts cannot be deleted.
    pub fn delete_user(&self, id: i64) -> Result<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM user WHERE id = ?1", params![id])
            .map_err(Error::from)
            .map_err(|e| match e.constraint_code() {
                // RESTRICT actions report as a trigger constraint
                Some(ffi::SQLITE_CONSTRAINT_FOREIGNKEY | ffi::SQLITE_CONSTRAINT_TRIGGER) => {
                    Error::UserHasPosts(id)
                }
                _ => e,
            })?;

        if deleted == 0 {
            return Err(Error::UserNotFound(id.to_string()));
        }
        Ok(())
    }

    /// Write a post. The `created` timestamp comes from the schema default.
    pub fn create_post(&self, post: &NewPost) -> Result<Post> {
        self.conn
            .execute(
                "INSERT INTO post (author_id, title, body) VALUES (?1, ?2, ?3)",
                params![post.author_id, post.title, post.body],
            )
            .map_err(Error::from)
            .map_err(|e| match e.constraint_code() {
                Some(ffi::SQLITE_CONSTRAINT_FOREIGNKEY) => Error::AuthorNotFound(post.author_id),
                _ => e,
            })?;

        self.get_post(self.conn.last_insert_rowid())
    }

    pub fn get_post(&self, id: i64) -> Result<Post> {
        self.conn
            .query_row(
                "SELECT id, author_id, created, title, body FROM post WHERE id = ?1",
                params![id],
                post_from_row,
            )
            .optional()?
            .ok_or(Error::PostNotFound(id))
    }

    /// All posts with their author's username, newest first.
    pub fn list_posts(&self) -> Result<Vec<PostWithAuthor>> {
        let mut stmt = self.conn.prepare(
            "SELECT p.id, p.title, p.body, p.created, p.author_id, u.username
             FROM post p JOIN user u ON p.author_id = u.id
             ORDER BY julianday(p.created) DESC, p.id DESC",
        )?;

        let posts = stmt
            .query_map([], |row| {
                let created: String = row.get(3)?;
                Ok(PostWithAuthor {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    body: row.get(2)?,
                    created: parse_timestamp(&created, "created")?,
                    author_id: row.get(4)?,
                    username: row.get(5)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(posts)
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
