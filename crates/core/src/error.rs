// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for blogr-core operations.

use thiserror::Error;

/// All possible errors that can occur in blogr-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("username already taken: {0}\n  hint: usernames must be unique")]
    UsernameTaken(String),

    #[error("user not found: {0}")]
    UserNotFound(String),

    #[error("user {0} still has posts\n  hint: delete the user's posts first")]
    UserHasPosts(i64),

    #[error("author not found: {0}\n  hint: posts must reference an existing user id")]
    AuthorNotFound(i64),

    #[error("post not found: {0}")]
    PostNotFound(i64),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

impl Error {
    /// Returns the SQLite extended result code if this is a constraint failure.
    pub fn constraint_code(&self) -> Option<i32> {
        match self {
            Error::Database(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Some(e.extended_code)
            }
            _ => None,
        }
    }
}

/// A specialized Result type for blogr-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
