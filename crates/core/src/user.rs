// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Blog author accounts.

use serde::{Deserialize, Serialize};

/// A registered author, as stored in the `user` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Auto-assigned row id.
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// Password hash. Stored as given; hashing happens at registration.
    pub password: String,
}

/// Fields supplied when registering a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

impl NewUser {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        NewUser {
            username: username.into(),
            password: password.into(),
        }
    }
}
