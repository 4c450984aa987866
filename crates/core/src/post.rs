// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Blog posts and the author-joined feed row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A post row from the `post` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    /// Id of the owning [`User`](crate::User).
    pub author_id: i64,
    /// Filled by the schema default when the row is inserted.
    pub created: DateTime<Utc>,
    pub title: String,
    pub body: String,
}

/// Fields supplied when writing a post. `created` is left to the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub author_id: i64,
    pub title: String,
    pub body: String,
}

impl NewPost {
    pub fn new(author_id: i64, title: impl Into<String>, body: impl Into<String>) -> Self {
        NewPost {
            author_id,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// A post joined with its author's username, as shown on the index page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostWithAuthor {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub created: DateTime<Utc>,
    pub author_id: i64,
    pub username: String,
}
