use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Structured author name. The API never exposes this form directly;
/// responses render it through `Display` as `"{first} {last}"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorName {
    pub first_name: String,
    pub last_name: String,
}

impl fmt::Display for AuthorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// Post entity - a stored blog post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author: AuthorName,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

impl Post {
    /// Build a stored record from caller-supplied fields, assigning a fresh
    /// id and the creation timestamp. Store adapters call this at insertion;
    /// both fields are immutable afterwards.
    pub fn new(new: NewPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            author: new.author,
            title: new.title,
            content: new.content,
            created: Utc::now(),
        }
    }
}

/// Caller-supplied portion of a post; the store assigns `id` and `created`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub author: AuthorName,
    pub title: String,
    pub content: String,
}

/// Partial update of a post. Only `title` and `content` are mutable through
/// the public contract; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}
