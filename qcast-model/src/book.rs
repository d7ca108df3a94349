//! Book records as returned by the QCast API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::hierarchy::{Hierarchical, normalize_parent};
use crate::ids::BookId;

/// A book: the top-level container for chapters and media items. Books may
/// themselves nest under a parent book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub parent_id: Option<i32>,
    #[serde(default)]
    pub sort_order: Option<i32>,
    #[serde(default)]
    pub is_public: bool,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub media_count: Option<i64>,
    #[serde(default)]
    pub chapter_count: Option<i64>,
}

impl Hierarchical for Book {
    type Id = BookId;

    fn node_id(&self) -> BookId {
        self.id
    }

    fn parent(&self) -> Option<BookId> {
        normalize_parent(self.parent_id).map(BookId)
    }

    fn sort_order(&self) -> Option<i32> {
        self.sort_order
    }

    fn label(&self) -> &str {
        &self.title
    }
}
