//! Chapter records as returned by the QCast API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::hierarchy::{Hierarchical, normalize_parent};
use crate::ids::{BookId, ChapterId};

/// A chapter inside a book. Chapters nest arbitrarily via `parent_id`.
///
/// `level` and `path` are precomputed by the backend for display; structure
/// is always derivable from `parent_id` alone and consumers must not depend
/// on them being present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: ChapterId,
    pub book_id: BookId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_id: Option<i32>,
    /// Depth from root, if the backend supplied it.
    #[serde(default)]
    pub level: Option<i32>,
    /// Slash-delimited ancestor id chain, if the backend supplied it.
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub sort_order: Option<i32>,
    #[serde(default)]
    pub media_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Hierarchical for Chapter {
    type Id = ChapterId;

    fn node_id(&self) -> ChapterId {
        self.id
    }

    fn parent(&self) -> Option<ChapterId> {
        normalize_parent(self.parent_id).map(ChapterId)
    }

    fn sort_order(&self) -> Option<i32> {
        self.sort_order
    }

    fn label(&self) -> &str {
        &self.title
    }
}
