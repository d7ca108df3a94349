//! Shared fixtures for hierarchy tests.

use qcast_model::hierarchy::{Hierarchical, normalize_parent};
use qcast_model::ids::ChapterId;

/// Minimal hierarchical record used across the core's unit tests.
#[derive(Debug, Clone, PartialEq)]
pub struct TestItem {
    pub id: ChapterId,
    pub parent_id: Option<i32>,
    pub sort_order: Option<i32>,
    pub title: String,
}

impl Hierarchical for TestItem {
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

pub fn item(id: i32, parent: Option<i32>, sort: i32, title: &str) -> TestItem {
    TestItem {
        id: ChapterId(id),
        parent_id: parent,
        sort_order: Some(sort),
        title: title.to_string(),
    }
}

pub fn root(id: i32, title: &str) -> TestItem {
    item(id, None, 0, title)
}

/// An item whose parent id does not resolve (or resolves to itself).
pub fn orphan(id: i32, parent: i32, title: &str) -> TestItem {
    item(id, Some(parent), 0, title)
}
