//! Request bodies accepted by the QCast API.
//!
//! Field sets mirror the backend contract exactly; optional fields are
//! omitted from the JSON body rather than sent as null.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateChapterParams {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

impl CreateChapterParams {
    /// Title-only constructor enforcing the form-level invariant: titles
    /// are never empty.
    pub fn new(title: impl Into<String>) -> Result<Self> {
        Ok(Self {
            title: require_title(title)?,
            ..Self::default()
        })
    }
}

/// Body for "create child under parent"; the parent id travels in the URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateChildChapterParams {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateChapterParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

impl CreateChildChapterParams {
    pub fn new(title: impl Into<String>) -> Result<Self> {
        Ok(Self {
            title: require_title(title)?,
            ..Self::default()
        })
    }
}

/// Body for "set sibling position". The backend renumbers the remaining
/// siblings itself; the client never fans out per-sibling updates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReorderParams {
    pub sort_order: i32,
}

/// Body for "reorder the whole sibling list at once": ids in their new
/// display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchReorderParams {
    pub chapter_ids: Vec<i32>,
}

/// Body for "move to parent". Omitting `new_parent_id` moves the item to
/// the root level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_parent_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_sort_order: Option<i32>,
}

fn require_title(title: impl Into<String>) -> Result<String> {
    let title = title.into();
    if title.trim().is_empty() {
        return Err(ModelError::InvalidTitle("title must not be empty".into()));
    }
    Ok(title)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateBookParams {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

impl CreateBookParams {
    pub fn new(title: impl Into<String>) -> Result<Self> {
        Ok(Self {
            title: require_title(title)?,
            ..Self::default()
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateBookParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_titles_are_rejected() {
        assert!(CreateChapterParams::new("  ").is_err());
        assert!(CreateChildChapterParams::new("").is_err());
        assert!(CreateBookParams::new("My Book").is_ok());
    }

    #[test]
    fn absent_optionals_are_omitted_from_the_body() {
        let params = CreateChapterParams::new("Intro").unwrap();
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(body, serde_json::json!({ "title": "Intro" }));
    }

    #[test]
    fn root_moves_serialize_to_an_empty_body() {
        let body = serde_json::to_value(MoveParams::default()).unwrap();
        assert_eq!(body, serde_json::json!({}));
    }
}
