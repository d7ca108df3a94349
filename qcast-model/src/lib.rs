//! Core data model definitions shared across QCast crates.
#![allow(missing_docs)]

pub mod book;
pub mod chapter;
pub mod error;
pub mod hierarchy;
pub mod ids;
pub mod params;
pub mod prelude;

// Intentionally curated re-exports for downstream consumers.
pub use book::Book;
pub use chapter::Chapter;
pub use error::{ModelError, Result as ModelResult};
pub use hierarchy::Hierarchical;
pub use ids::{BookId, ChapterId};
pub use params::{
    BatchReorderParams, CreateBookParams, CreateChapterParams,
    CreateChildChapterParams, MoveParams, ReorderParams, UpdateBookParams,
    UpdateChapterParams,
};
