//! Frequently used types for consumers of the QCast models.

pub use crate::book::Book;
pub use crate::chapter::Chapter;
pub use crate::error::{ModelError, Result as ModelResult};
pub use crate::hierarchy::Hierarchical;
pub use crate::ids::{BookId, ChapterId};
pub use crate::params::{
    BatchReorderParams, CreateBookParams, CreateChapterParams,
    CreateChildChapterParams, MoveParams, ReorderParams, UpdateBookParams,
    UpdateChapterParams,
};
