//! Typed wrappers over the backend's REST endpoints.

mod books;
mod chapters;

pub use books::BooksService;
pub use chapters::{BookChapters, ChaptersService};
