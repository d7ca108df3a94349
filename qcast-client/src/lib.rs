//! REST client for the QCast media platform.
//!
//! Wraps the backend's book and chapter endpoints in typed async services,
//! and dispatches the mutations produced by `qcast-core`'s reorder
//! translator. The client is deliberately stateless about hierarchy
//! bookkeeping: it sends one call per gesture and trusts the backend to
//! renumber siblings and enforce structural invariants.

pub mod api;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod services;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use dispatch::{HierarchyApi, dispatch};
pub use error::{ClientError, Result};
pub use services::{BookChapters, BooksService, ChaptersService};
