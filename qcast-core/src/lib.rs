//! Hierarchy core for QCast.
//!
//! Books and chapters arrive from the API as flat lists of parent-linked
//! records. This crate rebuilds the nested forest from those lists and
//! translates drag-and-drop gestures into the single mutation call the
//! backend expects. Everything here is pure, synchronous computation over
//! already-fetched data; the network surface lives in `qcast-client`.

pub mod drag;
pub mod forest;
pub mod lookup;
pub mod path;
pub mod reorder;

pub use drag::{DragSession, DragState};
pub use forest::{ParentOption, TreeNode, build_forest, parent_options, walk};
pub use lookup::ItemIndex;
pub use path::{display_path, path_to_root};
pub use reorder::{
    DropZone, Mutation, infer_drop_zone, move_to_root, move_under,
    translate_drop,
};
