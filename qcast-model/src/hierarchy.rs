//! The seam the tree and reorder logic generalizes over.

use std::fmt::Debug;
use std::hash::Hash;

/// An item that lives in a parent-linked hierarchy with an integer sibling
/// ordering key. Implemented by [`crate::Book`] and [`crate::Chapter`]; the
/// forest builder and reorder translator in `qcast-core` work against this
/// trait only.
pub trait Hierarchical {
    /// Identifier type used for both the item and its parent link.
    type Id: Copy + Eq + Hash + Debug;

    fn node_id(&self) -> Self::Id;

    /// The resolved parent link. Implementations normalize the wire-level
    /// "absent or zero" root encoding to `None` here, so consumers never see
    /// a zero sentinel.
    fn parent(&self) -> Option<Self::Id>;

    /// Sibling ordering key as stored by the backend. Not guaranteed unique
    /// or contiguous; `None` for freshly created items the backend has not
    /// numbered yet.
    fn sort_order(&self) -> Option<i32>;

    /// Human-readable label, used for breadcrumbs and move-picker paths.
    fn label(&self) -> &str;
}

/// Normalize a raw wire parent id: the API encodes "root level" as either an
/// absent field or an explicit zero.
pub fn normalize_parent(raw: Option<i32>) -> Option<i32> {
    raw.filter(|id| *id != 0)
}
