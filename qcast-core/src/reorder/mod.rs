//! Drag-gesture to mutation translation.
//!
//! A drop produces at most one backend call: either "set sibling position"
//! or "move to parent". The translator is pure computation over the latest
//! fetched collection; it never touches the network and never mutates local
//! state, so a failed call leaves the displayed tree consistent with the
//! last successful fetch.

use qcast_model::Hierarchical;
use tracing::debug;

use crate::lookup::ItemIndex;


/// Where a drag gesture lands relative to its target row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropZone {
    /// Same-level insert above the target.
    Before,
    /// Same-level insert below the target.
    After,
    /// Reparent under the target.
    Inside,
}

/// The single mutation a gesture translates to, mirroring the backend's
/// reorder and move endpoints one-to-one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation<Id> {
    /// Set the item's sibling position. The backend renumbers the other
    /// siblings transactionally; the client sends one position, not N.
    SetSortOrder { id: Id, sort_order: i32 },
    /// Reparent the item. `None` means root level; the item is appended
    /// under the new parent at the backend's default position.
    MoveToParent { id: Id, new_parent_id: Option<Id> },
}

/// Translate a completed drop into its mutation, or `None` for gestures
/// that are defined as no-ops (drop on self, unknown ids).
///
/// `Before`/`After` between current siblings becomes a position update
/// derived from the target's `sort_order` (missing treated as 0). Any
/// cross-parent gesture, and any `Inside` drop, becomes a reparent onto
/// the target regardless of the requested zone.
pub fn translate_drop<T: Hierarchical>(
    index: &ItemIndex<'_, T>,
    dragged: T::Id,
    target: T::Id,
    zone: DropZone,
) -> Option<Mutation<T::Id>> {
    if dragged == target {
        return None;
    }
    index.get(dragged)?;
    let target_item = index.get(target)?;

    let mutation = match zone {
        DropZone::Inside => Mutation::MoveToParent {
            id: dragged,
            new_parent_id: Some(target),
        },
        DropZone::Before | DropZone::After => {
            if index.are_siblings(dragged, target) {
                let base = target_item.sort_order().unwrap_or(0);
                let sort_order = if zone == DropZone::After { base + 1 } else { base };
                Mutation::SetSortOrder {
                    id: dragged,
                    sort_order,
                }
            } else {
                Mutation::MoveToParent {
                    id: dragged,
                    new_parent_id: Some(target),
                }
            }
        }
    };

    debug!(?dragged, ?target, ?zone, ?mutation, "translated drop gesture");
    Some(mutation)
}

/// Classify the hover position while a drag is in flight.
///
/// `pointer_y` is the pointer offset within the target row. Current
/// siblings split the row at its vertical midpoint into `Before`/`After`;
/// a non-sibling target always reads as `Inside`, so a cross-level drag is
/// never mistaken for a same-level reorder. Evaluated on every drag-over
/// so the insertion indicator tracks the pointer live.
pub fn infer_drop_zone<T: Hierarchical>(
    index: &ItemIndex<'_, T>,
    dragged: T::Id,
    target: T::Id,
    pointer_y: f32,
    row_height: f32,
) -> DropZone {
    if index.are_siblings(dragged, target) {
        if pointer_y < row_height / 2.0 {
            DropZone::Before
        } else {
            DropZone::After
        }
    } else {
        DropZone::Inside
    }
}

/// "Move to root" menu entry: same mutation contract as a drop, no drag
/// involved.
pub fn move_to_root<Id>(id: Id) -> Mutation<Id> {
    Mutation::MoveToParent {
        id,
        new_parent_id: None,
    }
}

/// "Move to named parent" picker entry. Choosing the item itself is a
/// no-op; the picker excludes the whole moving subtree, this guard only
/// backstops the direct call.
pub fn move_under<Id: PartialEq>(id: Id, new_parent_id: Option<Id>) -> Option<Mutation<Id>> {
    if new_parent_id.as_ref() == Some(&id) {
        return None;
    }
    Some(Mutation::MoveToParent { id, new_parent_id })
}
