//! Per-row drag gesture state machine.
//!
//! `idle → dragging → (hovering)* → dropped | cancelled`. A drop emits at
//! most one mutation; cancelling, or releasing outside any valid target,
//! emits nothing. The session holds no item data itself: callers pass the
//! current [`ItemIndex`] so every transition is evaluated against the
//! latest fetched collection.

use std::fmt::Debug;
use std::hash::Hash;

use qcast_model::Hierarchical;

use crate::lookup::ItemIndex;
use crate::reorder::{DropZone, Mutation, infer_drop_zone, translate_drop};

/// Current phase of a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState<Id> {
    Idle,
    Dragging {
        dragged: Id,
    },
    Hovering {
        dragged: Id,
        target: Id,
        zone: DropZone,
    },
}

/// Drives one drag gesture from pick-up to drop or cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession<Id> {
    state: DragState<Id>,
}

impl<Id> Default for DragSession<Id> {
    fn default() -> Self {
        Self {
            state: DragState::Idle,
        }
    }
}

impl<Id: Copy + Eq + Hash + Debug> DragSession<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState<Id> {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        !matches!(self.state, DragState::Idle)
    }

    /// The `(target, zone)` pair an insertion indicator should render,
    /// if the pointer is currently over a target.
    pub fn indicator(&self) -> Option<(Id, DropZone)> {
        match self.state {
            DragState::Hovering { target, zone, .. } => Some((target, zone)),
            _ => None,
        }
    }

    /// Pick an item up. Restarts the gesture if one was already in flight.
    pub fn start(&mut self, dragged: Id) {
        self.state = DragState::Dragging { dragged };
    }

    /// Pointer moved over `target`: re-infer the drop zone from the current
    /// pointer position. Called on every drag-over event, not just at drop
    /// time. No-op while idle.
    pub fn hover_over<T>(
        &mut self,
        index: &ItemIndex<'_, T>,
        target: Id,
        pointer_y: f32,
        row_height: f32,
    ) -> Option<DropZone>
    where
        T: Hierarchical<Id = Id>,
    {
        let dragged = match self.state {
            DragState::Idle => return None,
            DragState::Dragging { dragged } | DragState::Hovering { dragged, .. } => dragged,
        };

        let zone = infer_drop_zone(index, dragged, target, pointer_y, row_height);
        self.state = DragState::Hovering {
            dragged,
            target,
            zone,
        };
        Some(zone)
    }

    /// Pointer left the hover target without dropping: back to plain
    /// dragging, indicator cleared.
    pub fn leave(&mut self) {
        if let DragState::Hovering { dragged, .. } = self.state {
            self.state = DragState::Dragging { dragged };
        }
    }

    /// Release over the current hover target. Returns the single mutation
    /// to apply, or `None` when the gesture resolves to a no-op. The
    /// session returns to idle either way.
    pub fn drop_on_target<T>(&mut self, index: &ItemIndex<'_, T>) -> Option<Mutation<Id>>
    where
        T: Hierarchical<Id = Id>,
    {
        let result = match self.state {
            DragState::Hovering {
                dragged,
                target,
                zone,
            } => translate_drop(index, dragged, target, zone),
            _ => None,
        };
        self.state = DragState::Idle;
        result
    }

    /// Release outside any valid target, or explicit escape: no side
    /// effects, ever.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forest::testing::{item, root};
    use qcast_model::ids::ChapterId;

    fn fixture() -> Vec<crate::forest::testing::TestItem> {
        vec![
            root(10, "P"),
            item(1, Some(10), 0, "A"),
            item(2, Some(10), 1, "B"),
            item(3, Some(3), 0, "self-rooted"),
        ]
    }

    #[test]
    fn full_gesture_emits_one_mutation() {
        let items = fixture();
        let index = ItemIndex::new(&items);
        let mut session = DragSession::new();

        session.start(ChapterId(1));
        assert_eq!(
            session.hover_over(&index, ChapterId(2), 35.0, 40.0),
            Some(DropZone::After)
        );
        assert_eq!(session.indicator(), Some((ChapterId(2), DropZone::After)));

        assert_eq!(
            session.drop_on_target(&index),
            Some(Mutation::SetSortOrder {
                id: ChapterId(1),
                sort_order: 2
            })
        );
        assert_eq!(session.state(), DragState::Idle);
    }

    #[test]
    fn hover_tracks_the_pointer() {
        let items = fixture();
        let index = ItemIndex::new(&items);
        let mut session = DragSession::new();

        session.start(ChapterId(1));
        assert_eq!(
            session.hover_over(&index, ChapterId(2), 5.0, 40.0),
            Some(DropZone::Before)
        );
        assert_eq!(
            session.hover_over(&index, ChapterId(2), 38.0, 40.0),
            Some(DropZone::After)
        );
        assert_eq!(
            session.hover_over(&index, ChapterId(10), 5.0, 40.0),
            Some(DropZone::Inside)
        );
    }

    #[test]
    fn leave_clears_the_indicator_but_keeps_dragging() {
        let items = fixture();
        let index = ItemIndex::new(&items);
        let mut session = DragSession::new();

        session.start(ChapterId(1));
        session.hover_over(&index, ChapterId(2), 5.0, 40.0);
        session.leave();

        assert_eq!(session.indicator(), None);
        assert_eq!(
            session.state(),
            DragState::Dragging {
                dragged: ChapterId(1)
            }
        );
    }

    #[test]
    fn cancel_emits_nothing() {
        let items = fixture();
        let index = ItemIndex::new(&items);
        let mut session = DragSession::new();

        session.start(ChapterId(1));
        session.hover_over(&index, ChapterId(2), 5.0, 40.0);
        session.cancel();

        assert_eq!(session.state(), DragState::Idle);
        // A later stray drop has nothing to act on.
        assert_eq!(session.drop_on_target(&index), None);
    }

    #[test]
    fn drop_without_hover_is_a_no_op() {
        let items = fixture();
        let index = ItemIndex::new(&items);
        let mut session = DragSession::new();

        session.start(ChapterId(1));
        assert_eq!(session.drop_on_target(&index), None);
        assert_eq!(session.state(), DragState::Idle);
    }

    #[test]
    fn hover_while_idle_is_ignored() {
        let items = fixture();
        let index = ItemIndex::new(&items);
        let mut session: DragSession<ChapterId> = DragSession::new();

        assert_eq!(session.hover_over(&index, ChapterId(2), 5.0, 40.0), None);
        assert_eq!(session.state(), DragState::Idle);
    }
}
