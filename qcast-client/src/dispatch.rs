//! Applying translator output to the API.
//!
//! The reorder translator in `qcast-core` decides; this module forwards the
//! decision as exactly one HTTP call. Fire-and-forget from the translator's
//! point of view: failures come back through [`crate::ClientError`] after
//! the fact, and the displayed tree stays whatever the last successful
//! fetch said until the consumer refetches.

use async_trait::async_trait;
use qcast_core::Mutation;
use qcast_model::ids::{BookId, ChapterId};
use qcast_model::params::{MoveParams, ReorderParams, UpdateBookParams};
use tracing::debug;

use crate::error::Result;
use crate::services::{BookChapters, BooksService};

/// The two mutation calls a drag gesture can resolve to, abstracted over
/// the entity family so books and chapters share one dispatch path.
#[async_trait]
pub trait HierarchyApi: Send + Sync {
    type Id: Copy + Send + Sync;

    /// "Set sibling position" for one item; the backend renumbers the rest
    /// of the sibling list atomically.
    async fn set_sort_order(&self, id: Self::Id, sort_order: i32) -> Result<()>;

    /// "Move to parent"; `None` means root level.
    async fn move_to_parent(
        &self,
        id: Self::Id,
        new_parent_id: Option<Self::Id>,
    ) -> Result<()>;
}

/// Forward one translated mutation as one API call.
pub async fn dispatch<A: HierarchyApi>(api: &A, mutation: Mutation<A::Id>) -> Result<()> {
    match mutation {
        Mutation::SetSortOrder { id, sort_order } => {
            api.set_sort_order(id, sort_order).await
        }
        Mutation::MoveToParent { id, new_parent_id } => {
            api.move_to_parent(id, new_parent_id).await
        }
    }
}

#[async_trait]
impl HierarchyApi for BookChapters<'_> {
    type Id = ChapterId;

    async fn set_sort_order(&self, id: ChapterId, sort_order: i32) -> Result<()> {
        debug!(book = %self.book_id, chapter = %id, sort_order, "reorder chapter");
        self.service
            .reorder(self.book_id, id, &ReorderParams { sort_order })
            .await?;
        Ok(())
    }

    async fn move_to_parent(
        &self,
        id: ChapterId,
        new_parent_id: Option<ChapterId>,
    ) -> Result<()> {
        debug!(book = %self.book_id, chapter = %id, ?new_parent_id, "move chapter");
        self.service
            .move_to(
                self.book_id,
                id,
                &MoveParams {
                    new_parent_id: new_parent_id.map(ChapterId::get),
                    new_sort_order: None,
                },
            )
            .await?;
        Ok(())
    }
}

#[async_trait]
impl HierarchyApi for BooksService {
    type Id = BookId;

    async fn set_sort_order(&self, id: BookId, sort_order: i32) -> Result<()> {
        self.reorder(id, &ReorderParams { sort_order }).await?;
        Ok(())
    }

    async fn move_to_parent(&self, id: BookId, new_parent_id: Option<BookId>) -> Result<()> {
        // Books have no dedicated move endpoint; the update body carries the
        // parent link, with the wire's zero-means-root sentinel.
        self.update(
            id,
            &UpdateBookParams {
                parent_id: Some(new_parent_id.map_or(0, BookId::get)),
                ..UpdateBookParams::default()
            },
        )
        .await?;
        Ok(())
    }
}
