//! Chapter endpoints, all scoped under a book.

use qcast_core::{TreeNode, build_forest};
use qcast_model::ids::{BookId, ChapterId};
use qcast_model::params::{
    BatchReorderParams, CreateChapterParams, CreateChildChapterParams,
    MoveParams, ReorderParams, UpdateChapterParams,
};
use qcast_model::Chapter;

use crate::api::ApiClient;
use crate::error::Result;

/// Chapter CRUD plus the hierarchy mutations the reorder translator emits.
#[derive(Debug, Clone)]
pub struct ChaptersService {
    client: ApiClient,
}

impl ChaptersService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Bind this service to one book for mutation dispatch.
    pub fn scoped(&self, book_id: BookId) -> BookChapters<'_> {
        BookChapters {
            service: self,
            book_id,
        }
    }

    /// Flat chapter list in the backend's display order.
    pub async fn list(&self, book_id: BookId) -> Result<Vec<Chapter>> {
        self.client.get(&format!("books/{book_id}/chapters")).await
    }

    pub async fn search(&self, book_id: BookId, query: &str) -> Result<Vec<Chapter>> {
        self.client
            .get_with_query(
                &format!("books/{book_id}/chapters/search"),
                &[("q", query)],
            )
            .await
    }

    pub async fn get(&self, book_id: BookId, id: ChapterId) -> Result<Chapter> {
        self.client
            .get(&format!("books/{book_id}/chapters/{id}"))
            .await
    }

    pub async fn create(
        &self,
        book_id: BookId,
        params: &CreateChapterParams,
    ) -> Result<Chapter> {
        self.client
            .post(&format!("books/{book_id}/chapters"), params)
            .await
    }

    pub async fn update(
        &self,
        book_id: BookId,
        id: ChapterId,
        params: &UpdateChapterParams,
    ) -> Result<Chapter> {
        self.client
            .put(&format!("books/{book_id}/chapters/{id}"), params)
            .await
    }

    pub async fn delete(&self, book_id: BookId, id: ChapterId) -> Result<()> {
        self.client
            .delete(&format!("books/{book_id}/chapters/{id}"))
            .await
    }

    /// Set one chapter's sibling position; the backend shifts the rest.
    pub async fn reorder(
        &self,
        book_id: BookId,
        id: ChapterId,
        params: &ReorderParams,
    ) -> Result<Chapter> {
        self.client
            .post(&format!("books/{book_id}/chapters/{id}/reorder"), params)
            .await
    }

    /// Renumber an entire sibling list in one call.
    pub async fn batch_reorder(
        &self,
        book_id: BookId,
        params: &BatchReorderParams,
    ) -> Result<()> {
        self.client
            .post_unit(&format!("books/{book_id}/chapters/batch-reorder"), params)
            .await
    }

    pub async fn move_up(&self, book_id: BookId, id: ChapterId) -> Result<Chapter> {
        self.client
            .post_empty(&format!("books/{book_id}/chapters/{id}/move-up"))
            .await
    }

    pub async fn move_down(&self, book_id: BookId, id: ChapterId) -> Result<Chapter> {
        self.client
            .post_empty(&format!("books/{book_id}/chapters/{id}/move-down"))
            .await
    }

    pub async fn children(&self, book_id: BookId, id: ChapterId) -> Result<Vec<Chapter>> {
        self.client
            .get(&format!("books/{book_id}/chapters/{id}/children"))
            .await
    }

    pub async fn create_child(
        &self,
        book_id: BookId,
        parent_id: ChapterId,
        params: &CreateChildChapterParams,
    ) -> Result<Chapter> {
        self.client
            .post(
                &format!("books/{book_id}/chapters/{parent_id}/children"),
                params,
            )
            .await
    }

    /// Reparent a chapter. `new_parent_id: None` in the params moves it to
    /// the book's root level.
    pub async fn move_to(
        &self,
        book_id: BookId,
        id: ChapterId,
        params: &MoveParams,
    ) -> Result<Chapter> {
        self.client
            .post(&format!("books/{book_id}/chapters/{id}/move"), params)
            .await
    }

    /// Fetch the flat list and rebuild the forest locally. Always derived
    /// from the latest fetch; stale trees are the consumer's concern.
    pub async fn tree(&self, book_id: BookId) -> Result<Vec<TreeNode<Chapter>>> {
        let chapters = self.list(book_id).await?;
        Ok(build_forest(&chapters))
    }
}

/// A [`ChaptersService`] bound to one book, the shape mutation dispatch
/// wants.
#[derive(Debug, Clone, Copy)]
pub struct BookChapters<'a> {
    pub(crate) service: &'a ChaptersService,
    pub(crate) book_id: BookId,
}
