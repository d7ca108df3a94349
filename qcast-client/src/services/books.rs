//! Book endpoints.

use qcast_core::{TreeNode, build_forest};
use qcast_model::Book;
use qcast_model::ids::BookId;
use qcast_model::params::{CreateBookParams, ReorderParams, UpdateBookParams};

use crate::api::ApiClient;
use crate::error::Result;

/// Book CRUD. Books nest like chapters do, so the same forest builder and
/// reorder translator apply.
#[derive(Debug, Clone)]
pub struct BooksService {
    client: ApiClient,
}

impl BooksService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Book>> {
        self.client.get("books").await
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Book>> {
        self.client
            .get_with_query("books/search", &[("q", query)])
            .await
    }

    pub async fn get(&self, id: BookId) -> Result<Book> {
        self.client.get(&format!("books/{id}")).await
    }

    pub async fn create(&self, params: &CreateBookParams) -> Result<Book> {
        self.client.post("books", params).await
    }

    pub async fn update(&self, id: BookId, params: &UpdateBookParams) -> Result<Book> {
        self.client.put(&format!("books/{id}"), params).await
    }

    pub async fn delete(&self, id: BookId) -> Result<()> {
        self.client.delete(&format!("books/{id}")).await
    }

    pub async fn reorder(&self, id: BookId, params: &ReorderParams) -> Result<Book> {
        self.client
            .post(&format!("books/{id}/reorder"), params)
            .await
    }

    /// Fetch the flat list and rebuild the book forest locally.
    pub async fn tree(&self) -> Result<Vec<TreeNode<Book>>> {
        let books = self.list().await?;
        Ok(build_forest(&books))
    }
}
