// Ports for product storage.
//
// Commands write through `ProductRepository`, reads go through `ProductQueries`.
// "Not found" is a normal outcome (`None` / `false`), never an error; errors are
// reserved for a failing backend.

use crate::modules::products::core::catalog::{ProductPage, ProductQuery};
use crate::modules::products::core::product::{NewProduct, Product, ProductPatch};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, product: NewProduct) -> Result<Product, RepositoryError>;
    async fn update(&self, id: u64, patch: ProductPatch) -> Result<Option<Product>, RepositoryError>;
    async fn delete(&self, id: u64) -> Result<bool, RepositoryError>;
    /// Drops every product and restarts ids at 1.
    async fn clear(&self) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait ProductQueries: Send + Sync {
    async fn list(&self, query: &ProductQuery) -> Result<ProductPage, RepositoryError>;
    async fn get_by_id(&self, id: u64) -> Result<Option<Product>, RepositoryError>;
    async fn categories(&self) -> Result<Vec<String>, RepositoryError>;
}
