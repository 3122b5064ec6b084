// In memory product store.
//
// Purpose
// - Hold the catalog for the lifetime of the process, no persistence.
//
// Responsibilities
// - Keep the product map and the id counter behind one lock so id assignment
//   and insertion happen as a single step.
// - Delegate filtering, ordering and paging to the pure catalog functions.

use crate::modules::products::adapters::outbound::products::{
    ProductQueries, ProductRepository, RepositoryError,
};
use crate::modules::products::core::catalog::{self, ProductPage, ProductQuery};
use crate::modules::products::core::product::{NewProduct, Product, ProductPatch};
use crate::modules::products::core::seed::seed_products;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug)]
struct Catalog {
    products: HashMap<u64, Product>,
    next_id: u64,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            products: HashMap::new(),
            next_id: 1,
        }
    }
}

impl Catalog {
    fn insert(&mut self, new_product: NewProduct) -> Product {
        let id = self.next_id;
        self.next_id += 1;
        let product = Product::create(id, new_product, Utc::now());
        self.products.insert(id, product.clone());
        product
    }
}

#[derive(Debug, Default)]
pub struct InMemoryProducts {
    catalog: RwLock<Catalog>,
    is_offline: bool,
}

impl InMemoryProducts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: impl IntoIterator<Item = NewProduct>) -> Self {
        let mut catalog = Catalog::default();
        for product in products {
            catalog.insert(product);
        }
        Self {
            catalog: RwLock::new(catalog),
            is_offline: false,
        }
    }

    pub fn seeded() -> Self {
        Self::with_products(seed_products())
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("Product store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProductRepository for InMemoryProducts {
    async fn create(&self, product: NewProduct) -> Result<Product, RepositoryError> {
        self.ensure_online()?;
        Ok(self.catalog.write().await.insert(product))
    }

    async fn update(&self, id: u64, patch: ProductPatch) -> Result<Option<Product>, RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.catalog.write().await;
        let Some(product) = guard.products.get_mut(&id) else {
            return Ok(None);
        };
        product.apply(patch, Utc::now());
        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: u64) -> Result<bool, RepositoryError> {
        self.ensure_online()?;
        Ok(self.catalog.write().await.products.remove(&id).is_some())
    }

    async fn clear(&self) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        *self.catalog.write().await = Catalog::default();
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProductQueries for InMemoryProducts {
    async fn list(&self, query: &ProductQuery) -> Result<ProductPage, RepositoryError> {
        self.ensure_online()?;
        let guard = self.catalog.read().await;
        Ok(catalog::select(guard.products.values(), query))
    }

    async fn get_by_id(&self, id: u64) -> Result<Option<Product>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.catalog.read().await.products.get(&id).cloned())
    }

    async fn categories(&self) -> Result<Vec<String>, RepositoryError> {
        self.ensure_online()?;
        let guard = self.catalog.read().await;
        Ok(catalog::distinct_categories(guard.products.values()))
    }
}
