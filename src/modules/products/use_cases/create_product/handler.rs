use crate::modules::products::adapters::outbound::products::ProductRepository;
use crate::modules::products::core::product::Product;
use crate::modules::products::use_cases::create_product::command::CreateProduct;
use crate::modules::products::use_cases::create_product::decide::decide_create;
use crate::modules::products::use_cases::errors::ApplicationError;
use std::sync::Arc;

pub struct CreateProductHandler<TRepository>
where
    TRepository: ProductRepository + Send + Sync + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> CreateProductHandler<TRepository>
where
    TRepository: ProductRepository + Send + Sync + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, command: CreateProduct) -> Result<Product, ApplicationError> {
        let new_product = decide_create(command)?;
        let product = self.repository.create(new_product).await?;
        tracing::info!(product_id = product.id, name = %product.name, "product created");
        Ok(product)
    }
}
