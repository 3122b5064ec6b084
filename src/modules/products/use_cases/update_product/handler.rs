use crate::modules::products::adapters::outbound::products::ProductRepository;
use crate::modules::products::core::product::Product;
use crate::modules::products::use_cases::errors::ApplicationError;
use crate::modules::products::use_cases::update_product::command::UpdateProduct;
use crate::modules::products::use_cases::update_product::decide::decide_update;
use std::sync::Arc;

pub struct UpdateProductHandler<TRepository>
where
    TRepository: ProductRepository + Send + Sync + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> UpdateProductHandler<TRepository>
where
    TRepository: ProductRepository + Send + Sync + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, command: UpdateProduct) -> Result<Product, ApplicationError> {
        let id = command.id;
        let patch = decide_update(command)?;
        if patch.is_empty() {
            tracing::debug!(product_id = id, "empty update, only updatedAt is refreshed");
        }
        let product = self
            .repository
            .update(id, patch)
            .await?
            .ok_or(ApplicationError::NotFound(id))?;
        tracing::info!(product_id = id, "product updated");
        Ok(product)
    }
}
