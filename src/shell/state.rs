use crate::modules::products::adapters::outbound::products::ProductQueries;
use crate::modules::products::adapters::outbound::products_in_memory::InMemoryProducts;
use crate::modules::products::use_cases::create_product::handler::CreateProductHandler;
use crate::modules::products::use_cases::delete_product::handler::DeleteProductHandler;
use crate::modules::products::use_cases::update_product::handler::UpdateProductHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn ProductQueries + Send + Sync>,
    pub create_handler: Arc<CreateProductHandler<InMemoryProducts>>,
    pub update_handler: Arc<UpdateProductHandler<InMemoryProducts>>,
    pub delete_handler: Arc<DeleteProductHandler<InMemoryProducts>>,
    pub default_limit: usize,
}

impl AppState {
    /// Wires every use case to the same store.
    pub fn new(products: Arc<InMemoryProducts>, default_limit: usize) -> Self {
        Self {
            queries: products.clone(),
            create_handler: Arc::new(CreateProductHandler::new(products.clone())),
            update_handler: Arc::new(UpdateProductHandler::new(products.clone())),
            delete_handler: Arc::new(DeleteProductHandler::new(products)),
            default_limit,
        }
    }
}
