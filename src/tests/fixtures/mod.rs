pub mod commands {
    pub mod create_product;
}
pub mod http;
pub mod products;
