use axum::{body::Body, http::Request, response::Response};
use http_body_util::BodyExt;
use std::sync::Arc;

use crate::modules::products::adapters::outbound::products_in_memory::InMemoryProducts;
use crate::shared::core::pagination::DEFAULT_LIMIT;
use crate::shell::state::AppState;

pub fn make_test_state() -> AppState {
    AppState::new(Arc::new(InMemoryProducts::seeded()), DEFAULT_LIMIT)
}

pub fn make_offline_state() -> AppState {
    let mut products = InMemoryProducts::seeded();
    products.toggle_offline();
    AppState::new(Arc::new(products), DEFAULT_LIMIT)
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
