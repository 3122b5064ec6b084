use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
};
use serde::Deserialize;

use crate::modules::products::adapters::inbound::http::{
    body_rejected, error_response, parse_product_id,
};
use crate::modules::products::use_cases::update_product::command::UpdateProduct;
use crate::shared::infrastructure::http::response::{ApiResponse, respond};
use crate::shell::state::AppState;

const FAILURE: &str = "failed to update product";

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProductBody {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub stock: Option<i64>,
    pub description: Option<String>,
}

impl UpdateProductBody {
    pub fn into_command(self, id: u64) -> UpdateProduct {
        UpdateProduct {
            id,
            name: self.name,
            price: self.price,
            category: self.category,
            stock: self.stock,
            description: self.description,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateProductBody>, JsonRejection>,
) -> Response {
    let id = match parse_product_id(&id) {
        Ok(id) => id,
        Err(error) => return error_response(error, FAILURE),
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return error_response(body_rejected(rejection), FAILURE),
    };
    tracing::debug!(product_id = id, ?body, "update product requested");

    match state.update_handler.handle(body.into_command(id)).await {
        Ok(product) => respond(StatusCode::OK, ApiResponse::ok(product, "product updated")),
        Err(error) => error_response(error, FAILURE),
    }
}
