use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode, response::Response,
};
use serde::Deserialize;

use crate::modules::products::adapters::inbound::http::{body_rejected, error_response};
use crate::modules::products::use_cases::create_product::command::CreateProduct;
use crate::shared::infrastructure::http::response::{ApiResponse, respond};
use crate::shell::state::AppState;

const FAILURE: &str = "failed to create product";

#[derive(Debug, Deserialize)]
pub struct CreateProductBody {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub stock: Option<i64>,
    pub description: Option<String>,
}

impl From<CreateProductBody> for CreateProduct {
    fn from(body: CreateProductBody) -> Self {
        Self {
            name: body.name,
            price: body.price,
            category: body.category,
            stock: body.stock,
            description: body.description,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateProductBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return error_response(body_rejected(rejection), FAILURE),
    };
    tracing::debug!(?body, "create product requested");

    match state.create_handler.handle(body.into()).await {
        Ok(product) => respond(
            StatusCode::CREATED,
            ApiResponse::ok(product, "product created"),
        ),
        Err(error) => error_response(error, FAILURE),
    }
}
