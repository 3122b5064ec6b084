use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};

use crate::modules::products::adapters::inbound::http::{error_response, parse_product_id};
use crate::modules::products::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::http::response::{ApiResponse, respond};
use crate::shell::state::AppState;

const FAILURE: &str = "failed to fetch product";

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_product_id(&id) {
        Ok(id) => id,
        Err(error) => return error_response(error, FAILURE),
    };

    match state.queries.get_by_id(id).await {
        Ok(Some(product)) => respond(StatusCode::OK, ApiResponse::ok(product, "product fetched")),
        Ok(None) => error_response(ApplicationError::NotFound(id), FAILURE),
        Err(error) => error_response(error.into(), FAILURE),
    }
}
