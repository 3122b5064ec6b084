use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};

use crate::modules::products::adapters::inbound::http::{error_response, parse_product_id};
use crate::shared::infrastructure::http::response::{ApiResponse, respond};
use crate::shell::state::AppState;

const FAILURE: &str = "failed to delete product";

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_product_id(&id) {
        Ok(id) => id,
        Err(error) => return error_response(error, FAILURE),
    };

    match state.delete_handler.handle(id).await {
        Ok(()) => respond(StatusCode::OK, ApiResponse::done("product deleted")),
        Err(error) => error_response(error, FAILURE),
    }
}
