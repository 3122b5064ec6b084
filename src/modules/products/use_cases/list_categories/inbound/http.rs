use axum::{extract::State, http::StatusCode, response::Response};

use crate::modules::products::adapters::inbound::http::error_response;
use crate::shared::infrastructure::http::response::{ApiResponse, respond};
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Response {
    match state.queries.categories().await {
        Ok(categories) => respond(
            StatusCode::OK,
            ApiResponse::ok(categories, "categories fetched"),
        ),
        Err(error) => error_response(error.into(), "failed to fetch categories"),
    }
}
