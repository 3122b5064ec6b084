// HTTP glue shared by the product use cases: id parsing, body rejection and
// the mapping from application errors to status codes.

use axum::{extract::rejection::JsonRejection, http::StatusCode, response::Response};

use crate::modules::products::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::http::response::{ApiResponse, respond};

pub fn parse_product_id(raw: &str) -> Result<u64, ApplicationError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ApplicationError::InvalidId(raw.to_string()))
}

pub fn body_rejected(rejection: JsonRejection) -> ApplicationError {
    ApplicationError::InvalidBody(rejection.body_text())
}

pub fn status_of(error: &ApplicationError) -> StatusCode {
    match error {
        ApplicationError::InvalidId(_)
        | ApplicationError::InvalidBody(_)
        | ApplicationError::Validation(_) => StatusCode::BAD_REQUEST,
        ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
        ApplicationError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Renders `error` as a failure envelope. Internal errors are logged here and
/// answered with `failure_message` only.
pub fn error_response(error: ApplicationError, failure_message: &str) -> Response {
    let status = status_of(&error);
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = %error, "{failure_message}");
    } else {
        tracing::debug!(error = %error, status = status.as_u16(), "request rejected");
    }
    respond(status, ApiResponse::failure(error.public_message(failure_message)))
}
