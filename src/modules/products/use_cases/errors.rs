use crate::modules::products::adapters::outbound::products::RepositoryError;
use crate::modules::products::core::validation::ValidationError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ApplicationError {
    #[error("invalid product id: {0}")]
    InvalidId(String),

    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("product {0} not found")]
    NotFound(u64),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ApplicationError {
    /// Message that is safe to hand back to a caller. Backend failures are
    /// replaced by `failure_message` so internals never leak.
    pub fn public_message(&self, failure_message: &str) -> String {
        match self {
            ApplicationError::InvalidId(_) => "invalid product id".to_string(),
            ApplicationError::InvalidBody(_) => "invalid request body".to_string(),
            ApplicationError::Validation(error) => error.to_string(),
            ApplicationError::NotFound(_) => "product not found".to_string(),
            ApplicationError::Repository(_) => failure_message.to_string(),
        }
    }
}
