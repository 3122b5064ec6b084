// Field rules shared by the create and update deciders.
//
// Each rule takes the raw, possibly missing value and returns the normalised
// value or the error that describes the first broken rule. Text is trimmed.

#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("product name must not be empty")]
    EmptyName,

    #[error("product price must be greater than 0")]
    NonPositivePrice,

    #[error("product category must not be empty")]
    EmptyCategory,

    #[error("product stock must not be negative")]
    NegativeStock,
}

pub fn non_empty(value: Option<String>, error: ValidationError) -> Result<String, ValidationError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(error)
}

pub fn positive_price(value: Option<f64>) -> Result<f64, ValidationError> {
    value
        .filter(|price| price.is_finite() && *price > 0.0)
        .ok_or(ValidationError::NonPositivePrice)
}

pub fn non_negative_stock(value: Option<i64>) -> Result<u64, ValidationError> {
    value
        .and_then(|stock| u64::try_from(stock).ok())
        .ok_or(ValidationError::NegativeStock)
}

pub fn trimmed(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}
