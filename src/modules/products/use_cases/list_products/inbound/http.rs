use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::Response,
};

use crate::modules::products::adapters::inbound::http::error_response;
use crate::modules::products::core::catalog::ProductQuery;
use crate::shared::core::pagination::PageRequest;
use crate::shared::infrastructure::http::response::{ApiResponse, respond};
use crate::shell::state::AppState;

// page and limit stay raw strings so garbage falls back to defaults instead of a 400
#[derive(Debug, Default, PartialEq)]
pub struct ListProductsParams {
    pub category: Option<String>,
    pub search: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListProductsParams {
    /// Builds params from decoded query pairs. A repeated key keeps its first
    /// value and unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "category" => &mut params.category,
                "search" => &mut params.search,
                "page" => &mut params.page,
                "limit" => &mut params.limit,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }

    pub fn into_query(self, default_limit: usize) -> ProductQuery {
        let page = PageRequest::from_params(
            self.page.as_deref(),
            self.limit.as_deref(),
            default_limit,
        );
        ProductQuery::new(self.category, self.search, page)
    }
}

pub async fn handle(
    State(state): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    let pairs = match pairs {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            tracing::debug!(%rejection, "unreadable query string, listing with defaults");
            Vec::new()
        }
    };
    let query = ListProductsParams::from_pairs(pairs).into_query(state.default_limit);
    tracing::debug!(?query, "listing products");

    match state.queries.list(&query).await {
        Ok(page) => respond(StatusCode::OK, ApiResponse::ok(page, "products fetched")),
        Err(error) => error_response(error.into(), "failed to fetch products"),
    }
}
