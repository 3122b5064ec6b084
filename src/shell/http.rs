use axum::{
    Extension, Router,
    routing::get,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::products::use_cases::create_product::inbound::http as create_http;
use crate::modules::products::use_cases::delete_product::inbound::http as delete_http;
use crate::modules::products::use_cases::get_product::inbound::http as get_http;
use crate::modules::products::use_cases::list_categories::inbound::http as categories_http;
use crate::modules::products::use_cases::list_products::inbound::http as list_http;
use crate::modules::products::use_cases::update_product::inbound::http as update_http;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route("/health", get(health))
        .route("/products", get(list_http::handle).post(create_http::handle))
        .route("/products/categories", get(categories_http::handle))
        .route(
            "/products/{id}",
            get(get_http::handle)
                .put(update_http::handle)
                .delete(delete_http::handle),
        )
        .route("/graphql", get(graphiql).post(graphql))
        .with_state(state)
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str {
    "ok"
}
