use async_graphql::{Context, InputObject, Object, Result as GqlResult, SimpleObject};

use crate::modules::products::core::catalog::{ProductPage, ProductQuery};
use crate::modules::products::core::product::Product;
use crate::modules::products::use_cases::create_product::command::CreateProduct;
use crate::modules::products::use_cases::errors::ApplicationError;
use crate::modules::products::use_cases::update_product::command::UpdateProduct;
use crate::shared::core::pagination::PageRequest;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlProduct {
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub stock: u64,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Product> for GqlProduct {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            price: p.price,
            category: p.category,
            stock: p.stock,
            description: p.description,
            created_at: p.created_at.to_rfc3339(),
            updated_at: p.updated_at.to_rfc3339(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlProductPage {
    pub products: Vec<GqlProduct>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

impl From<ProductPage> for GqlProductPage {
    fn from(p: ProductPage) -> Self {
        Self {
            products: p.products.into_iter().map(Into::into).collect(),
            total: p.total as u64,
            page: p.page as u64,
            limit: p.limit as u64,
            total_pages: p.total_pages as u64,
        }
    }
}

#[derive(InputObject)]
pub struct CreateProductInput {
    pub name: String,
    pub price: f64,
    pub category: String,
    pub stock: i64,
    pub description: Option<String>,
}

#[derive(InputObject, Default)]
pub struct UpdateProductInput {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub stock: Option<i64>,
    pub description: Option<String>,
}

fn gql_error(error: ApplicationError, failure_message: &str) -> async_graphql::Error {
    if let ApplicationError::Repository(source) = &error {
        tracing::error!(error = %source, "{failure_message}");
    }
    async_graphql::Error::new(error.public_message(failure_message))
}

fn page_request(page: Option<i64>, limit: Option<i64>, default_limit: usize) -> PageRequest {
    let page = page.map(|v| v.to_string());
    let limit = limit.map(|v| v.to_string());
    PageRequest::from_params(page.as_deref(), limit.as_deref(), default_limit)
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn products(
        &self,
        context: &Context<'_>,
        category: Option<String>,
        search: Option<String>,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> GqlResult<GqlProductPage> {
        let state = context.data_unchecked::<AppState>();
        let query = ProductQuery::new(
            category,
            search,
            page_request(page, limit, state.default_limit),
        );
        let page = state
            .queries
            .list(&query)
            .await
            .map_err(|e| gql_error(e.into(), "failed to fetch products"))?;
        Ok(page.into())
    }

    async fn product(&self, context: &Context<'_>, id: u64) -> GqlResult<GqlProduct> {
        let state = context.data_unchecked::<AppState>();
        let product = state
            .queries
            .get_by_id(id)
            .await
            .map_err(|e| gql_error(e.into(), "failed to fetch product"))?
            .ok_or_else(|| gql_error(ApplicationError::NotFound(id), "failed to fetch product"))?;
        Ok(product.into())
    }

    async fn categories(&self, context: &Context<'_>) -> GqlResult<Vec<String>> {
        let state = context.data_unchecked::<AppState>();
        state
            .queries
            .categories()
            .await
            .map_err(|e| gql_error(e.into(), "failed to fetch categories"))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_product(
        &self,
        context: &Context<'_>,
        input: CreateProductInput,
    ) -> GqlResult<GqlProduct> {
        let state = context.data_unchecked::<AppState>();
        let command = CreateProduct {
            name: Some(input.name),
            price: Some(input.price),
            category: Some(input.category),
            stock: Some(input.stock),
            description: input.description,
        };
        let product = state
            .create_handler
            .handle(command)
            .await
            .map_err(|e| gql_error(e, "failed to create product"))?;
        Ok(product.into())
    }

    async fn update_product(
        &self,
        context: &Context<'_>,
        id: u64,
        input: UpdateProductInput,
    ) -> GqlResult<GqlProduct> {
        let state = context.data_unchecked::<AppState>();
        let command = UpdateProduct {
            id,
            name: input.name,
            price: input.price,
            category: input.category,
            stock: input.stock,
            description: input.description,
        };
        let product = state
            .update_handler
            .handle(command)
            .await
            .map_err(|e| gql_error(e, "failed to update product"))?;
        Ok(product.into())
    }

    async fn delete_product(&self, context: &Context<'_>, id: u64) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state
            .delete_handler
            .handle(id)
            .await
            .map_err(|e| gql_error(e, "failed to delete product"))?;
        Ok(true)
    }
}

#[cfg(test)]
mod product_graphql_tests {
    use crate::shell::graphql::build_schema;
    use crate::tests::fixtures::http::{make_offline_state, make_test_state};
    use serde_json::json;

    #[tokio::test]
    async fn it_should_list_products_newest_first() {
        let schema = build_schema(make_test_state());
        let response = schema
            .execute("{ products(limit: 2) { total totalPages products { id name } } }")
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let data = response.data.into_json().unwrap();
        assert_eq!(data["products"]["total"], json!(5));
        assert_eq!(data["products"]["totalPages"], json!(3));
        assert_eq!(
            data["products"]["products"],
            json!([{"id": 5, "name": "Apple Watch"}, {"id": 4, "name": "AirPods Pro"}])
        );
    }

    #[tokio::test]
    async fn it_should_report_an_unknown_product_as_not_found() {
        let schema = build_schema(make_test_state());
        let response = schema.execute("{ product(id: 42) { name } }").await;
        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.errors[0].message, "product not found");
    }

    #[tokio::test]
    async fn it_should_create_update_and_delete_a_product() {
        let schema = build_schema(make_test_state());

        let response = schema
            .execute(r#"mutation { createProduct(input: {name: "Test", price: 10, category: "X", stock: 1}) { id description } }"#)
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        assert_eq!(
            response.data.into_json().unwrap(),
            json!({"createProduct": {"id": 6, "description": ""}})
        );

        let response = schema
            .execute(r#"mutation { updateProduct(id: 6, input: {stock: 5}) { name stock } }"#)
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        assert_eq!(
            response.data.into_json().unwrap(),
            json!({"updateProduct": {"name": "Test", "stock": 5}})
        );

        let response = schema.execute("mutation { deleteProduct(id: 6) }").await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);

        let response = schema.execute("mutation { deleteProduct(id: 6) }").await;
        assert_eq!(response.errors[0].message, "product not found");
    }

    #[tokio::test]
    async fn it_should_surface_validation_messages() {
        let schema = build_schema(make_test_state());
        let response = schema
            .execute(r#"mutation { createProduct(input: {name: "Test", price: 0, category: "X", stock: 1}) { id } }"#)
            .await;
        assert_eq!(
            response.errors[0].message,
            "product price must be greater than 0"
        );
    }

    #[tokio::test]
    async fn it_should_hide_backend_errors() {
        let schema = build_schema(make_offline_state());
        let response = schema.execute("{ categories }").await;
        assert_eq!(response.errors[0].message, "failed to fetch categories");
    }
}
