// Shared test fixture for the CreateProduct command.
// Defaults come from `json/create_product.json`; setters override single fields.

use crate::modules::products::core::product::NewProduct;
use crate::modules::products::use_cases::create_product::command::CreateProduct;
use serde::Deserialize;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductDto {
    pub name: String,
    pub price: f64,
    pub category: String,
    pub stock: i64,
    pub description: String,
}

pub fn create_product_dto() -> CreateProductDto {
    serde_json::from_str(include_str!("json/create_product.json")).unwrap()
}

/// Already-validated product with the given name, for store level tests.
pub fn new_product(name: &str) -> NewProduct {
    let dto = create_product_dto();
    NewProduct {
        name: name.to_string(),
        price: dto.price,
        category: dto.category,
        stock: dto.stock as u64,
        description: Some(dto.description),
    }
}

pub struct CreateProductBuilder {
    inner: CreateProduct,
}

impl Default for CreateProductBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateProductBuilder {
    pub fn new() -> Self {
        let dto = create_product_dto();
        Self {
            inner: CreateProduct {
                name: Some(dto.name),
                price: Some(dto.price),
                category: Some(dto.category),
                stock: Some(dto.stock),
                description: Some(dto.description),
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = Some(v.into());
        self
    }

    pub fn without_name(mut self) -> Self {
        self.inner.name = None;
        self
    }

    pub fn price(mut self, v: f64) -> Self {
        self.inner.price = Some(v);
        self
    }

    pub fn without_price(mut self) -> Self {
        self.inner.price = None;
        self
    }

    pub fn category(mut self, v: impl Into<String>) -> Self {
        self.inner.category = Some(v.into());
        self
    }

    pub fn stock(mut self, v: i64) -> Self {
        self.inner.stock = Some(v);
        self
    }

    pub fn without_stock(mut self) -> Self {
        self.inner.stock = None;
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = Some(v.into());
        self
    }

    pub fn without_description(mut self) -> Self {
        self.inner.description = None;
        self
    }

    pub fn build(self) -> CreateProduct {
        self.inner
    }
}

#[cfg(test)]
mod create_product_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = CreateProductBuilder::default().build();
        assert_eq!(built.name.as_deref(), Some("Kindle Paperwhite"));
        assert_eq!(built.price, Some(1099.0));
        assert_eq!(built.category.as_deref(), Some("E-readers"));
        assert_eq!(built.stock, Some(30));
        assert_eq!(built.description.as_deref(), Some("Glare-free reading"));
    }

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let custom = CreateProductBuilder::new()
            .name("Kobo")
            .price(899.5)
            .category("Readers")
            .stock(0)
            .without_description()
            .build();
        assert_eq!(
            custom,
            CreateProduct {
                name: Some("Kobo".into()),
                price: Some(899.5),
                category: Some("Readers".into()),
                stock: Some(0),
                description: None,
            }
        );
    }
}
