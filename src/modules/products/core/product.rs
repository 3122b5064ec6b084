use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub stock: u64,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated product that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub category: String,
    pub stock: u64,
    pub description: Option<String>,
}

/// Partial overlay for an existing product. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub stock: Option<u64>,
    pub description: Option<String>,
}

impl Product {
    pub fn create(id: u64, new_product: NewProduct, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new_product.name,
            price: new_product.price,
            category: new_product.category,
            stock: new_product.stock,
            description: new_product.description.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, patch: ProductPatch, now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        // updated_at only moves forward, even if the clock steps back
        self.updated_at = now.max(self.updated_at);
    }
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.stock.is_none()
            && self.description.is_none()
    }
}
