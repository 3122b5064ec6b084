// Pure catalog queries over a set of products.
//
// Responsibilities
// - Filter by exact category and by case-insensitive search on name or description.
// - Order newest first, then cut the requested page.
// - Never perform input or output; callers own the storage and its locking.

use crate::modules::products::core::product::Product;
use crate::shared::core::pagination::PageRequest;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub page: PageRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

impl ProductQuery {
    /// Empty category or search strings count as "no filter".
    pub fn new(category: Option<String>, search: Option<String>, page: PageRequest) -> Self {
        Self {
            category: category.filter(|c| !c.is_empty()),
            search: search.filter(|s| !s.is_empty()),
            page,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if product.category != *category {
                return false;
            }
        }
        match &self.search {
            Some(search) => {
                let needle = search.to_lowercase();
                product.name.to_lowercase().contains(&needle)
                    || product.description.to_lowercase().contains(&needle)
            }
            None => true,
        }
    }
}

pub fn select<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    query: &ProductQuery,
) -> ProductPage {
    let mut filtered: Vec<&Product> = products
        .into_iter()
        .filter(|product| query.matches(product))
        .collect();

    // id breaks ties left by coarse clocks, newest id first
    filtered.sort_by_key(|product| Reverse((product.created_at, product.id)));

    let total = filtered.len();
    ProductPage {
        products: query.page.slice(&filtered).into_iter().cloned().collect(),
        total,
        page: query.page.page,
        limit: query.page.limit,
        total_pages: query.page.total_pages(total),
    }
}

pub fn distinct_categories<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<String> {
    products
        .into_iter()
        .map(|product| product.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
