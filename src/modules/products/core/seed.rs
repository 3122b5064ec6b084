use crate::modules::products::core::product::NewProduct;

/// Starter catalog, in creation order.
pub fn seed_products() -> Vec<NewProduct> {
    [
        ("iPhone 15", 5999.0, "Phones", 100, "Latest Apple smartphone"),
        ("MacBook Pro", 12999.0, "Laptops", 50, "High-performance laptop"),
        ("iPad Air", 4399.0, "Tablets", 75, "Thin and light tablet"),
        ("AirPods Pro", 1899.0, "Headphones", 200, "Wireless noise-cancelling earbuds"),
        ("Apple Watch", 2999.0, "Watches", 120, "Smart sports watch"),
    ]
    .into_iter()
    .map(|(name, price, category, stock, description)| NewProduct {
        name: name.to_string(),
        price,
        category: category.to_string(),
        stock,
        description: Some(description.to_string()),
    })
    .collect()
}
