use crate::modules::products::core::product::Product;
use chrono::{DateTime, Duration, TimeZone, Utc};

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
}

/// Product created `minutes_after_base` minutes after [`base_time`].
pub fn make_product(
    id: u64,
    name: &str,
    category: &str,
    description: &str,
    minutes_after_base: i64,
) -> Product {
    let created_at = base_time() + Duration::minutes(minutes_after_base);
    Product {
        id,
        name: name.to_string(),
        price: 100.0,
        category: category.to_string(),
        stock: 10,
        description: description.to_string(),
        created_at,
        updated_at: created_at,
    }
}
