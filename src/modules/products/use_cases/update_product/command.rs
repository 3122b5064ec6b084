#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProduct {
    pub id: u64,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub stock: Option<i64>,
    pub description: Option<String>,
}
