// Every field is optional here: a missing field is a validation failure that
// the decider reports, not a transport error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateProduct {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub stock: Option<i64>,
    pub description: Option<String>,
}
