// Pure decision function for product creation.
//
// Rules are checked in a fixed order (name, price, category, stock) and the
// first failure wins. Never performs input or output.

use crate::modules::products::core::product::NewProduct;
use crate::modules::products::core::validation::{
    ValidationError, non_empty, non_negative_stock, positive_price, trimmed,
};
use crate::modules::products::use_cases::create_product::command::CreateProduct;

pub fn decide_create(command: CreateProduct) -> Result<NewProduct, ValidationError> {
    let name = non_empty(command.name, ValidationError::EmptyName)?;
    let price = positive_price(command.price)?;
    let category = non_empty(command.category, ValidationError::EmptyCategory)?;
    let stock = non_negative_stock(command.stock)?;

    Ok(NewProduct {
        name,
        price,
        category,
        stock,
        description: trimmed(command.description),
    })
}
