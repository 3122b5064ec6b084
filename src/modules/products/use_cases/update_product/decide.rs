// Pure decision function for partial updates.
//
// Only supplied fields are checked, in the same order as creation. A command
// with nothing supplied is valid and yields an empty patch.

use crate::modules::products::core::product::ProductPatch;
use crate::modules::products::core::validation::{
    ValidationError, non_empty, non_negative_stock, positive_price, trimmed,
};
use crate::modules::products::use_cases::update_product::command::UpdateProduct;

pub fn decide_update(command: UpdateProduct) -> Result<ProductPatch, ValidationError> {
    let name = command
        .name
        .map(|name| non_empty(Some(name), ValidationError::EmptyName))
        .transpose()?;
    let price = command
        .price
        .map(|price| positive_price(Some(price)))
        .transpose()?;
    let category = command
        .category
        .map(|category| non_empty(Some(category), ValidationError::EmptyCategory))
        .transpose()?;
    let stock = command
        .stock
        .map(|stock| non_negative_stock(Some(stock)))
        .transpose()?;

    Ok(ProductPatch {
        name,
        price,
        category,
        stock,
        description: trimmed(command.description),
    })
}
