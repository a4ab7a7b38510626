//! Request shape checks that run before any store is touched.

use super::error::ServiceError;
use crate::model::ProductDetails;

/// Rejects a blank user id or a non-positive quantity.
///
/// Returns the quantity narrowed to the unsigned type the rest of the workflow uses.
pub fn validate_request(user_id: &str, quantity: i64) -> Result<u32, ServiceError> {
    if user_id.trim().is_empty() {
        return Err(ServiceError::InvalidArgument(
            "User ID cannot be null or empty".to_string(),
        ));
    }
    if quantity <= 0 {
        return Err(ServiceError::InvalidArgument(
            "Quantity must be greater than zero".to_string(),
        ));
    }
    // Anything above u32::MAX can never be covered by a u32 stock counter.
    u32::try_from(quantity).map_err(|_| ServiceError::InvalidArgument(format!(
        "Quantity {quantity} exceeds the largest stock a product can hold"
    )))
}

/// Rejects replacement fields the product store would refuse.
pub fn validate_details(details: &ProductDetails) -> Result<(), ServiceError> {
    if details.name.trim().is_empty() {
        return Err(ServiceError::InvalidArgument(
            "Product name cannot be empty".to_string(),
        ));
    }
    if !details.price.is_finite() || details.price < 0.0 {
        return Err(ServiceError::InvalidArgument(format!(
            "Price must be a non-negative amount, got {}",
            details.price
        )));
    }
    Ok(())
}
