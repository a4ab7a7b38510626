//! Record trait implementation for the Product domain type.
//!
//! Stock is a `u32`, so "never negative" holds by construction; the reservation step in
//! [`crate::service`] additionally refuses any decrement larger than the stock on hand.

use super::error::ProductError;
use crate::model::{Product, ProductId};
use record_actor::Record;
use std::convert::Infallible;

impl Record for Product {
    type Id = ProductId;
    type Query = Infallible;
    type Error = ProductError;

    fn id(&self) -> Option<ProductId> {
        self.id
    }

    fn with_id(self, id: ProductId) -> Self {
        Self { id: Some(id), ..self }
    }

    fn matches(&self, query: &Infallible) -> bool {
        match *query {}
    }

    fn validate(&self) -> Result<(), ProductError> {
        if self.name.trim().is_empty() {
            return Err(ProductError::MissingName);
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ProductError::InvalidPrice(self.price));
        }
        Ok(())
    }
}
