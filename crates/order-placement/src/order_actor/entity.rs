//! Record trait implementation for the Order domain type.

use super::error::OrderError;
use crate::model::{Order, OrderId};
use record_actor::Record;
use std::convert::Infallible;

impl Record for Order {
    type Id = OrderId;
    type Query = Infallible;
    type Error = OrderError;

    fn id(&self) -> Option<OrderId> {
        self.id
    }

    fn with_id(self, id: OrderId) -> Self {
        Self { id: Some(id), ..self }
    }

    fn matches(&self, query: &Infallible) -> bool {
        match *query {}
    }

    fn validate(&self) -> Result<(), OrderError> {
        if self.quantity == 0 {
            return Err(OrderError::ZeroQuantity);
        }
        if self.user_id.trim().is_empty() {
            return Err(OrderError::MissingUserId);
        }
        Ok(())
    }
}
