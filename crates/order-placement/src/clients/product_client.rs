//! # Product Client
//!
//! High-level API for the `Product` table.
use crate::model::{Product, ProductDetails, ProductId};
use crate::product_actor::ProductError;
use crate::service::{ProductRepository, ServiceError};
use async_trait::async_trait;
use record_actor::{FrameworkError, RecordClient, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    /// Adds a product to the catalogue.
    #[instrument(skip(self))]
    pub async fn create_product(&self, details: ProductDetails) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner
            .insert(Product::new(details))
            .await
            .map_err(Self::map_error)
    }

    /// Check the current stock level for a product.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, ProductError> {
        debug!("Checking stock");
        match self.get(id).await? {
            Some(product) => Ok(product.stock),
            None => Err(ProductError::NotFound(id)),
        }
    }

    /// The whole catalogue, in id order.
    pub async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        self.list().await
    }
}

#[async_trait]
impl RecordClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductError::ActorCommunicationError(e.to_string())
    }
}

#[async_trait]
impl ProductRepository for ProductClient {
    async fn find_product_by_id(&self, id: ProductId) -> Result<Option<Product>, ServiceError> {
        self.get(id)
            .await
            .map_err(|e| ServiceError::Store(e.to_string()))
    }

    async fn save_product(&self, product: Product) -> Result<Product, ServiceError> {
        self.save(product)
            .await
            .map_err(|e| ServiceError::Store(e.to_string()))
    }
}
