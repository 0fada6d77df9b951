use std::sync::Arc;
use tracing::{debug, instrument};

use crate::customer::domain::{Customer, CustomerUpdate};
use crate::customer::store::CustomerStore;
use crate::errors::ServiceError;
use crate::storage::{MemoryMapStore, ShardedMapStore};

const ENTITY: &str = "Customer";

/// Application service over a [`CustomerStore`].
/// Turns absent ids into `ServiceError::NotFound`; everything else succeeds.
#[derive(Clone)]
pub struct CustomerService {
    store: Arc<dyn CustomerStore>,
}

impl CustomerService {
    pub fn new(store: Arc<dyn CustomerStore>) -> Self { Self { store } }

    /// Backed by one map behind one mutex.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryMapStore::<String, Customer>::new()))
    }

    /// Backed by a map sharded by key hash.
    pub fn sharded() -> Self {
        Self::new(Arc::new(ShardedMapStore::<String, Customer>::new()))
    }

    /// Store the customer under its own id. An existing record with the same
    /// id is overwritten.
    #[instrument(skip(self, customer), fields(id = %customer.id))]
    pub async fn create(&self, customer: Customer) -> Customer {
        let stored = self.store.put(customer).await;
        debug!("customer_stored");
        stored
    }

    pub async fn list(&self) -> Vec<Customer> { self.store.list().await }

    pub async fn get(&self, id: &str) -> Result<Customer, ServiceError> {
        self.store.get(id).await.ok_or_else(|| ServiceError::not_found(ENTITY))
    }

    #[instrument(skip(self, update))]
    pub async fn update(&self, id: &str, update: CustomerUpdate) -> Result<Customer, ServiceError> {
        let updated = self.store.update(id, update).await.ok_or_else(|| ServiceError::not_found(ENTITY))?;
        debug!("customer_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        if !self.store.remove(id).await {
            return Err(ServiceError::not_found(ENTITY));
        }
        debug!("customer_deleted");
        Ok(())
    }
}
