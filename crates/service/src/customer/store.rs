use async_trait::async_trait;

use crate::customer::domain::{Customer, CustomerUpdate};
use crate::storage::{MemoryMapStore, ShardedMapStore};

/// Trait abstraction for customer storage, keyed by `Customer::id`.
/// Every method is a single atomic operation on the underlying map.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Store under `customer.id`, overwriting any previous record.
    async fn put(&self, customer: Customer) -> Customer;
    async fn list(&self) -> Vec<Customer>;
    async fn get(&self, id: &str) -> Option<Customer>;
    /// Apply `update` to an existing record; `None` when `id` is absent.
    async fn update(&self, id: &str, update: CustomerUpdate) -> Option<Customer>;
    /// Returns whether a record existed and was removed.
    async fn remove(&self, id: &str) -> bool;
}

#[async_trait]
impl CustomerStore for MemoryMapStore<String, Customer> {
    async fn put(&self, customer: Customer) -> Customer {
        self.insert(customer.id.clone(), customer.clone()).await;
        customer
    }

    async fn list(&self) -> Vec<Customer> { self.values().await }

    async fn get(&self, id: &str) -> Option<Customer> { MemoryMapStore::get(self, id).await }

    async fn update(&self, id: &str, update: CustomerUpdate) -> Option<Customer> {
        self.modify(id, |c| c.apply(update)).await
    }

    async fn remove(&self, id: &str) -> bool { MemoryMapStore::remove(self, id).await.is_some() }
}

#[async_trait]
impl CustomerStore for ShardedMapStore<String, Customer> {
    async fn put(&self, customer: Customer) -> Customer {
        self.insert(customer.id.clone(), customer.clone());
        customer
    }

    async fn list(&self) -> Vec<Customer> { self.values() }

    async fn get(&self, id: &str) -> Option<Customer> { ShardedMapStore::get(self, id) }

    async fn update(&self, id: &str, update: CustomerUpdate) -> Option<Customer> {
        self.modify(id, |c| c.apply(update))
    }

    async fn remove(&self, id: &str) -> bool { ShardedMapStore::remove(self, id).is_some() }
}
