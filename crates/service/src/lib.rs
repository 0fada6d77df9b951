//! Service layer for the customer store.
//! - `customer` holds the domain type, the store abstraction and `CustomerService`.
//! - `storage` holds the generic in-memory map stores backing it.

pub mod errors;
pub mod storage;
pub mod customer;

pub use customer::{
    domain::{Customer, CustomerUpdate},
    service::CustomerService,
    store::CustomerStore,
};
pub use errors::ServiceError;
