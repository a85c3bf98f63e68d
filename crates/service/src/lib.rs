//! Persistence gateways for the record resources.
//! - Repositories hide the backing store (PostgreSQL via sea-orm, or JSON documents).
//! - Services apply schema validation before every write.
//! - All failures surface as [`errors::ServiceError`].

pub mod errors;
pub mod storage;
pub mod profile;
pub mod customer;
#[cfg(test)]
pub mod test_support;
