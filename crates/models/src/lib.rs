//! Record schemas and their SQL entities.
//!
//! Each resource module holds the sea-orm entity, the validated payload type
//! (`New*`) and the stored record returned to clients.

pub mod errors;
pub mod db;
pub mod validation;
pub mod record;
pub mod profile;
pub mod customer;

pub use record::Record;

#[cfg(test)]
mod tests;
