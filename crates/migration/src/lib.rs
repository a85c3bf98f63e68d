//! Migrator creating the record tables.
//! Each table carries its own unique `email` index.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_profile;
mod m20240101_000002_create_customer;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_profile::Migration),
            Box::new(m20240101_000002_create_customer::Migration),
        ]
    }
}
