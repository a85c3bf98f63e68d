//! Store backends.
//!
//! [`Storage`] is opened once at startup and hands out the per-resource
//! repositories that every request shares.

pub mod json_file_store;

use std::{path::Path, sync::Arc};

use configs::{DatabaseConfig, StoreLocation};
use migration::MigratorTrait;
use models::{customer::Customer, profile::Profile};
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::customer::repository::{CustomerRepository, SeaOrmCustomerRepository};
use crate::profile::repository::{ProfileRepository, SeaOrmProfileRepository};
pub use json_file_store::JsonFileStore;

pub const PROFILES_FILE: &str = "profiles.json";
pub const CUSTOMERS_FILE: &str = "customers.json";

pub enum Storage {
    Postgres(DatabaseConnection),
    Documents {
        profiles: Arc<JsonFileStore<Profile>>,
        customers: Arc<JsonFileStore<Customer>>,
    },
}

impl Storage {
    /// Connect to the store named by `cfg.url`, running migrations when enabled.
    pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<Self> {
        match cfg.location()? {
            StoreLocation::Postgres(_) => {
                let db = models::db::connect_with_config(cfg).await?;
                if cfg.auto_migrate {
                    migration::Migrator::up(&db, None).await?;
                    info!("database migrations applied");
                }
                Ok(Self::Postgres(db))
            }
            StoreLocation::File(dir) => {
                let dir = Path::new(&dir);
                Ok(Self::Documents {
                    profiles: JsonFileStore::open(dir.join(PROFILES_FILE)).await?,
                    customers: JsonFileStore::open(dir.join(CUSTOMERS_FILE)).await?,
                })
            }
            StoreLocation::Memory => Ok(Self::in_memory()),
        }
    }

    pub fn in_memory() -> Self {
        Self::Documents {
            profiles: JsonFileStore::in_memory(),
            customers: JsonFileStore::in_memory(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Documents { .. } => "documents",
        }
    }

    pub fn profiles(&self) -> Arc<dyn ProfileRepository> {
        match self {
            Self::Postgres(db) => Arc::new(SeaOrmProfileRepository { db: db.clone() }),
            Self::Documents { profiles, .. } => profiles.clone(),
        }
    }

    pub fn customers(&self) -> Arc<dyn CustomerRepository> {
        match self {
            Self::Postgres(db) => Arc::new(SeaOrmCustomerRepository { db: db.clone() }),
            Self::Documents { customers, .. } => customers.clone(),
        }
    }

    /// Release the connection pool. Document stores are flushed on every write.
    pub async fn close(self) -> anyhow::Result<()> {
        if let Self::Postgres(db) = self {
            db.close().await?;
        }
        Ok(())
    }
}
