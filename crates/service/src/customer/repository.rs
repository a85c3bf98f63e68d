use async_trait::async_trait;
use models::customer::{self, Customer};
use models::Record;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};

use crate::errors::ServiceError;
use crate::storage::JsonFileStore;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Store an already validated record.
    async fn insert(&self, record: Customer) -> Result<Customer, ServiceError>;
    async fn list(&self) -> Result<Vec<Customer>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmCustomerRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn insert(&self, record: Customer) -> Result<Customer, ServiceError> {
        let am = customer::ActiveModel::from(&record);
        let saved = am
            .insert(&self.db)
            .await
            .map_err(|e| ServiceError::from_insert(Customer::KIND, &record.email, e))?;
        Ok(Customer::from(saved))
    }

    async fn list(&self) -> Result<Vec<Customer>, ServiceError> {
        let rows = customer::Entity::find()
            .order_by_asc(customer::Column::CreatedAt)
            .order_by_asc(customer::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Customer::from).collect())
    }
}

#[async_trait]
impl CustomerRepository for JsonFileStore<Customer> {
    async fn insert(&self, record: Customer) -> Result<Customer, ServiceError> {
        JsonFileStore::insert(self, record).await
    }

    async fn list(&self) -> Result<Vec<Customer>, ServiceError> {
        Ok(JsonFileStore::list(self).await)
    }
}
