use async_trait::async_trait;
use models::profile::{self, Profile};
use models::Record;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};

use crate::errors::ServiceError;
use crate::storage::JsonFileStore;

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Store an already validated record.
    async fn insert(&self, record: Profile) -> Result<Profile, ServiceError>;
    async fn list(&self) -> Result<Vec<Profile>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmProfileRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ProfileRepository for SeaOrmProfileRepository {
    async fn insert(&self, record: Profile) -> Result<Profile, ServiceError> {
        let am = profile::ActiveModel::from(&record);
        let saved = am
            .insert(&self.db)
            .await
            .map_err(|e| ServiceError::from_insert(Profile::KIND, &record.email, e))?;
        Ok(Profile::try_from(saved)?)
    }

    async fn list(&self) -> Result<Vec<Profile>, ServiceError> {
        let rows = profile::Entity::find()
            .order_by_asc(profile::Column::CreatedAt)
            .order_by_asc(profile::Column::Id)
            .all(&self.db)
            .await?;
        rows.into_iter()
            .map(|m| Profile::try_from(m).map_err(ServiceError::from))
            .collect()
    }
}

#[async_trait]
impl ProfileRepository for JsonFileStore<Profile> {
    async fn insert(&self, record: Profile) -> Result<Profile, ServiceError> {
        JsonFileStore::insert(self, record).await
    }

    async fn list(&self) -> Result<Vec<Profile>, ServiceError> {
        Ok(JsonFileStore::list(self).await)
    }
}
