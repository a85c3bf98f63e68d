use std::sync::Arc;

use chrono::Utc;
use models::customer::{Customer, NewCustomer};
use serde_json::Value;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::customer::repository::CustomerRepository;
use crate::errors::ServiceError;

/// Create/list gateway for customers.
#[derive(Clone)]
pub struct CustomerService {
    repo: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self { Self { repo } }

    #[instrument(skip_all)]
    pub async fn create(&self, payload: &Value) -> Result<Customer, ServiceError> {
        let new = NewCustomer::validate(payload)?;
        let saved = self.repo.insert(new.into_record(Uuid::new_v4(), Utc::now())).await?;
        info!(id = %saved.id, "customer saved");
        Ok(saved)
    }

    pub async fn list_all(&self) -> Result<Vec<Customer>, ServiceError> {
        self.repo.list().await
    }
}
