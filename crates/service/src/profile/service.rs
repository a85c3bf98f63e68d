use std::sync::Arc;

use chrono::Utc;
use models::profile::{NewProfile, Profile};
use serde_json::Value;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::profile::repository::ProfileRepository;

/// Create/list gateway for profiles. Validation happens here, before the repository is touched.
#[derive(Clone)]
pub struct ProfileService {
    repo: Arc<dyn ProfileRepository>,
}

impl ProfileService {
    pub fn new(repo: Arc<dyn ProfileRepository>) -> Self { Self { repo } }

    /// Validate `payload`, stamp id and creation time, and store it.
    #[instrument(skip_all)]
    pub async fn create(&self, payload: &Value) -> Result<Profile, ServiceError> {
        let new = NewProfile::validate(payload)?;
        let saved = self.repo.insert(new.into_record(Uuid::new_v4(), Utc::now())).await?;
        info!(id = %saved.id, "profile saved");
        Ok(saved)
    }

    pub async fn list_all(&self) -> Result<Vec<Profile>, ServiceError> {
        self.repo.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JsonFileStore;
    use serde_json::json;

    fn payload(email: &str) -> Value {
        json!({
            "name": "Ada",
            "email": email,
            "phone": "555",
            "skills": ["math"],
            "experience": "lots",
            "education": "home",
            "jobPreferences": {"location": "London", "jobType": "Part-time", "industry": "Computing"},
            "profileImage": "ada.png"
        })
    }

    fn service() -> ProfileService {
        ProfileService::new(JsonFileStore::<Profile>::in_memory())
    }

    #[tokio::test]
    async fn create_returns_input_plus_generated_fields() -> Result<(), anyhow::Error> {
        let svc = service();
        let before = Utc::now();
        let saved = svc.create(&payload("ada@example.com")).await?;
        assert_eq!(saved.email, "ada@example.com");
        assert_eq!(saved.skills, vec!["math"]);
        assert!(saved.created_at >= before);

        let mut expected = payload("ada@example.com");
        expected["id"] = json!(saved.id);
        expected["createdAt"] = serde_json::to_value(saved.created_at)?;
        assert_eq!(serde_json::to_value(&saved)?, expected);
        Ok(())
    }

    #[tokio::test]
    async fn failed_creates_store_nothing() -> Result<(), anyhow::Error> {
        let svc = service();
        svc.create(&payload("one@example.com")).await?;

        let mut bad = payload("two@example.com");
        bad.as_object_mut().unwrap().remove("name");
        assert!(matches!(svc.create(&bad).await, Err(ServiceError::Validation(_))));
        assert!(matches!(
            svc.create(&payload("one@example.com")).await,
            Err(ServiceError::DuplicateKey(_))
        ));
        svc.create(&payload("three@example.com")).await?;

        let all = svc.list_all().await?;
        assert_eq!(all.len(), 2);
        assert_eq!(all.iter().filter(|p| p.email == "one@example.com").count(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn list_on_empty_store() -> Result<(), anyhow::Error> {
        assert!(service().list_all().await?.is_empty());
        Ok(())
    }
}
