use models::errors::ModelError;
use models::validation::ValidationErrors;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error("duplicate key: {0}")]
    DuplicateKey(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl ServiceError {
    pub fn duplicate_email(kind: &str, email: &str) -> Self {
        Self::DuplicateKey(format!("a {kind} with email `{email}` already exists"))
    }

    /// Unique-constraint violations become `DuplicateKey`; anything else is a storage failure.
    pub fn from_insert(kind: &str, email: &str, err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::duplicate_email(kind, email),
            _ => Self::Storage(err.to_string()),
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self { Self::Storage(err.to_string()) }
}

impl From<ModelError> for ServiceError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Decode(msg) => Self::Storage(msg),
        }
    }
}
