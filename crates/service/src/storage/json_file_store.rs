use std::{path::PathBuf, sync::Arc};

use models::Record;
use serde::{de::DeserializeOwned, Serialize};
use tokio::{fs, sync::RwLock};
use tracing::debug;

use crate::errors::ServiceError;

/// Insertion-ordered document collection, optionally backed by a JSON file.
///
/// Records live in memory behind a lock; with a file attached, the whole
/// collection is rewritten after every insert. The email uniqueness check and
/// the insert happen under the same write lock.
pub struct JsonFileStore<T> {
    inner: RwLock<Vec<T>>,
    file_path: Option<PathBuf>,
}

impl<T> JsonFileStore<T>
where
    T: Record + Serialize + DeserializeOwned,
{
    /// Volatile store; nothing touches the disk.
    pub fn in_memory() -> Arc<Self> {
        Arc::new(Self { inner: RwLock::new(Vec::new()), file_path: None })
    }

    /// Load the collection at `path`, creating an empty file if missing.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(storage_err)?;
            }
        }

        let records: Vec<T> = match fs::read(&file_path).await {
            Ok(bytes) if bytes.is_empty() => Vec::new(),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                ServiceError::Storage(format!("{} is not a valid {} collection: {e}", file_path.display(), T::KIND))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let empty: Vec<T> = Vec::new();
                fs::write(&file_path, serde_json::to_vec(&empty).map_err(storage_err)?)
                    .await
                    .map_err(storage_err)?;
                empty
            }
            Err(e) => return Err(storage_err(e)),
        };
        debug!(path = %file_path.display(), count = records.len(), kind = T::KIND, "document store opened");

        Ok(Arc::new(Self { inner: RwLock::new(records), file_path: Some(file_path) }))
    }

    /// Write through a temp file so a crash never leaves a half-written collection.
    async fn save(&self, records: &[T]) -> Result<(), ServiceError> {
        let Some(path) = &self.file_path else { return Ok(()) };
        let data = serde_json::to_vec_pretty(records).map_err(storage_err)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, data).await.map_err(storage_err)?;
        fs::rename(&tmp, path).await.map_err(storage_err)?;
        Ok(())
    }

    /// Append `record` unless its email is taken; persist, or roll back on failure.
    pub async fn insert(&self, record: T) -> Result<T, ServiceError> {
        let mut records = self.inner.write().await;
        if records.iter().any(|r| r.email() == record.email()) {
            return Err(ServiceError::duplicate_email(T::KIND, record.email()));
        }
        records.push(record.clone());
        if let Err(e) = self.save(&records).await {
            records.pop();
            return Err(e);
        }
        Ok(record)
    }

    /// Every record in insertion order.
    pub async fn list(&self) -> Vec<T> {
        self.inner.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

fn storage_err<E: std::fmt::Display>(e: E) -> ServiceError {
    ServiceError::Storage(e.to_string())
}
