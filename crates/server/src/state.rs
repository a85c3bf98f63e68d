use std::sync::Arc;

use service::customer::{CustomerRepository, CustomerService};
use service::profile::{ProfileRepository, ProfileService};
use service::storage::Storage;

/// Shared by every request; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub profiles: ProfileService,
    pub customers: CustomerService,
}

impl AppState {
    pub fn new(profiles: Arc<dyn ProfileRepository>, customers: Arc<dyn CustomerRepository>) -> Self {
        Self {
            profiles: ProfileService::new(profiles),
            customers: CustomerService::new(customers),
        }
    }

    pub fn from_storage(storage: &Storage) -> Self {
        Self::new(storage.profiles(), storage.customers())
    }
}
