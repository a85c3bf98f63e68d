pub mod repository;
pub mod service;

pub use repository::{ProfileRepository, SeaOrmProfileRepository};
pub use service::ProfileService;
