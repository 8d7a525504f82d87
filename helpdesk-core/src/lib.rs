pub mod models;
pub mod repository;
pub mod service;
pub mod storage;

// Re-export commonly used types
pub use models::{Request, STATUS_CANCELLED, STATUS_COMPLETED, STATUS_IN_PROGRESS, STATUS_NEW};
pub use repository::RequestRepository;
pub use service::RequestService;
pub use storage::{Storage, StorageError};
