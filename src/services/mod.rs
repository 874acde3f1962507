pub mod api_client;
pub mod error;
pub mod movie_api;
pub mod storage;

pub use api_client::ApiClient;
pub use error::{ActionError, ApiError, StorageError};
pub use movie_api::MovieApi;
pub use storage::{BrowserStorage, KeyValueStore, MemoryStorage};
