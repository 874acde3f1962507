pub mod auth;
pub mod movie;
pub mod search;

pub use auth::{Credentials, TokenResponse};
pub use movie::{Movie, MovieId, MovieListing};
pub use search::{AdvancedSearch, SearchRequest};
