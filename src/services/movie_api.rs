// ============================================================================
// MOVIE API - Contract of the remote RecomMedia service
// ============================================================================
// `ApiClient` talks to the real backend; tests plug in an in-memory fake.
// ============================================================================

use async_trait::async_trait;

use crate::models::{AdvancedSearch, Credentials, Movie, TokenResponse};
use crate::services::error::ApiError;

#[async_trait(?Send)]
pub trait MovieApi {
    /// POST /search
    async fn search(&self, query: &str) -> Result<Vec<Movie>, ApiError>;

    /// POST /advSearch
    async fn advanced_search(&self, filters: &AdvancedSearch) -> Result<Vec<Movie>, ApiError>;

    /// GET /movieCount
    async fn movie_count(&self) -> Result<u64, ApiError>;

    /// GET /pages?limit=&offset=
    async fn page(&self, limit: u32, offset: u64) -> Result<Vec<Movie>, ApiError>;

    /// POST /login
    async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError>;

    /// POST /signup
    async fn signup(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError>;

    /// GET /favorite
    async fn favorites(&self, token: &str) -> Result<Vec<Movie>, ApiError>;

    /// POST /favorite
    async fn add_favorite(&self, token: &str, movie: &Movie) -> Result<(), ApiError>;

    /// DELETE /favorite
    async fn remove_favorite(&self, token: &str, movie: &Movie) -> Result<(), ApiError>;
}
