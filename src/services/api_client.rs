// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No business logic here: build the request, send it, map the answer.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::CONFIG;
use crate::models::{AdvancedSearch, Credentials, Movie, MovieListing, SearchRequest, TokenResponse};
use crate::services::error::ApiError;
use crate::services::movie_api::MovieApi;

/// RecomMedia REST client
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(CONFIG.backend_url())
    }
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_listing<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Vec<Movie>, ApiError> {
        let request = Request::post(&self.url(path))
            .json(body)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        let response = send(request.send()).await?;
        parse_json::<MovieListing>(response)
            .await
            .map(MovieListing::into_movies)
    }

    async fn post_credentials(
        &self,
        path: &str,
        credentials: &Credentials,
    ) -> Result<TokenResponse, ApiError> {
        let request = Request::post(&self.url(path))
            .json(credentials)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        let response = send(request.send()).await?;
        parse_json::<TokenResponse>(response).await
    }
}

#[async_trait(?Send)]
impl MovieApi for ApiClient {
    async fn search(&self, query: &str) -> Result<Vec<Movie>, ApiError> {
        log::info!("🔍 Searching for \"{}\"", query);
        let body = SearchRequest {
            search_contents: query.to_string(),
        };
        self.post_listing("/search", &body).await
    }

    async fn advanced_search(&self, filters: &AdvancedSearch) -> Result<Vec<Movie>, ApiError> {
        log::info!("🔍 Advanced search: {:?}", filters);
        self.post_listing("/advSearch", filters).await
    }

    async fn movie_count(&self) -> Result<u64, ApiError> {
        let response = send(Request::get(&self.url("/movieCount")).send()).await?;
        let raw = parse_json::<Value>(response).await?;
        parse_count(&raw)
    }

    async fn page(&self, limit: u32, offset: u64) -> Result<Vec<Movie>, ApiError> {
        let limit = limit.to_string();
        let offset = offset.to_string();
        log::debug!("📄 Fetching page limit={} offset={}", limit, offset);

        let request = Request::get(&self.url("/pages"))
            .query([("limit", limit.as_str()), ("offset", offset.as_str())]);
        let response = send(request.send()).await?;
        parse_json::<MovieListing>(response)
            .await
            .map(MovieListing::into_movies)
    }

    async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        log::info!("🔐 Logging in as {}", credentials.username);
        self.post_credentials("/login", credentials).await
    }

    async fn signup(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        log::info!("📝 Signing up {}", credentials.username);
        self.post_credentials("/signup", credentials).await
    }

    async fn favorites(&self, token: &str) -> Result<Vec<Movie>, ApiError> {
        let request = with_bearer(Request::get(&self.url("/favorite")), token);
        let response = send(request.send()).await?;
        parse_json::<MovieListing>(response)
            .await
            .map(MovieListing::into_movies)
    }

    async fn add_favorite(&self, token: &str, movie: &Movie) -> Result<(), ApiError> {
        let request = with_bearer(Request::post(&self.url("/favorite")), token)
            .json(movie)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        send(request.send()).await?;
        Ok(())
    }

    async fn remove_favorite(&self, token: &str, movie: &Movie) -> Result<(), ApiError> {
        let request = with_bearer(Request::delete(&self.url("/favorite")), token)
            .json(movie)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        send(request.send()).await?;
        Ok(())
    }
}

fn with_bearer(builder: RequestBuilder, token: &str) -> RequestBuilder {
    builder.header("Authorization", &format!("Bearer {}", token))
}

/// Awaits the request and turns transport failures and non-2xx answers
/// into `ApiError`.
async fn send(
    request: impl std::future::Future<Output = Result<Response, gloo_net::Error>>,
) -> Result<Response, ApiError> {
    let response = request
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let message = match response.text().await {
        Ok(text) if !text.trim().is_empty() => text,
        _ => response.status_text(),
    };
    log::warn!("⚠️ HTTP {} from {}", status, response.url());
    Err(ApiError::Status { status, message })
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// `/movieCount` answers with a bare number; some deployments quote it.
fn parse_count(raw: &Value) -> Result<u64, ApiError> {
    match raw {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .ok_or_else(|| ApiError::Parse(format!("invalid movie count {}", n))),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| ApiError::Parse(format!("invalid movie count {:?}", s))),
        other => Err(ApiError::Parse(format!("invalid movie count {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn base_url_is_normalized() {
        let client = ApiClient::new("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.url("/pages"), "http://localhost:5000/pages");
    }

    #[test]
    fn count_accepts_numbers_and_strings() {
        assert_eq!(parse_count(&json!(450)), Ok(450));
        assert_eq!(parse_count(&json!("450")), Ok(450));
        assert_eq!(parse_count(&json!(450.0)), Ok(450));
        assert!(parse_count(&json!(-1)).is_err());
        assert!(parse_count(&json!({"count": 1})).is_err());
    }
}
