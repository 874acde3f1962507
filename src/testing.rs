//! In-memory doubles for the API and storage, shared by unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::json;

use crate::models::{AdvancedSearch, Credentials, Movie, TokenResponse};
use crate::services::{ApiError, MemoryStorage, MovieApi};
use crate::state::actions::AppActions;
use crate::state::reactivity::StoreHandle;

pub fn movie(id: i64, name: &str) -> Movie {
    serde_json::from_value(json!({
        "id": id,
        "name": name,
        "mediaType": "Movie",
        "year": 1999,
        "genres": "Drama",
        "rating": "7.0",
        "summary": null
    }))
    .expect("fixture movie")
}

#[derive(Clone, Debug, PartialEq)]
pub enum ApiCall {
    Search(String),
    AdvancedSearch(AdvancedSearch),
    MovieCount,
    Page { limit: u32, offset: u64 },
    Login(Credentials),
    Signup(Credentials),
    Favorites(String),
    AddFavorite(String, Movie),
    RemoveFavorite(String, Movie),
}

/// Scripted `MovieApi`. Every call is recorded; answers come from the
/// `RefCell`s below and can be swapped between calls.
pub struct FakeApi {
    pub calls: RefCell<Vec<ApiCall>>,
    pub listing: RefCell<Result<Vec<Movie>, ApiError>>,
    pub count: RefCell<Result<u64, ApiError>>,
    pub auth: RefCell<Result<TokenResponse, ApiError>>,
    pub favorites: RefCell<Result<Vec<Movie>, ApiError>>,
    pub mutation: RefCell<Result<(), ApiError>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            listing: RefCell::new(Ok(Vec::new())),
            count: RefCell::new(Ok(0)),
            auth: RefCell::new(Ok(TokenResponse::default())),
            favorites: RefCell::new(Ok(Vec::new())),
            mutation: RefCell::new(Ok(())),
        }
    }
}

impl FakeApi {
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    pub fn answer_auth_with_token(&self, token: &str) {
        *self.auth.borrow_mut() = Ok(TokenResponse {
            token: Some(token.to_string()),
            ..TokenResponse::default()
        });
    }

    pub fn fail_with_status(status: u16) -> ApiError {
        ApiError::Status {
            status,
            message: String::new(),
        }
    }

    fn record(&self, call: ApiCall) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl MovieApi for FakeApi {
    async fn search(&self, query: &str) -> Result<Vec<Movie>, ApiError> {
        self.record(ApiCall::Search(query.to_string()));
        self.listing.borrow().clone()
    }

    async fn advanced_search(&self, filters: &AdvancedSearch) -> Result<Vec<Movie>, ApiError> {
        self.record(ApiCall::AdvancedSearch(filters.clone()));
        self.listing.borrow().clone()
    }

    async fn movie_count(&self) -> Result<u64, ApiError> {
        self.record(ApiCall::MovieCount);
        self.count.borrow().clone()
    }

    async fn page(&self, limit: u32, offset: u64) -> Result<Vec<Movie>, ApiError> {
        self.record(ApiCall::Page { limit, offset });
        self.listing.borrow().clone()
    }

    async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        self.record(ApiCall::Login(credentials.clone()));
        self.auth.borrow().clone()
    }

    async fn signup(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        self.record(ApiCall::Signup(credentials.clone()));
        self.auth.borrow().clone()
    }

    async fn favorites(&self, token: &str) -> Result<Vec<Movie>, ApiError> {
        self.record(ApiCall::Favorites(token.to_string()));
        self.favorites.borrow().clone()
    }

    async fn add_favorite(&self, token: &str, movie: &Movie) -> Result<(), ApiError> {
        self.record(ApiCall::AddFavorite(token.to_string(), movie.clone()));
        self.mutation.borrow().clone()
    }

    async fn remove_favorite(&self, token: &str, movie: &Movie) -> Result<(), ApiError> {
        self.record(ApiCall::RemoveFavorite(token.to_string(), movie.clone()));
        self.mutation.borrow().clone()
    }
}

/// Actions wired to fakes, with handles to inspect each side.
pub struct Harness {
    pub actions: AppActions,
    pub api: Rc<FakeApi>,
    pub session: Rc<MemoryStorage>,
    pub durable: Rc<MemoryStorage>,
}

impl Harness {
    pub fn new() -> Self {
        let api = Rc::new(FakeApi::default());
        let session = Rc::new(MemoryStorage::new());
        let durable = Rc::new(MemoryStorage::new());
        let actions = AppActions::new(
            StoreHandle::default(),
            api.clone(),
            session.clone(),
            durable.clone(),
        );
        Self {
            actions,
            api,
            session,
            durable,
        }
    }
}
