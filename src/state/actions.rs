// ============================================================================
// ACTIONS - The only sanctioned way to change the store
// ============================================================================
// Each action does its I/O first (API, storage), then dispatches
// `StoreAction`s. Failures are logged here and handed back as `ActionError`
// so the view that triggered them can tell the user.
// ============================================================================

use std::rc::Rc;

use crate::models::{AdvancedSearch, Credentials, Movie};
use crate::services::error::ActionError;
use crate::services::storage::{load_json, save_json};
use crate::services::{ApiClient, BrowserStorage, KeyValueStore, MemoryStorage, MovieApi};
use crate::state::pagination::Pagination;
use crate::state::reactivity::StoreHandle;
use crate::state::store::{is_usable_token, Store, StoreAction};
use crate::utils::constants::{STORAGE_KEY_FAVORITES, STORAGE_KEY_MOVIE, STORAGE_KEY_TOKEN};

#[derive(Clone)]
pub struct AppActions {
    store: StoreHandle,
    api: Rc<dyn MovieApi>,
    /// Tab-scoped: the auth token.
    session: Rc<dyn KeyValueStore>,
    /// Survives reloads: selected movie and favorites.
    durable: Rc<dyn KeyValueStore>,
}

impl PartialEq for AppActions {
    fn eq(&self, other: &Self) -> bool {
        self.store == other.store
            && Rc::ptr_eq(&self.api, &other.api)
            && Rc::ptr_eq(&self.session, &other.session)
            && Rc::ptr_eq(&self.durable, &other.durable)
    }
}

impl AppActions {
    pub fn new(
        store: StoreHandle,
        api: Rc<dyn MovieApi>,
        session: Rc<dyn KeyValueStore>,
        durable: Rc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            store,
            api,
            session,
            durable,
        }
    }

    /// Wired to the configured backend and the browser's storages.
    pub fn browser() -> Self {
        Self::new(
            StoreHandle::default(),
            Rc::new(ApiClient::default()),
            storage_or_memory(BrowserStorage::Session),
            storage_or_memory(BrowserStorage::Local),
        )
    }

    pub fn store(&self) -> &StoreHandle {
        &self.store
    }

    pub fn snapshot(&self) -> Store {
        self.store.snapshot()
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    /// Copies the session token into the store when there is a usable one.
    pub fn sync_token(&self) {
        if let Some(token) = self.session.get_item(STORAGE_KEY_TOKEN) {
            if is_usable_token(&token) {
                self.store.dispatch(StoreAction::SetToken(Some(token)));
            }
        }
    }

    pub fn checked_login(&self) -> bool {
        self.store.with(Store::is_logged_in)
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<(), ActionError> {
        let credentials = Credentials::new(username, password);
        let response = self.api.login(&credentials).await.map_err(|e| {
            log::error!("❌ Login failed: {}", e);
            ActionError::from(e)
        })?;

        let Some(token) = response.usable_token().map(str::to_string) else {
            let reason = response
                .msg
                .unwrap_or_else(|| "Login failed".to_string());
            log::warn!("⚠️ Login rejected: {}", reason);
            return Err(ActionError::Rejected(reason));
        };

        self.session.set_item(STORAGE_KEY_TOKEN, &token)?;
        self.store.dispatch(StoreAction::SetToken(Some(token)));
        log::info!("✅ Logged in as {}", username);
        Ok(())
    }

    /// Creates the account and keeps its token in session storage. The store
    /// stays anonymous until the next `sync_token`.
    pub async fn signup(&self, username: &str, password: &str) -> Result<(), ActionError> {
        let credentials = Credentials::new(username, password);
        let response = self.api.signup(&credentials).await.map_err(|e| {
            log::error!("❌ Signup failed: {}", e);
            ActionError::from(e)
        })?;

        let Some(token) = response.usable_token().map(str::to_string) else {
            let reason = response
                .msg
                .unwrap_or_else(|| "Signup failed".to_string());
            log::warn!("⚠️ Signup rejected: {}", reason);
            return Err(ActionError::Rejected(reason));
        };

        self.session.set_item(STORAGE_KEY_TOKEN, &token)?;
        log::info!("✅ Account created for {}", username);
        Ok(())
    }

    /// Forgets the token. The store is cleared even if storage refuses.
    pub fn logout(&self) -> Result<(), ActionError> {
        let removed = self.session.remove_item(STORAGE_KEY_TOKEN);
        self.store.dispatch(StoreAction::SetToken(None));
        log::info!("👋 Logged out");
        removed.map_err(|e| {
            log::warn!("⚠️ Could not clear session token: {}", e);
            ActionError::from(e)
        })
    }

    fn require_token(&self) -> Result<String, ActionError> {
        self.store
            .with(|store| store.token().filter(|t| is_usable_token(t)).map(String::from))
            .ok_or(ActionError::NotAuthenticated)
    }

    // ------------------------------------------------------------------
    // Search & catalog
    // ------------------------------------------------------------------

    /// Stores the results as the search list and returns how many came back.
    pub async fn search(&self, query: &str) -> Result<usize, ActionError> {
        let movies = self.api.search(query).await.map_err(|e| {
            log::error!("❌ Search failed: {}", e);
            ActionError::from(e)
        })?;
        Ok(self.replace_search_list(movies))
    }

    pub async fn advanced_search(&self, filters: &AdvancedSearch) -> Result<usize, ActionError> {
        let movies = self.api.advanced_search(filters).await.map_err(|e| {
            log::error!("❌ Advanced search failed: {}", e);
            ActionError::from(e)
        })?;
        Ok(self.replace_search_list(movies))
    }

    fn replace_search_list(&self, movies: Vec<Movie>) -> usize {
        let found = movies.len();
        log::info!("🔍 {} results", found);
        self.store.dispatch(StoreAction::SetSearchList(Some(movies)));
        found
    }

    /// Back to the default catalog on the next list render.
    pub fn reset_search_list(&self) {
        self.store.dispatch(StoreAction::SetSearchList(None));
    }

    pub async fn catalog_count(&self) -> Result<u64, ActionError> {
        self.api.movie_count().await.map_err(|e| {
            log::error!("❌ Could not load movie count: {}", e);
            ActionError::from(e)
        })
    }

    pub async fn catalog_page(&self, pagination: &Pagination) -> Result<Vec<Movie>, ActionError> {
        self.api
            .page(pagination.limit(), pagination.offset())
            .await
            .map_err(|e| {
                log::error!("❌ Could not load page {}: {}", pagination.page(), e);
                ActionError::from(e)
            })
    }

    // ------------------------------------------------------------------
    // Selected movie
    // ------------------------------------------------------------------

    pub fn set_movie(&self, movie: Movie) -> Result<(), ActionError> {
        let saved = save_json(&*self.durable, STORAGE_KEY_MOVIE, &movie);
        self.store.dispatch(StoreAction::SetMovie(Some(movie)));
        saved.map_err(|e| {
            log::warn!("⚠️ Could not persist selected movie: {}", e);
            ActionError::from(e)
        })
    }

    pub fn sync_movies(&self) {
        let movie = load_json::<Movie>(&*self.durable, STORAGE_KEY_MOVIE);
        self.store.dispatch(StoreAction::SetMovie(movie));
    }

    // ------------------------------------------------------------------
    // Favorites
    // ------------------------------------------------------------------

    /// Restores the favorites cached by a previous visit.
    pub fn sync_favorites(&self) {
        if let Some(favorites) = load_json::<Vec<Movie>>(&*self.durable, STORAGE_KEY_FAVORITES) {
            self.store.dispatch(StoreAction::SetFavorites(favorites));
        }
    }

    pub fn is_favorite(&self, movie: &Movie) -> bool {
        self.store.with(|store| store.is_favorite(movie))
    }

    pub async fn get_movie_favorites(&self) -> Result<usize, ActionError> {
        let token = self.require_token()?;
        let favorites = self.api.favorites(&token).await.map_err(|e| {
            log::error!("❌ Could not load favorites: {}", e);
            ActionError::from(e)
        })?;

        let count = favorites.len();
        self.store_favorites(favorites)?;
        log::info!("⭐ {} favorites loaded", count);
        Ok(count)
    }

    pub async fn set_movie_favorite(&self, movie: &Movie) -> Result<(), ActionError> {
        let token = self.require_token()?;
        self.api.add_favorite(&token, movie).await.map_err(|e| {
            log::error!("❌ Could not add favorite {}: {}", movie.id, e);
            ActionError::from(e)
        })?;

        // Read after the await: other actions may have run meanwhile.
        let mut favorites = self.store.with(|store| store.movie_favorites().to_vec());
        favorites.push(movie.clone());
        self.store_favorites(favorites)
    }

    pub async fn remove_movie_favorite(&self, movie: &Movie) -> Result<(), ActionError> {
        let token = self.require_token()?;
        self.api.remove_favorite(&token, movie).await.map_err(|e| {
            log::error!("❌ Could not remove favorite {}: {}", movie.id, e);
            ActionError::from(e)
        })?;

        let favorites: Vec<Movie> = self.store.with(|store| {
            store
                .movie_favorites()
                .iter()
                .filter(|fav| *fav != movie)
                .cloned()
                .collect()
        });
        self.store_favorites(favorites)
    }

    fn store_favorites(&self, favorites: Vec<Movie>) -> Result<(), ActionError> {
        let saved = save_json(&*self.durable, STORAGE_KEY_FAVORITES, &favorites);
        self.store.dispatch(StoreAction::SetFavorites(favorites));
        saved.map_err(|e| {
            log::warn!("⚠️ Could not persist favorites: {}", e);
            ActionError::from(e)
        })
    }
}

/// Some browsers deny storage (private mode, disabled cookies). The app
/// still works then, it just forgets everything on reload.
fn storage_or_memory(kind: BrowserStorage) -> Rc<dyn KeyValueStore> {
    if kind.is_available() {
        Rc::new(kind)
    } else {
        log::warn!("⚠️ {:?} storage unavailable, keeping state in memory", kind);
        Rc::new(MemoryStorage::new())
    }
}
