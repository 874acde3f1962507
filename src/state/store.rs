// ============================================================================
// STORE - Shared application state
// ============================================================================
// Read-only accessors outside this module. The only way to change a `Store`
// is `reduce` with a `StoreAction`, which `StoreHandle::dispatch` drives.
// ============================================================================

use crate::models::Movie;
use crate::utils::constants::UNDEFINED_TOKEN;

/// Commands accepted by the store. Each replaces one field wholesale.
#[derive(Clone, Debug, PartialEq)]
pub enum StoreAction {
    SetToken(Option<String>),
    SetMovie(Option<Movie>),
    SetSearchList(Option<Vec<Movie>>),
    SetFavorites(Vec<Movie>),
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Store {
    movie: Option<Movie>,
    token: Option<String>,
    search_list: Option<Vec<Movie>>,
    movie_favorites: Vec<Movie>,
    /// Bumped every time `search_list` is replaced or cleared. The list view
    /// refetches when it changes.
    list_version: u64,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn movie(&self) -> Option<&Movie> {
        self.movie.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn search_list(&self) -> Option<&[Movie]> {
        self.search_list.as_deref()
    }

    pub fn movie_favorites(&self) -> &[Movie] {
        &self.movie_favorites
    }

    pub fn list_version(&self) -> u64 {
        self.list_version
    }

    /// Authenticated iff the token is usable.
    pub fn is_logged_in(&self) -> bool {
        self.token.as_deref().is_some_and(is_usable_token)
    }

    pub fn is_favorite(&self, movie: &Movie) -> bool {
        self.movie_favorites.iter().any(|fav| fav == movie)
    }

    pub fn reduce(&self, action: StoreAction) -> Store {
        let mut next = self.clone();
        match action {
            StoreAction::SetToken(token) => next.token = token,
            StoreAction::SetMovie(movie) => next.movie = movie,
            StoreAction::SetSearchList(list) => {
                next.search_list = list;
                next.list_version = self.list_version.wrapping_add(1);
            }
            StoreAction::SetFavorites(favorites) => next.movie_favorites = favorites,
        }
        next
    }
}

/// Non-empty and not the stringified `undefined` a broken login leaves behind.
pub fn is_usable_token(token: &str) -> bool {
    !token.is_empty() && token != UNDEFINED_TOKEN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::movie;

    #[test]
    fn starts_anonymous_and_empty() {
        let store = Store::new();
        assert!(!store.is_logged_in());
        assert!(store.search_list().is_none());
        assert!(store.movie_favorites().is_empty());
        assert_eq!(store.list_version(), 0);
    }

    #[test]
    fn login_predicate() {
        let with = |token: &str| Store::new().reduce(StoreAction::SetToken(Some(token.into())));
        assert!(with("abc").is_logged_in());
        assert!(!with("").is_logged_in());
        assert!(!with("undefined").is_logged_in());
        assert!(!Store::new().reduce(StoreAction::SetToken(None)).is_logged_in());
    }

    #[test]
    fn reduce_does_not_touch_the_original() {
        let before = Store::new();
        let after = before.reduce(StoreAction::SetMovie(Some(movie(1, "Alien"))));
        assert!(before.movie().is_none());
        assert_eq!(after.movie().map(|m| m.name()), Some("Alien"));
    }

    #[test]
    fn search_list_changes_bump_version() {
        let store = Store::new()
            .reduce(StoreAction::SetSearchList(Some(vec![movie(1, "Alien")])))
            .reduce(StoreAction::SetSearchList(None));
        assert_eq!(store.list_version(), 2);
        assert!(store.search_list().is_none());

        // other fields leave it alone
        let store = store.reduce(StoreAction::SetFavorites(vec![movie(2, "Heat")]));
        assert_eq!(store.list_version(), 2);
        assert!(store.is_favorite(&movie(2, "Heat")));
        assert!(!store.is_favorite(&movie(1, "Alien")));
    }
}
