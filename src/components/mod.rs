pub mod advanced_search;
pub mod app;
pub mod auth_screen;
pub mod favorites;
pub mod home;
pub mod movie_card;
pub mod movie_detail;
pub mod movie_list;
pub mod navbar;
pub mod search_bar;

pub use advanced_search::AdvancedSearchPage;
pub use app::{App, Route};
pub use auth_screen::{AuthMode, AuthScreen};
pub use favorites::FavoritesPage;
pub use home::Home;
pub use movie_card::MovieCard;
pub use movie_detail::MovieDetail;
pub use movie_list::MovieList;
pub use navbar::NavBar;
pub use search_bar::SearchBar;
