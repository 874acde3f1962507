/// Backend used when `BACKEND_URL` is not set at build time.
pub const DEFAULT_BACKEND_URL: &str = "https://recommedia-api.herokuapp.com";

/// Default catalog page size.
pub const DEFAULT_PAGE_LIMIT: u32 = 200;

// Storage keys
pub const STORAGE_KEY_TOKEN: &str = "token";
pub const STORAGE_KEY_MOVIE: &str = "movie";
pub const STORAGE_KEY_FAVORITES: &str = "movie-favorites";

/// Literal a stringified missing token turns into.
pub const UNDEFINED_TOKEN: &str = "undefined";
