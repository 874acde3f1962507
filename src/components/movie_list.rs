// ============================================================================
// MOVIE LIST - Search results or the paginated default catalog
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use super::{MovieCard, Route};
use crate::config::CONFIG;
use crate::hooks::use_store;
use crate::models::Movie;
use crate::state::{AppActions, Pagination, Store};

/// Where the rows on screen come from.
#[derive(Clone, PartialEq, Debug)]
enum ListSource {
    /// Results already in the store, all on one page.
    Search {
        movies: Vec<Movie>,
        pagination: Pagination,
    },
    /// The default catalog, fetched page by page starting at `first`.
    Catalog { first: Pagination },
}

impl ListSource {
    fn from_store(store: &Store, page_limit: u32) -> Self {
        match store.search_list() {
            Some(results) => ListSource::Search {
                movies: results.to_vec(),
                pagination: Pagination::for_results(results.len()),
            },
            None => ListSource::Catalog {
                first: Pagination::new(page_limit),
            },
        }
    }

    fn is_search(&self) -> bool {
        matches!(self, ListSource::Search { .. })
    }
}

#[function_component(MovieList)]
pub fn movie_list() -> Html {
    let handle = use_store();
    let navigator = use_navigator();
    let pagination = use_state(|| Pagination::new(CONFIG.page_limit));
    let movies = use_state(Vec::<Movie>::new);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    let source = ListSource::from_store(&handle.store, CONFIG.page_limit);
    let searching = source.is_search();

    // Mount, and every time the search list is replaced or reset
    {
        let actions = handle.actions.clone();
        let pagination = pagination.clone();
        let movies = movies.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with(handle.store.list_version(), move |_| {
            error.set(None);
            match source {
                ListSource::Search {
                    movies: results,
                    pagination: page,
                } => {
                    pagination.set(page);
                    movies.set(results);
                }
                ListSource::Catalog { first } => {
                    pagination.set(first);
                    load_catalog(actions, first, true, pagination, movies, loading, error);
                }
            }
            || ()
        });
    }

    let go_to = |target: fn(Pagination) -> Pagination| {
        let actions = handle.actions.clone();
        let pagination = pagination.clone();
        let movies = movies.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            let page = target(*pagination);
            pagination.set(page);
            load_catalog(
                actions.clone(),
                page,
                false,
                pagination.clone(),
                movies.clone(),
                loading.clone(),
                error.clone(),
            );
        })
    };
    let on_previous = go_to(Pagination::previous);
    let on_next = go_to(Pagination::next);

    let on_select = {
        let actions = handle.actions.clone();
        Callback::from(move |movie: Movie| {
            log::info!("🎬 Selected {} ({})", movie.name(), movie.id);
            if let Err(e) = actions.set_movie(movie) {
                log::warn!("⚠️ {}", e);
            }
            if let Some(nav) = &navigator {
                nav.push(&Route::Movie);
            }
        })
    };

    let current = *pagination;
    html! {
        <div class="container movie-list">
            <p class="list-summary">
                { current.label() }
                if searching {
                    <span class="search-mode">{" (search results)"}</span>
                }
            </p>
            if !searching {
                <div class="pagination">
                    if current.has_previous() {
                        <span class="page-link" onclick={on_previous}>{"Previous"}</span>
                    }
                    <span class="mx-3">{current.page()}</span>
                    if current.has_next() {
                        <span class="page-link" onclick={on_next}>{"Next"}</span>
                    }
                </div>
            }
            if *loading {
                <p class="loading">{"Loading…"}</p>
            }
            if let Some(message) = (*error).clone() {
                <p class="error">{message}</p>
            }
            <ul class="list-group">
                { for movies.iter().map(|movie| html! {
                    <MovieCard
                        key={movie.id.to_string()}
                        movie={movie.clone()}
                        on_select={on_select.clone()}
                        is_favorite={handle.store.is_favorite(movie)}
                    />
                }) }
            </ul>
        </div>
    }
}

/// Fetches one catalog page, and the total count first when asked to.
fn load_catalog(
    actions: AppActions,
    page: Pagination,
    with_count: bool,
    pagination: UseStateHandle<Pagination>,
    movies: UseStateHandle<Vec<Movie>>,
    loading: UseStateHandle<bool>,
    error: UseStateHandle<Option<String>>,
) {
    loading.set(true);
    wasm_bindgen_futures::spawn_local(async move {
        let mut page = page;
        if with_count {
            match actions.catalog_count().await {
                Ok(count) => {
                    page = page.with_count(count);
                    pagination.set(page);
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        }

        match actions.catalog_page(&page).await {
            Ok(rows) => movies.set(rows),
            Err(e) => error.set(Some(e.user_message())),
        }
        loading.set(false);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StoreAction;
    use crate::testing::movie;

    fn store_with(search_list: Option<Vec<Movie>>) -> Store {
        Store::new().reduce(StoreAction::SetSearchList(search_list))
    }

    #[test]
    fn search_results_are_shown_whole() {
        let results = vec![movie(1, "Alien"), movie(2, "Aliens")];
        let source = ListSource::from_store(&store_with(Some(results.clone())), 200);

        assert!(source.is_search());
        let ListSource::Search { movies, pagination } = source else {
            panic!("expected search results");
        };
        assert_eq!(movies, results);
        assert_eq!(pagination.count(), 2);
        assert_eq!(pagination.page(), 1);
    }

    #[test]
    fn empty_search_stays_in_search_mode() {
        let source = ListSource::from_store(&store_with(Some(Vec::new())), 200);
        assert_eq!(
            source,
            ListSource::Search {
                movies: Vec::new(),
                pagination: Pagination::for_results(0),
            }
        );
    }

    #[test]
    fn reset_falls_back_to_the_catalog() {
        let searched = store_with(Some(vec![movie(1, "Alien")]));
        let reset = searched.reduce(StoreAction::SetSearchList(None));
        let source = ListSource::from_store(&reset, 200);

        assert!(!source.is_search());
        assert_eq!(
            source,
            ListSource::Catalog {
                first: Pagination::new(200)
            }
        );
        assert_eq!(ListSource::from_store(&Store::new(), 50), ListSource::Catalog {
            first: Pagination::new(50)
        });
    }
}
