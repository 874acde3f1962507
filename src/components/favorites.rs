use yew::prelude::*;
use yew_router::prelude::*;

use super::{MovieCard, Route};
use crate::hooks::use_store;
use crate::models::Movie;

#[function_component(FavoritesPage)]
pub fn favorites_page() -> Html {
    let handle = use_store();
    let navigator = use_navigator();
    let refreshing = use_state(|| false);
    let error = use_state(|| None::<String>);

    if !handle.store.is_logged_in() {
        return html! {
            <div class="container favorites">
                <p>
                    <Link<Route> to={Route::Login}>{"Log in"}</Link<Route>>
                    {" to see your favorites."}
                </p>
            </div>
        };
    }

    let on_refresh = {
        let actions = handle.actions.clone();
        let refreshing = refreshing.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            let actions = actions.clone();
            let refreshing = refreshing.clone();
            let error = error.clone();
            refreshing.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                error.set(actions.get_movie_favorites().await.err().map(|e| e.user_message()));
                refreshing.set(false);
            });
        })
    };

    let on_select = {
        let actions = handle.actions.clone();
        Callback::from(move |movie: Movie| {
            if let Err(e) = actions.set_movie(movie) {
                log::warn!("⚠️ {}", e);
            }
            if let Some(nav) = &navigator {
                nav.push(&Route::Movie);
            }
        })
    };

    let favorites = handle.store.movie_favorites();
    html! {
        <div class="container favorites">
            <h2>{format!("Favorites ({})", favorites.len())}</h2>
            <button class="btn-refresh" onclick={on_refresh} disabled={*refreshing}>
                { if *refreshing { "Refreshing…" } else { "Refresh" } }
            </button>
            if let Some(message) = (*error).clone() {
                <p class="error">{message}</p>
            }
            if favorites.is_empty() {
                <p class="hint">{"Nothing here yet. Open a movie and add it to your favorites."}</p>
            }
            <ul class="list-group">
                { for favorites.iter().map(|movie| html! {
                    <MovieCard
                        key={movie.id.to_string()}
                        movie={movie.clone()}
                        on_select={on_select.clone()}
                        is_favorite={true}
                    />
                }) }
            </ul>
        </div>
    }
}
