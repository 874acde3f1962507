use yew::prelude::*;
use yew_router::prelude::*;

use super::Route;
use crate::hooks::use_store;
use crate::models::Movie;

#[function_component(MovieDetail)]
pub fn movie_detail() -> Html {
    let handle = use_store();
    let busy = use_state(|| false);
    let error = use_state(|| None::<String>);

    // Selection survives reloads through durable storage
    {
        let actions = handle.actions.clone();
        use_effect_with((), move |_| {
            actions.sync_movies();
            || ()
        });
    }

    let Some(movie) = handle.store.movie().cloned() else {
        return html! {
            <div class="container movie-detail empty">
                <p>{"No movie selected."}</p>
                <Link<Route> to={Route::List}>{"Browse the catalog"}</Link<Route>>
            </div>
        };
    };

    let is_favorite = handle.store.is_favorite(&movie);
    let on_toggle_favorite = {
        let actions = handle.actions.clone();
        let movie = movie.clone();
        let busy = busy.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            let actions = actions.clone();
            let movie = movie.clone();
            let busy = busy.clone();
            let error = error.clone();
            busy.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = if is_favorite {
                    actions.remove_movie_favorite(&movie).await
                } else {
                    actions.set_movie_favorite(&movie).await
                };
                error.set(result.err().map(|e| e.user_message()));
                busy.set(false);
            });
        })
    };

    html! {
        <div class="container movie-detail">
            <div class="movie-detail-poster">
                if let Some(link) = movie.link().map(str::to_string) {
                    <img src={link} alt={movie.name().to_string()} />
                }
            </div>
            <div class="movie-detail-body">
                <h2>{movie.title()}</h2>
                { detail_rows(&movie) }
                if let Some(summary) = movie.summary().map(str::to_string) {
                    <p class="movie-summary">{summary}</p>
                }
                if handle.store.is_logged_in() {
                    <button
                        class={classes!("btn-favorite", is_favorite.then_some("active"))}
                        disabled={*busy}
                        onclick={on_toggle_favorite}
                    >
                        { if is_favorite { "★ Remove from favorites" } else { "☆ Add to favorites" } }
                    </button>
                } else {
                    <p class="hint">
                        <Link<Route> to={Route::Login}>{"Log in"}</Link<Route>>
                        {" to keep favorites."}
                    </p>
                }
                if let Some(message) = (*error).clone() {
                    <p class="error">{message}</p>
                }
            </div>
        </div>
    }
}

fn detail_rows(movie: &Movie) -> Html {
    let rating = movie.rating_label();
    let running_time = movie.running_time_label();
    let rows = [
        ("Type", movie.media_type().unwrap_or_default().to_string()),
        ("Genres", movie.genres().map(str::to_string).unwrap_or_default()),
        ("Rating", if rating.is_empty() { rating } else { format!("{}/10", rating) }),
        ("Running time", if running_time.is_empty() { running_time } else { format!("{} min", running_time) }),
        ("Certificate", movie.certificate().unwrap_or_default().to_string()),
    ];

    html! {
        <dl class="movie-facts">
            { for rows.into_iter().filter(|(_, value)| !value.is_empty()).map(|(label, value)| html! {
                <>
                    <dt>{label}</dt>
                    <dd>{value}</dd>
                </>
            }) }
        </dl>
    }
}
