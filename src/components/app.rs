// ============================================================================
// APP - Router shell and store provider
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use super::{AdvancedSearchPage, AuthMode, AuthScreen, FavoritesPage, Home, MovieDetail, MovieList, NavBar};
use crate::hooks::use_store;
use crate::state::AppActions;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/list")]
    List,
    #[at("/movie")]
    Movie,
    #[at("/search")]
    AdvancedSearch,
    #[at("/favorites")]
    Favorites,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::List => html! { <MovieList /> },
        Route::Movie => html! { <MovieDetail /> },
        Route::AdvancedSearch => html! { <AdvancedSearchPage /> },
        Route::Favorites => html! { <FavoritesPage /> },
        Route::Login => html! { <AuthScreen mode={AuthMode::Login} /> },
        Route::Signup => html! { <AuthScreen mode={AuthMode::Signup} /> },
        Route::NotFound => html! {
            <div class="container not-found">
                <h2>{"Page not found"}</h2>
                <Link<Route> to={Route::Home}>{"Back home"}</Link<Route>>
            </div>
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    // One store for the whole session, rehydrated from browser storage.
    let actions = use_memo((), |_| {
        let actions = AppActions::browser();
        actions.sync_token();
        actions.sync_favorites();
        actions
    });

    html! {
        <ContextProvider<AppActions> context={(*actions).clone()}>
            <BrowserRouter>
                <Shell />
            </BrowserRouter>
        </ContextProvider<AppActions>>
    }
}

/// Refreshes favorites whenever the token changes to a usable one.
#[function_component(Shell)]
fn shell() -> Html {
    let handle = use_store();

    {
        let actions = handle.actions.clone();
        let token = handle.store.token().map(str::to_string);
        use_effect_with(token, move |_| {
            if actions.checked_login() {
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(e) = actions.get_movie_favorites().await {
                        log::warn!("⚠️ Favorites not refreshed: {}", e);
                    }
                });
            }
            || ()
        });
    }

    html! {
        <>
            <NavBar />
            <main>
                <Switch<Route> render={switch} />
            </main>
        </>
    }
}
