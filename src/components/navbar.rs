use yew::prelude::*;
use yew_router::prelude::*;

use super::{Route, SearchBar};
use crate::hooks::use_store;

#[function_component(NavBar)]
pub fn navbar() -> Html {
    let handle = use_store();
    let navigator = use_navigator();
    let logged_in = handle.store.is_logged_in();

    // "Movie List" always means the default catalog
    let on_catalog = {
        let actions = handle.actions.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            actions.reset_search_list();
            if let Some(nav) = &navigator {
                nav.push(&Route::List);
            }
        })
    };

    let on_logout = {
        let actions = handle.actions.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = actions.logout() {
                log::warn!("⚠️ {}", e);
            }
            if let Some(nav) = &navigator {
                nav.push(&Route::Home);
            }
        })
    };

    html! {
        <nav class="navbar">
            <Link<Route> classes={classes!("navbar-brand")} to={Route::Home}>{"RecomMedia"}</Link<Route>>
            <div class="navbar-links">
                <a href="/list" class="nav-link" onclick={on_catalog}>{"Movie List"}</a>
                <Link<Route> classes={classes!("nav-link")} to={Route::AdvancedSearch}>{"Advanced Search"}</Link<Route>>
                if logged_in {
                    <Link<Route> classes={classes!("nav-link")} to={Route::Favorites}>
                        {format!("Favorites ({})", handle.store.movie_favorites().len())}
                    </Link<Route>>
                }
            </div>
            <SearchBar />
            <div class="navbar-auth">
                if logged_in {
                    <button class="btn-logout" onclick={on_logout}>{"Logout"}</button>
                } else {
                    <>
                        <Link<Route> classes={classes!("nav-link")} to={Route::Login}>{"Login"}</Link<Route>>
                        <Link<Route> classes={classes!("nav-link")} to={Route::Signup}>{"Sign up"}</Link<Route>>
                    </>
                }
            </div>
        </nav>
    }
}
