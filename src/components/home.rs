use yew::prelude::*;
use yew_router::prelude::*;

use super::Route;
use crate::hooks::use_store;

#[function_component(Home)]
pub fn home() -> Html {
    let handle = use_store();

    let on_browse = {
        let actions = handle.actions.clone();
        Callback::from(move |_: MouseEvent| actions.reset_search_list())
    };

    html! {
        <div class="container home">
            <h1>{"RecomMedia"}</h1>
            <p>{"Find your next movie. Search by title from the bar above, or narrow it down with the advanced search."}</p>
            <div class="home-actions" onclick={on_browse}>
                <Link<Route> classes={classes!("btn-primary")} to={Route::List}>{"Browse the catalog"}</Link<Route>>
            </div>
            <Link<Route> classes={classes!("btn-secondary")} to={Route::AdvancedSearch}>{"Advanced search"}</Link<Route>>
            if !handle.store.is_logged_in() {
                <p class="hint">
                    <Link<Route> to={Route::Login}>{"Log in"}</Link<Route>>
                    {" to keep a list of favorites."}
                </p>
            }
        </div>
    }
}
