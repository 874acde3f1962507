use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use super::Route;
use crate::hooks::use_actions;

#[function_component(SearchBar)]
pub fn search_bar() -> Html {
    let actions = use_actions();
    let navigator = use_navigator();
    let input_ref = use_node_ref();
    let searching = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_submit = {
        let input_ref = input_ref.clone();
        let searching = searching.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let query = input.value().trim().to_string();
            if query.is_empty() {
                return;
            }

            let actions = actions.clone();
            let navigator = navigator.clone();
            let searching = searching.clone();
            let error = error.clone();
            searching.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match actions.search(&query).await {
                    Ok(_) => {
                        error.set(None);
                        if let Some(nav) = navigator {
                            nav.push(&Route::List);
                        }
                    }
                    Err(e) => error.set(Some(e.user_message())),
                }
                searching.set(false);
            });
        })
    };

    html! {
        <form class="search-bar" onsubmit={on_submit}>
            <input
                type="search"
                placeholder="Search movies"
                aria-label="Search"
                ref={input_ref}
            />
            <button type="submit" disabled={*searching}>
                { if *searching { "Searching…" } else { "Search" } }
            </button>
            if let Some(message) = (*error).clone() {
                <span class="search-error">{message}</span>
            }
        </form>
    }
}
