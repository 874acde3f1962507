use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use super::Route;
use crate::hooks::use_actions;
use crate::models::AdvancedSearch;

const FIELDS: [(&str, &str, &str); 6] = [
    ("name", "Title", "text"),
    ("genre", "Genre", "text"),
    ("min-year", "From year", "number"),
    ("max-year", "To year", "number"),
    ("min-rate", "Min rating", "number"),
    ("max-rate", "Max rating", "number"),
];

/// `(value, label)` pairs for the media type select. Empty means any.
const MEDIA_TYPES: [(&str, &str); 3] = [("", "Any"), ("Movie", "Movie"), ("TV Show", "TV show")];

#[function_component(AdvancedSearchPage)]
pub fn advanced_search_page() -> Html {
    let actions = use_actions();
    let navigator = use_navigator();
    let name_ref = use_node_ref();
    let genre_ref = use_node_ref();
    let min_year_ref = use_node_ref();
    let max_year_ref = use_node_ref();
    let min_rate_ref = use_node_ref();
    let max_rate_ref = use_node_ref();
    let refs = vec![name_ref, genre_ref, min_year_ref, max_year_ref, min_rate_ref, max_rate_ref];
    let media_type_ref = use_node_ref();
    let searching = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_submit = {
        let refs = refs.clone();
        let media_type_ref = media_type_ref.clone();
        let searching = searching.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let values: Vec<String> = refs
                .iter()
                .map(|node| {
                    node.cast::<HtmlInputElement>()
                        .map(|input| input.value())
                        .unwrap_or_default()
                })
                .collect();
            let [name, genre, min_year, max_year, min_rate, max_rate] = values.as_slice() else {
                return;
            };
            let media_type = media_type_ref
                .cast::<HtmlSelectElement>()
                .map(|select| select.value())
                .unwrap_or_default();
            let filters = AdvancedSearch::from_form(
                name,
                genre,
                min_year,
                min_rate,
                max_year,
                max_rate,
                &media_type,
            );
            if filters.is_empty() {
                error.set(Some("Fill in at least one filter".to_string()));
                return;
            }

            let actions = actions.clone();
            let navigator = navigator.clone();
            let searching = searching.clone();
            let error = error.clone();
            searching.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match actions.advanced_search(&filters).await {
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
        <div class="container advanced-search">
            <h2>{"Advanced search"}</h2>
            <form class="advanced-search-form" onsubmit={on_submit}>
                { for FIELDS.iter().zip(refs.iter()).map(|((id, label, kind), node)| html! {
                    <div class="form-group">
                        <label for={*id}>{*label}</label>
                        <input
                            id={*id}
                            type={*kind}
                            step="any"
                            ref={node.clone()}
                        />
                    </div>
                }) }
                <div class="form-group">
                    <label for="media-type">{"Type"}</label>
                    <select id="media-type" ref={media_type_ref}>
                        { for MEDIA_TYPES.iter().map(|(value, label)| html! {
                            <option value={*value}>{*label}</option>
                        }) }
                    </select>
                </div>
                if let Some(message) = (*error).clone() {
                    <p class="error">{message}</p>
                }
                <button type="submit" class="btn-primary" disabled={*searching}>
                    { if *searching { "Searching…" } else { "Search" } }
                </button>
            </form>
        </div>
    }
}
