// ============================================================================
// USE STORE - Components read the shared store through this hook
// ============================================================================
// `AppActions` travels through a Yew context. Subscribing forces a re-render
// on every dispatch, so the returned snapshot is always current.
// ============================================================================

use yew::prelude::*;

use crate::state::{AppActions, Store};

#[derive(Clone, PartialEq)]
pub struct UseStoreHandle {
    pub actions: AppActions,
    pub store: Store,
}

/// Actions from the nearest `ContextProvider<AppActions>`. Without one the
/// component gets its own browser-backed actions, built on first use.
#[hook]
pub fn use_actions() -> AppActions {
    let context = use_context::<AppActions>();
    let fallback = use_mut_ref(|| None::<AppActions>);
    if let Some(actions) = context {
        return actions;
    }
    let actions = fallback
        .borrow_mut()
        .get_or_insert_with(|| {
            log::debug!("No AppActions context, using a detached store");
            AppActions::browser()
        })
        .clone();
    actions
}

#[hook]
pub fn use_store() -> UseStoreHandle {
    let actions = use_actions();
    let update = use_force_update();

    {
        let handle = actions.store().clone();
        use_effect_with(handle, move |handle| {
            let id = handle.subscribe(move || update.force_update());
            let handle = handle.clone();
            move || handle.unsubscribe(id)
        });
    }

    let store = actions.snapshot();
    UseStoreHandle { actions, store }
}
