use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use super::Route;
use crate::hooks::use_actions;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    fn title(&self) -> &'static str {
        match self {
            AuthMode::Login => "Log in",
            AuthMode::Signup => "Create an account",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthScreenProps {
    pub mode: AuthMode,
}

#[function_component(AuthScreen)]
pub fn auth_screen(props: &AuthScreenProps) -> Html {
    let actions = use_actions();
    let navigator = use_navigator();
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let submitting = use_state(|| false);
    let error = use_state(|| None::<String>);
    let signed_up = use_state(|| false);
    let mode = props.mode;

    let on_submit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        let signed_up = signed_up.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(username_input), Some(password_input)) = (
                username_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };
            let username = username_input.value().trim().to_string();
            let password = password_input.value();
            if username.is_empty() || password.is_empty() {
                error.set(Some("Please fill in both fields".to_string()));
                return;
            }

            let actions = actions.clone();
            let navigator = navigator.clone();
            let submitting = submitting.clone();
            let error = error.clone();
            let signed_up = signed_up.clone();
            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = match mode {
                    AuthMode::Login => actions.login(&username, &password).await,
                    AuthMode::Signup => actions.signup(&username, &password).await,
                };
                submitting.set(false);
                match result {
                    Ok(()) if mode == AuthMode::Login => {
                        error.set(None);
                        if let Some(nav) = navigator {
                            nav.push(&Route::Home);
                        }
                    }
                    Ok(()) => {
                        error.set(None);
                        signed_up.set(true);
                    }
                    Err(e) => error.set(Some(e.credentials_message())),
                }
            });
        })
    };

    if *signed_up {
        return html! {
            <div class="container auth-screen">
                <h2>{"Account created"}</h2>
                <p>{"Your account is ready."}</p>
                <Link<Route> to={Route::Login}>{"Continue to log in"}</Link<Route>>
            </div>
        };
    }

    html! {
        <div class="container auth-screen">
            <h2>{mode.title()}</h2>
            <form class="auth-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="username">{"Username"}</label>
                    <input type="text" id="username" name="username" ref={username_ref} required=true />
                </div>
                <div class="form-group">
                    <label for="password">{"Password"}</label>
                    <input type="password" id="password" name="password" ref={password_ref} required=true />
                </div>
                if let Some(message) = (*error).clone() {
                    <p class="error">{message}</p>
                }
                <button type="submit" class="btn-primary" disabled={*submitting}>
                    { if *submitting { "Please wait…" } else { mode.title() } }
                </button>
            </form>
            {
                match mode {
                    AuthMode::Login => html! {
                        <p>{"No account yet? "}<Link<Route> to={Route::Signup}>{"Sign up"}</Link<Route>></p>
                    },
                    AuthMode::Signup => html! {
                        <p>{"Already registered? "}<Link<Route> to={Route::Login}>{"Log in"}</Link<Route>></p>
                    },
                }
            }
        </div>
    }
}
