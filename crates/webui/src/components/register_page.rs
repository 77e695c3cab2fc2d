use crate::{
    api::{ApiClient, NewUser},
    app::Route,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

/// Outcome of the last registration attempt, shown under the form.
#[derive(Clone, PartialEq)]
enum Outcome {
    Created,
    Failed(String),
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let api = use_context::<ApiClient>().expect("ApiClient context must be provided");

    let outcome_state = use_state(|| None::<Outcome>);
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    let on_submit = {
        let api = api.clone();
        let outcome_state = outcome_state.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let email = email_ref
                .cast::<HtmlInputElement>()
                .expect("email input must be attached")
                .value();
            let password = password_ref
                .cast::<HtmlInputElement>()
                .expect("password input must be attached")
                .value();
            if password.len() < 8 {
                outcome_state.set(Some(Outcome::Failed(
                    "Password must be at least 8 characters".to_string(),
                )));
                return;
            }
            let api = api.clone();
            let outcome_state = outcome_state.clone();
            spawn_local(async move {
                match api.register(&NewUser { email, password }).await {
                    Ok(_) => outcome_state.set(Some(Outcome::Created)),
                    Err(err) => {
                        outcome_state.set(Some(Outcome::Failed(format!("Registration failed: {err}"))));
                    }
                }
            });
        })
    };

    let outcome = match outcome_state.as_ref() {
        None => html! {},
        Some(Outcome::Created) => html! {
            <p>
                {"Account created. "}
                <Link<Route> to={Route::Login}>{"Sign in"}</Link<Route>>
            </p>
        },
        Some(Outcome::Failed(message)) => html! { <p class="error">{message}</p> },
    };

    html! {
        <>
            <h1>{"Register"}</h1>
            <form class="auth-form" onsubmit={on_submit}>
                <input ref={email_ref} type="email" placeholder="Email" />
                <input ref={password_ref} type="password" placeholder="Password (min. 8 characters)" />
                <button type="submit">{"Create account"}</button>
            </form>
            { outcome }
        </>
    }
}
