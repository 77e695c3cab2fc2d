use crate::{
    api::{ApiClient, Credentials},
    app::{Route, Session, SessionHandle},
};
use log::warn;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let api = use_context::<ApiClient>().expect("ApiClient context must be provided");
    let session = use_context::<SessionHandle>().expect("session context must be provided");
    let navigator = use_navigator().expect("should be called inside a router");

    let message_state = use_state(|| None::<String>);
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    let on_submit = {
        let api = api.clone();
        let session = session.clone();
        let navigator = navigator.clone();
        let message_state = message_state.clone();
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
            let api = api.clone();
            let session = session.clone();
            let navigator = navigator.clone();
            let message_state = message_state.clone();
            spawn_local(async move {
                match api.login(&Credentials { email, password }).await {
                    Ok(token) => {
                        // Resolve the account behind the token before storing
                        // the session; a failure here still leaves us logged in.
                        let user = match api.current_user(&token).await {
                            Ok(user) => Some(user),
                            Err(err) => {
                                warn!("Fetching current user failed: {err}");
                                None
                            }
                        };
                        session.set(Session {
                            token: Some(token),
                            user,
                        });
                        navigator.push(&Route::Home);
                    }
                    Err(err) => message_state.set(Some(format!("Login failed: {err}"))),
                }
            });
        })
    };

    html! {
        <>
            <h1>{"Sign in"}</h1>
            <form class="auth-form" onsubmit={on_submit}>
                <input ref={email_ref} type="email" placeholder="Email" />
                <input ref={password_ref} type="password" placeholder="Password" />
                <button type="submit">{"Sign in"}</button>
            </form>
            if let Some(message) = message_state.as_ref() {
                <p class="error">{message}</p>
            }
            <p>
                {"No account yet? "}
                <Link<Route> to={Route::Register}>{"Register"}</Link<Route>>
            </p>
        </>
    }
}
