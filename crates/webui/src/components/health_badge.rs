use crate::api::ApiClient;
use log::debug;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Small dot in the nav showing whether the API answered its health check.
/// Checked once per page load.
#[function_component(HealthBadge)]
pub fn health_badge() -> Html {
    let api = use_context::<ApiClient>().expect("ApiClient context must be provided");
    let healthy_state = use_state(|| None::<bool>);

    {
        let healthy_state = healthy_state.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                let healthy = match api.health().await {
                    Ok(health) => health.is_ok(),
                    Err(err) => {
                        debug!("Health check failed: {err}");
                        false
                    }
                };
                healthy_state.set(Some(healthy));
            });
        });
    }

    match *healthy_state {
        None => html! {},
        Some(true) => html! {
            <span class="health health-ok" title="API reachable">{"●"}</span>
        },
        Some(false) => html! {
            <span class="health health-down" title="API unreachable">{"●"}</span>
        },
    }
}
