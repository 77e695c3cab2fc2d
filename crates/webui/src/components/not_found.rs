use crate::app::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <>
            <h1>{"Page not found"}</h1>
            <p>
                <Link<Route> to={Route::Home}>{"Back to projects"}</Link<Route>>
            </p>
        </>
    }
}
