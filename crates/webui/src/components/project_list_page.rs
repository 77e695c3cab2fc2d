use crate::{
    api::{ApiClient, ApiError, NewProject, Project},
    app::{Route, SessionHandle},
    util::{color::accent_color, time::age},
};
use chrono::Utc;
use log::{debug, error};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

/// Home page: the signed-in user's projects plus an inline create form.
#[function_component(ProjectListPage)]
pub fn project_list_page() -> Html {
    let api = use_context::<ApiClient>().expect("ApiClient context must be provided");
    let session = use_context::<SessionHandle>().expect("session context must be provided");

    let projects_state = use_state(|| None::<Result<Vec<Project>, ApiError>>);
    let refresh_state = use_state(|| 0_u32); // bumped after each create to refetch
    let message_state = use_state(|| None::<String>);
    let name_ref = use_node_ref();

    {
        let api = api.clone();
        let projects_state = projects_state.clone();
        use_effect_with(
            (session.token.clone(), *refresh_state),
            move |(token, _)| {
                if let Some(token) = token.clone() {
                    spawn_local(async move {
                        let result = api.list_projects(&token).await;
                        if let Err(err) = &result {
                            error!("Loading projects failed: {err}");
                        }
                        projects_state.set(Some(result));
                    });
                }
            },
        );
    }

    let Some(token) = session.token.clone() else {
        return html! {
            <p>
                {"Sign in to see your projects: "}
                <Link<Route> to={Route::Login}>{"Sign in"}</Link<Route>>
            </p>
        };
    };

    let on_create = {
        let api = api.clone();
        let name_ref = name_ref.clone();
        let refresh_state = refresh_state.clone();
        let message_state = message_state.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let name_input = name_ref
                .cast::<HtmlInputElement>()
                .expect("project name input must be attached");
            let name = name_input.value();
            if name.trim().is_empty() {
                return;
            }
            let api = api.clone();
            let token = token.clone();
            let refresh_state = refresh_state.clone();
            let message_state = message_state.clone();
            spawn_local(async move {
                match api.create_project(&token, &NewProject { name }).await {
                    Ok(project) => {
                        debug!("Created project {}", project.id);
                        name_input.set_value("");
                        message_state.set(None);
                        refresh_state.set(*refresh_state + 1);
                    }
                    Err(err) => message_state.set(Some(format!("Creating project failed: {err}"))),
                }
            });
        })
    };

    let body = match projects_state.as_ref() {
        None => html! { <p>{"Loading projects..."}</p> },
        Some(Err(err)) => html! {
            <p class="error">{format!("Loading projects failed: {err}")}</p>
        },
        Some(Ok(projects)) if projects.is_empty() => html! {
            <p>{"No projects yet. Create one below."}</p>
        },
        Some(Ok(projects)) => {
            let now = Utc::now().naive_utc();
            html! {
                <ul class="project-list">
                    { for projects.iter().map(|project| html! {
                        <li key={project.id}>
                            <span
                                class="accent-dot"
                                style={format!("background-color: {}", accent_color(&project.name))}
                            />
                            <Link<Route> to={Route::ProjectDrawings { project_id: project.id }}>
                                { &project.name }
                            </Link<Route>>
                            <span class="age">{ age(project.created_at, now) }</span>
                        </li>
                    })}
                </ul>
            }
        }
    };

    html! {
        <>
            <h1>{"Projects"}</h1>
            { body }
            <form class="inline-form" onsubmit={on_create}>
                <input ref={name_ref} placeholder="New project name" />
                <button type="submit">{"Create"}</button>
            </form>
            if let Some(message) = message_state.as_ref() {
                <p class="error">{message}</p>
            }
        </>
    }
}
