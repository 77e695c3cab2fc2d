use crate::{
    api::{ApiClient, ApiError, Drawing, NewDrawing},
    app::{Route, SessionHandle},
    root_view::IMAGE_VIEWER_PREFIX,
    util::time::age,
};
use chrono::Utc;
use log::{debug, error};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(PartialEq, Properties)]
pub struct DrawingListPageProps {
    pub project_id: i64,
}

/// Drawings of one project, each linking into the standalone viewer.
///
/// The viewer link is a plain anchor on purpose: the viewer is a separate
/// root, so opening it is a full document navigation, not a router push.
#[function_component(DrawingListPage)]
pub fn drawing_list_page(DrawingListPageProps { project_id }: &DrawingListPageProps) -> Html {
    let api = use_context::<ApiClient>().expect("ApiClient context must be provided");
    let session = use_context::<SessionHandle>().expect("session context must be provided");

    let drawings_state = use_state(|| None::<Result<Vec<Drawing>, ApiError>>);
    let refresh_state = use_state(|| 0_u32);
    let message_state = use_state(|| None::<String>);
    let name_ref = use_node_ref();
    let file_path_ref = use_node_ref();
    let width_ref = use_node_ref();
    let height_ref = use_node_ref();
    let scale_ref = use_node_ref();

    {
        let api = api.clone();
        let drawings_state = drawings_state.clone();
        use_effect_with(
            (session.token.clone(), *project_id, *refresh_state),
            move |(token, project_id, _)| {
                if let Some(token) = token.clone() {
                    let project_id = *project_id;
                    spawn_local(async move {
                        let result = api.list_drawings(&token, project_id).await;
                        if let Err(err) = &result {
                            error!("Loading drawings of project {project_id} failed: {err}");
                        }
                        drawings_state.set(Some(result));
                    });
                }
            },
        );
    }

    let Some(token) = session.token.clone() else {
        return html! {
            <p>
                {"Sign in to see this project: "}
                <Link<Route> to={Route::Login}>{"Sign in"}</Link<Route>>
            </p>
        };
    };

    let on_create = {
        let api = api.clone();
        let project_id = *project_id;
        let name_ref = name_ref.clone();
        let file_path_ref = file_path_ref.clone();
        let width_ref = width_ref.clone();
        let height_ref = height_ref.clone();
        let scale_ref = scale_ref.clone();
        let refresh_state = refresh_state.clone();
        let message_state = message_state.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let value_of = |node_ref: &NodeRef| {
                node_ref
                    .cast::<HtmlInputElement>()
                    .expect("drawing form input must be attached")
                    .value()
            };
            let name = value_of(&name_ref);
            let file_path = value_of(&file_path_ref);
            if name.trim().is_empty() || file_path.trim().is_empty() {
                message_state.set(Some("Name and file path are required".to_string()));
                return;
            }
            let new_drawing = NewDrawing {
                name,
                file_path,
                width: value_of(&width_ref).parse().ok(),
                height: value_of(&height_ref).parse().ok(),
                scale: {
                    let scale = value_of(&scale_ref);
                    (!scale.trim().is_empty()).then_some(scale)
                },
            };
            let api = api.clone();
            let token = token.clone();
            let refresh_state = refresh_state.clone();
            let message_state = message_state.clone();
            spawn_local(async move {
                match api.create_drawing(&token, project_id, &new_drawing).await {
                    Ok(drawing) => {
                        debug!("Created drawing {}", drawing.id);
                        message_state.set(None);
                        refresh_state.set(*refresh_state + 1);
                    }
                    Err(err) => message_state.set(Some(format!("Creating drawing failed: {err}"))),
                }
            });
        })
    };

    let body = match drawings_state.as_ref() {
        None => html! { <p>{"Loading drawings..."}</p> },
        Some(Err(err)) => html! {
            <p class="error">{format!("Loading drawings failed: {err}")}</p>
        },
        Some(Ok(drawings)) if drawings.is_empty() => html! {
            <p>{"This project has no drawings yet."}</p>
        },
        Some(Ok(drawings)) => {
            let now = Utc::now().naive_utc();
            html! {
                <ul class="drawing-list">
                    { for drawings.iter().map(|drawing| html! {
                        <li key={drawing.id}>
                            <a href={format!("{IMAGE_VIEWER_PREFIX}/{}", drawing.id)}>
                                { &drawing.name }
                            </a>
                            if let Some(dimensions) = drawing.dimensions() {
                                <span class="dimensions">{dimensions}{" px"}</span>
                            }
                            if let Some(scale) = &drawing.scale {
                                <span class="scale">{scale}</span>
                            }
                            <span class="age">{ age(drawing.created_at, now) }</span>
                        </li>
                    })}
                </ul>
            }
        }
    };

    html! {
        <>
            <nav class="breadcrumbs">
                <Link<Route> to={Route::Home}>{"Projects"}</Link<Route>>
            </nav>
            <h1>{format!("Project {project_id}")}</h1>
            { body }
            <form class="inline-form" onsubmit={on_create}>
                <input ref={name_ref} placeholder="Drawing name" />
                <input ref={file_path_ref} placeholder="File path, e.g. /static/drawings/a.png" />
                <input ref={width_ref} placeholder="Width (px)" inputmode="numeric" />
                <input ref={height_ref} placeholder="Height (px)" inputmode="numeric" />
                <input ref={scale_ref} placeholder="Scale, e.g. 1:50" />
                <button type="submit">{"Add drawing"}</button>
            </form>
            if let Some(message) = message_state.as_ref() {
                <p class="error">{message}</p>
            }
        </>
    }
}
