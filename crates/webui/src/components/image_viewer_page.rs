use crate::api::{ApiClient, ApiError, Drawing};
use log::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(PartialEq, Properties)]
pub struct ImageViewerProps {
    pub api: ApiClient,
    /// Parsed from the startup path; `None` opens the viewer empty.
    pub drawing_id: Option<i64>,
}

/// Standalone root showing a single drawing. Mounted instead of the main
/// app when the page is loaded under the image-viewer path, so "back to
/// projects" is a plain anchor and a full document navigation.
#[function_component(ImageViewerPage)]
pub fn image_viewer_page(ImageViewerProps { api, drawing_id }: &ImageViewerProps) -> Html {
    let drawing_state = use_state(|| None::<Result<Drawing, ApiError>>);

    {
        let api = api.clone();
        let drawing_state = drawing_state.clone();
        use_effect_with(*drawing_id, move |drawing_id| {
            if let Some(drawing_id) = *drawing_id {
                spawn_local(async move {
                    let result = api.drawing(drawing_id).await;
                    if let Err(err) = &result {
                        error!("Loading drawing {drawing_id} failed: {err}");
                    }
                    drawing_state.set(Some(result));
                });
            }
        });
    }

    let body = match (drawing_id, drawing_state.as_ref()) {
        (None, _) => html! {
            <p>{"No drawing selected. Open a drawing from its project page."}</p>
        },
        (Some(_), None) => html! { <p>{"Loading drawing..."}</p> },
        (Some(_), Some(Err(err))) => html! {
            <p class="error">{format!("Loading drawing failed: {err}")}</p>
        },
        (Some(_), Some(Ok(drawing))) => {
            let src = api.static_url(&drawing.file_path);
            html! {
                <figure class="viewer">
                    <img src={src} alt={drawing.name.clone()} />
                    <figcaption>
                        <span class="drawing-name">{ &drawing.name }</span>
                        if let Some(dimensions) = drawing.dimensions() {
                            <span class="dimensions">{dimensions}{" px"}</span>
                        }
                        if let Some(scale) = &drawing.scale {
                            <span class="scale">{"scale "}{scale}</span>
                        }
                    </figcaption>
                </figure>
            }
        }
    };

    html! {
        <div class="container viewer-page">
            <nav>
                <a href="/">{"Projects"}</a>
            </nav>
            { body }
        </div>
    }
}
