use eeye_webui::{
    api::ApiClient,
    app::{App, AppProps},
    components::image_viewer_page::{ImageViewerPage, ImageViewerProps},
    root_view::{RootView, drawing_id},
};

fn main() {
    init_logging();

    // The path is read once per page load; navigation afterwards stays
    // inside whichever root was mounted.
    let path = gloo::utils::window()
        .location()
        .pathname()
        .unwrap_or_default();
    let api = ApiClient::from_build_env();
    let mount_point = gloo::utils::document()
        .get_element_by_id("app")
        .expect("index.html must contain an element with id `app`");

    match RootView::select(&path) {
        RootView::App => {
            yew::Renderer::<App>::with_root_and_props(mount_point, AppProps { api }).render();
        }
        RootView::ImageViewer => {
            yew::Renderer::<ImageViewerPage>::with_root_and_props(
                mount_point,
                ImageViewerProps {
                    api,
                    drawing_id: drawing_id(&path),
                },
            )
            .render();
        }
    }
}

fn init_logging() {
    use log::Level;
    use wasm_logger::Config;

    // use debug level for debug builds, warn level for production builds.
    #[cfg(debug_assertions)]
    let level = Level::Trace;
    #[cfg(not(debug_assertions))]
    let level = Level::Warn;

    wasm_logger::init(Config::new(level));
}
