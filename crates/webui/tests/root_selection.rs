#![cfg(target_arch = "wasm32")]

use eeye_webui::root_view::{RootView, drawing_id};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn viewer_paths_select_the_viewer() {
    assert_eq!(RootView::select("/image-viewer"), RootView::ImageViewer);
    assert_eq!(RootView::select("/image-viewer/123"), RootView::ImageViewer);
}

#[wasm_bindgen_test]
fn other_paths_select_the_app() {
    assert_eq!(RootView::select("/"), RootView::App);
    assert_eq!(RootView::select("/dashboard"), RootView::App);
    assert_eq!(RootView::select("/foo/image-viewer"), RootView::App);
}

#[wasm_bindgen_test]
fn viewer_drawing_id_comes_from_the_path() {
    assert_eq!(drawing_id("/image-viewer/42"), Some(42));
    assert_eq!(drawing_id("/image-viewer"), None);
}
