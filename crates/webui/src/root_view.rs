//! Startup selection of the root view.

/// Path prefix that switches the bootstrap to the standalone image viewer.
pub const IMAGE_VIEWER_PREFIX: &str = "/image-viewer";

/// Which root component gets mounted for this page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootView {
    /// The routed project browser (default).
    App,
    /// The standalone image viewer.
    ImageViewer,
}

impl RootView {
    /// Picks the root view for the path the page was loaded on.
    ///
    /// `/image-viewer` and anything beneath it selects the viewer; every
    /// other path selects the main app. The comparison is a literal prefix
    /// check, so a path that merely contains `image-viewer` somewhere else
    /// stays on the app.
    pub fn select(path: &str) -> RootView {
        if path == IMAGE_VIEWER_PREFIX || path.starts_with(IMAGE_VIEWER_PREFIX) {
            RootView::ImageViewer
        } else {
            RootView::App
        }
    }
}

/// Drawing id encoded in the first path segment after the viewer prefix,
/// e.g. `/image-viewer/7`. `None` when absent or not a number; the viewer
/// then starts without a selected drawing.
pub fn drawing_id(path: &str) -> Option<i64> {
    let rest = path.strip_prefix(IMAGE_VIEWER_PREFIX)?;
    let segment = rest
        .trim_start_matches('/')
        .split(['/', '?'])
        .next()
        .unwrap_or_default();
    segment.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_path_selects_image_viewer() {
        assert_eq!(RootView::select("/image-viewer"), RootView::ImageViewer);
    }

    #[test]
    fn viewer_subpath_selects_image_viewer() {
        assert_eq!(RootView::select("/image-viewer/123"), RootView::ImageViewer);
        assert_eq!(RootView::select("/image-viewer/"), RootView::ImageViewer);
        assert_eq!(RootView::select("/image-viewers"), RootView::ImageViewer);
    }

    #[test]
    fn other_paths_select_app() {
        assert_eq!(RootView::select("/"), RootView::App);
        assert_eq!(RootView::select(""), RootView::App);
        assert_eq!(RootView::select("/dashboard"), RootView::App);
        assert_eq!(RootView::select("/other"), RootView::App);
    }

    #[test]
    fn non_prefix_occurrence_selects_app() {
        assert_eq!(RootView::select("/foo/image-viewer"), RootView::App);
    }

    #[test]
    fn drawing_id_parses_first_segment() {
        assert_eq!(drawing_id("/image-viewer/7"), Some(7));
        assert_eq!(drawing_id("/image-viewer/7/annotations"), Some(7));
    }

    #[test]
    fn drawing_id_absent_or_malformed() {
        assert_eq!(drawing_id("/image-viewer"), None);
        assert_eq!(drawing_id("/image-viewer/"), None);
        assert_eq!(drawing_id("/image-viewer/latest"), None);
        assert_eq!(drawing_id("/dashboard"), None);
    }
}
