pub mod drawing_list_page;
pub mod health_badge;
pub mod image_viewer_page;
pub mod login_page;
pub mod not_found;
pub mod project_list_page;
pub mod register_page;
