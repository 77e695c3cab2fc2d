//! REST client for the e-eye backend.
//!
//! A single [`ApiClient`] is constructed in `main` and handed to the
//! mounted root; pages reach it through a `ContextProvider`. Every request
//! path is relative to the configured origin.

use gloo::net::http::{RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

pub mod drawing;
pub mod project;
pub mod user;

pub use drawing::{Drawing, NewDrawing};
pub use project::{NewProject, Project};
pub use user::{Credentials, NewUser, Token, User};

/// Fallback API origin used when no override is baked in at build time.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Resolves the API origin from an optional build-time override.
pub const fn resolve_base_url(build_override: Option<&'static str>) -> &'static str {
    match build_override {
        Some(url) => url,
        None => DEFAULT_BASE_URL,
    }
}

/// API origin for this build. Set `API_BASE_URL` when invoking trunk/cargo
/// to point the client elsewhere.
pub const BASE_URL: &str = resolve_base_url(option_env!("API_BASE_URL"));

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never completed, or the body could not be decoded.
    #[error(transparent)]
    Net(#[from] gloo::net::Error),
    /// The server answered with a non-success status.
    #[error("HTTP {status}: {detail}")]
    Status { status: u16, detail: String },
}

/// Error body shape used by the backend (`{"detail": "..."}`).
#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

/// `GET /health` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Health {
    pub status: String,
}

impl Health {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Client for the e-eye REST API, constructed once at startup and held for
/// the lifetime of the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> ApiClient {
        ApiClient {
            base_url: base_url.into(),
        }
    }

    /// Client pointed at the origin resolved at build time.
    pub fn from_build_env() -> ApiClient {
        ApiClient::new(BASE_URL)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Absolute URL for a file served from the backend's static mount.
    pub fn static_url(&self, file_path: &str) -> String {
        if file_path.starts_with('/') {
            self.url(file_path)
        } else {
            format!("{}/{file_path}", self.base_url)
        }
    }

    pub async fn health(&self) -> Result<Health, ApiError> {
        self.get_json("/health", None).await
    }

    pub async fn register(&self, new_user: &NewUser) -> Result<User, ApiError> {
        self.post_json("/users", new_user, None).await
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<Token, ApiError> {
        self.post_json("/auth/login", credentials, None).await
    }

    pub async fn current_user(&self, token: &Token) -> Result<User, ApiError> {
        self.get_json("/me", Some(token)).await
    }

    pub async fn list_projects(&self, token: &Token) -> Result<Vec<Project>, ApiError> {
        self.get_json("/projects", Some(token)).await
    }

    pub async fn create_project(
        &self,
        token: &Token,
        new_project: &NewProject,
    ) -> Result<Project, ApiError> {
        self.post_json("/projects", new_project, Some(token)).await
    }

    pub async fn list_drawings(
        &self,
        token: &Token,
        project_id: i64,
    ) -> Result<Vec<Drawing>, ApiError> {
        self.get_json(&format!("/projects/{project_id}/drawings"), Some(token))
            .await
    }

    pub async fn create_drawing(
        &self,
        token: &Token,
        project_id: i64,
        new_drawing: &NewDrawing,
    ) -> Result<Drawing, ApiError> {
        self.post_json(
            &format!("/projects/{project_id}/drawings"),
            new_drawing,
            Some(token),
        )
        .await
    }

    pub async fn drawing(&self, drawing_id: i64) -> Result<Drawing, ApiError> {
        self.get_json(&format!("/drawings/{drawing_id}"), None).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&Token>,
    ) -> Result<T, ApiError> {
        let request = with_auth(gloo::net::http::Request::get(&self.url(path)), token);
        let response = check_status(request.send().await?).await?;
        Ok(response.json().await?)
    }

    async fn post_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
        token: Option<&Token>,
    ) -> Result<T, ApiError> {
        let request = with_auth(gloo::net::http::Request::post(&self.url(path)), token);
        let response = check_status(request.json(body)?.send().await?).await?;
        Ok(response.json().await?)
    }
}

fn with_auth(request: RequestBuilder, token: Option<&Token>) -> RequestBuilder {
    match token {
        Some(token) => request.header("Authorization", &token.authorization()),
        None => request,
    }
}

/// Maps non-success responses to [`ApiError::Status`], pulling the server's
/// `detail` text out of the body when it sends one.
async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let detail = match response.text().await {
        Ok(body) => serde_json::from_str::<ErrorBody>(&body)
            .map(|parsed| parsed.detail)
            .unwrap_or(body),
        Err(_) => String::new(),
    };
    Err(ApiError::Status { status, detail })
}
