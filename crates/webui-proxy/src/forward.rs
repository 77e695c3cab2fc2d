//! Request forwarding: matched prefixes go to the backend, everything else
//! falls through to the UI bundle (or 404 when none is configured).

use crate::config::{ProxyConfig, ProxyRule};
use axum::{
    Router,
    body::Body,
    extract::{Request, State},
    http::{StatusCode, Uri, uri::InvalidUri},
    middleware::{self, Next},
    response::{IntoResponse, Response},
};
use hyper_util::client::legacy::{Client, connect::HttpConnector};
use hyper_util::rt::TokioExecutor;
use std::path::Path;
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct ProxyState {
    config: Arc<ProxyConfig>,
    client: Client<HttpConnector, Body>,
}

/// Builds the dev-server router: the proxy layer intercepts configured
/// prefixes, the fallback serves `dist` (with the SPA index for unknown
/// paths) or a hint when no bundle directory was given.
pub fn router(config: ProxyConfig, dist: Option<&Path>) -> Router {
    let state = ProxyState {
        config: Arc::new(config),
        client: Client::builder(TokioExecutor::new()).build_http(),
    };

    let router = match dist {
        Some(dist) => Router::new().fallback_service(
            ServeDir::new(dist).fallback(ServeFile::new(dist.join("index.html"))),
        ),
        None => Router::new().fallback(no_rule),
    };
    router
        .layer(middleware::from_fn_with_state(state, proxy))
        .layer(TraceLayer::new_for_http())
}

async fn proxy(State(state): State<ProxyState>, request: Request, next: Next) -> Response {
    if state.config.matching_rule(request.uri().path()).is_none() {
        return next.run(request).await;
    }
    forward(&state, request).await
}

async fn no_rule() -> Response {
    (
        StatusCode::NOT_FOUND,
        "no proxy rule matches this path; pass --dist to also serve the UI bundle",
    )
        .into_response()
}

/// Rewrites `path?query` onto the rule's target origin.
fn upstream_uri(rule: &ProxyRule, path_and_query: &str) -> Result<Uri, InvalidUri> {
    format!("{}{path_and_query}", rule.target).parse()
}

async fn forward(state: &ProxyState, mut request: Request) -> Response {
    let path = request.uri().path().to_string();
    let rule = state
        .config
        .matching_rule(&path)
        .expect("caller checked that a rule matches");
    let path_and_query = request
        .uri()
        .path_and_query()
        .map_or(path.as_str(), |path_and_query| path_and_query.as_str());

    let uri = match upstream_uri(rule, path_and_query) {
        Ok(uri) => uri,
        Err(err) => {
            tracing::error!(upstream = %rule.target, %err, "bad upstream target");
            return (StatusCode::INTERNAL_SERVER_ERROR, "bad upstream target").into_response();
        }
    };

    tracing::debug!(%path, %uri, "forwarding");
    *request.uri_mut() = uri;
    match state.client.request(request).await {
        Ok(response) => response.map(Body::new),
        Err(err) => {
            tracing::warn!(%err, upstream = %rule.target, "upstream unreachable");
            (StatusCode::BAD_GATEWAY, "upstream unreachable").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    // Shadows the `axum::extract::Request` alias: the tests need the
    // generic `http::Request` to get at `builder()`.
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use wiremock::matchers::{body_string, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn upstream_uri_keeps_path_and_query() {
        let rule = ProxyRule {
            prefix: "/projects".to_string(),
            target: "http://127.0.0.1:8000".to_string(),
        };
        let uri = upstream_uri(&rule, "/projects/7/drawings?limit=10").unwrap();
        assert_eq!(
            uri.to_string(),
            "http://127.0.0.1:8000/projects/7/drawings?limit=10"
        );
    }

    async fn retargeted_router(upstream: &MockServer) -> Router {
        let mut config = ProxyConfig::default();
        config.retarget(upstream.uri());
        router(config, None)
    }

    #[tokio::test]
    async fn matched_prefix_is_forwarded() {
        let upstream = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"ok"}"#))
            .mount(&upstream)
            .await;

        let response = retargeted_router(&upstream)
            .await
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], br#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn method_body_and_query_ride_along() {
        let upstream = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(query_param("remember", "1"))
            .and(body_string(r#"{"email":"a@b.c"}"#))
            .respond_with(ResponseTemplate::new(401))
            .mount(&upstream)
            .await;

        let response = retargeted_router(&upstream)
            .await
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/auth/login?remember=1")
                    .body(Body::from(r#"{"email":"a@b.c"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn unmatched_path_is_not_forwarded() {
        // No upstream running: a forward attempt would answer 502, not 404.
        let response = router(ProxyConfig::default(), None)
            .oneshot(
                Request::builder()
                    .uri("/image-viewer/7")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unreachable_upstream_answers_bad_gateway() {
        // Grab a free port, then drop the listener so connecting is refused.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let mut config = ProxyConfig::default();
        config.retarget(format!("http://127.0.0.1:{port}"));
        let response = router(config, None)
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
