//! Shared harness for the HTTP integration tests.
//!
//! Requests go through the production router (`build_app_router`) with the
//! in-process store and a scripted identity service, so no database or
//! network is needed.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use folio_api::auth::identity::{Identity, IdentityConfig, IdentityError, IdentityProvider};
use folio_api::config::ServerConfig;
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_core::media::MediaCredentials;
use folio_db::MemoryStore;

/// The only token [`StubIdentity`] accepts.
pub const ADMIN_TOKEN: &str = "valid-admin-token";

/// Identity service double: accepts [`ADMIN_TOKEN`], rejects everything else,
/// and counts how often it was asked.
#[derive(Default)]
pub struct StubIdentity {
    calls: AtomicUsize,
}

impl StubIdentity {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProvider for StubIdentity {
    async fn verify(&self, token: &str) -> Result<Option<Identity>, IdentityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if token == ADMIN_TOKEN {
            Ok(Some(Identity {
                id: "admin-user".to_string(),
                email: Some("owner@example.com".to_string()),
                role: Some("authenticated".to_string()),
            }))
        } else {
            Err(IdentityError::ApiError {
                status: 401,
                body: r#"{"msg":"invalid JWT"}"#.to_string(),
            })
        }
    }
}

/// Build a test `ServerConfig` with safe defaults.
///
/// CORS allows any origin; media credentials are set.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        database_url: "postgres://unused".to_string(),
        database_max_connections: 1,
        identity: IdentityConfig {
            url: "http://identity.invalid".to_string(),
            anon_key: "anon".to_string(),
        },
        media: Some(MediaCredentials {
            cloud_name: "demo-cloud".to_string(),
            api_key: "123456".to_string(),
            api_secret: "shh".to_string(),
        }),
    }
}

/// Router plus handles on its collaborators.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    pub identity: Arc<StubIdentity>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    pub fn with_config(config: ServerConfig) -> Self {
        let store = Arc::new(MemoryStore::new());
        let identity = Arc::new(StubIdentity::default());
        let state = AppState {
            store: store.clone(),
            identity: identity.clone(),
            config: Arc::new(config),
        };
        Self {
            router: build_app_router(state),
            store,
            identity,
        }
    }

    /// Send a request through a clone of the router.
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> Response<Body> {
        self.send(request(Method::GET, uri, token, None)).await
    }

    pub async fn post_json(
        &self,
        uri: &str,
        token: Option<&str>,
        body: serde_json::Value,
    ) -> Response<Body> {
        self.send(request(Method::POST, uri, token, Some(body))).await
    }

    pub async fn put_json(
        &self,
        uri: &str,
        token: Option<&str>,
        body: serde_json::Value,
    ) -> Response<Body> {
        self.send(request(Method::PUT, uri, token, Some(body))).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> Response<Body> {
        self.send(request(Method::DELETE, uri, token, None)).await
    }
}

/// Build a request with an optional bearer token and JSON body.
pub fn request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}
