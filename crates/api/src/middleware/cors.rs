//! Cross-origin headers for the browser front-end.
//!
//! Every response, including errors and preflights, carries the full set of
//! `Access-Control-*` headers. `OPTIONS` on any path is answered here with an
//! empty 200 and never reaches routing.

use axum::extract::{Request, State};
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN, VARY,
};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type, Authorization";

/// Which value goes into `Access-Control-Allow-Origin`.
#[derive(Debug, PartialEq, Eq)]
pub enum AllowOrigin<'a> {
    /// `*`
    Any,
    /// The request's own origin, found in the allowlist.
    Matched(&'a str),
    /// First configured origin; the request origin was absent or not listed.
    Default(&'a str),
}

/// Resolve the allowed origin for a request.
///
/// An empty allowlist, or one containing `*`, allows any origin.
pub fn allow_origin_for<'a>(allowed: &'a [String], request_origin: Option<&'a str>) -> AllowOrigin<'a> {
    let Some(first) = allowed.first() else {
        return AllowOrigin::Any;
    };
    if allowed.iter().any(|o| o == "*") {
        return AllowOrigin::Any;
    }
    match request_origin {
        Some(origin) if allowed.iter().any(|o| o == origin) => AllowOrigin::Matched(origin),
        _ => AllowOrigin::Default(first),
    }
}

/// Axum middleware: short-circuit preflights, then stamp CORS headers.
///
/// Installed with `axum::middleware::from_fn_with_state` as the outermost layer.
pub async fn apply_cors(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let request_origin = request
        .headers()
        .get(ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        next.run(request).await
    };

    let allow = allow_origin_for(&state.config.cors_origins, request_origin.as_deref());
    stamp_headers(response.headers_mut(), allow);
    response
}

fn stamp_headers(headers: &mut HeaderMap, allow: AllowOrigin<'_>) {
    let origin = match allow {
        AllowOrigin::Any => Some(HeaderValue::from_static("*")),
        AllowOrigin::Matched(origin) | AllowOrigin::Default(origin) => {
            headers.append(VARY, HeaderValue::from_static("Origin"));
            HeaderValue::from_str(origin).ok()
        }
    };

    match origin {
        Some(value) => {
            headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, value);
        }
        None => tracing::warn!("Configured CORS origin is not a valid header value"),
    }
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
}
