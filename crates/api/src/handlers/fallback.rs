//! Catch-all for requests no route accepts.

use axum::extract::OriginalUri;

use crate::error::AppError;

/// Mount prefix stripped from the route reported back to the client.
const API_PREFIX: &str = "/api";

/// Unknown paths and known paths with the wrong method both land here.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::RouteNotFound(route_name(uri.path()).to_string())
}

/// `/api/nope` reports as `/nope`; a bare `/api` reports as `/`.
fn route_name(path: &str) -> &str {
    match path.strip_prefix(API_PREFIX) {
        Some("") => "/",
        Some(rest) if rest.starts_with('/') => rest,
        _ => path,
    }
}

#[cfg(test)]
mod tests {
    use super::route_name;

    #[test]
    fn api_prefix_is_stripped() {
        assert_eq!(route_name("/api/unknown"), "/unknown");
        assert_eq!(route_name("/api"), "/");
        assert_eq!(route_name("/api/"), "/");
    }

    #[test]
    fn other_paths_are_kept() {
        assert_eq!(route_name("/apiary"), "/apiary");
        assert_eq!(route_name("/favicon.ico"), "/favicon.ico");
    }
}
