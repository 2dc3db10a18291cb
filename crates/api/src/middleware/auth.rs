//! Admin authorization gate and its Axum extractor.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use folio_core::error::CoreError;

use crate::auth::identity::{Identity, IdentityProvider};
use crate::error::AppError;
use crate::state::AppState;

/// Outcome of the admin gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCheck {
    pub authenticated: bool,
    pub identity: Option<Identity>,
}

impl AdminCheck {
    fn denied() -> Self {
        Self {
            authenticated: false,
            identity: None,
        }
    }
}

/// Extract the token from an `Authorization` value.
///
/// A leading `Bearer ` is stripped; any other value is used verbatim.
pub fn bearer_token(header: &str) -> &str {
    header.strip_prefix("Bearer ").unwrap_or(header)
}

/// Check the request's `Authorization` header against the identity service.
///
/// No header (or a header that is not visible ASCII) short-circuits without
/// contacting the service. Provider errors are logged and count as denial.
pub async fn verify_admin(headers: &HeaderMap, identity: &dyn IdentityProvider) -> AdminCheck {
    let Some(header) = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) else {
        return AdminCheck::denied();
    };

    match identity.verify(bearer_token(header)).await {
        Ok(Some(user)) => AdminCheck {
            authenticated: true,
            identity: Some(user),
        },
        Ok(None) => AdminCheck::denied(),
        Err(e) => {
            tracing::warn!(error = %e, "Identity service did not accept token");
            AdminCheck::denied()
        }
    }
}

/// Verified admin, extracted from the `Authorization` header.
///
/// Add it as the first parameter of any admin handler; the gate runs before
/// path, query or body extraction, so a rejected request never reaches the
/// store:
///
/// ```ignore
/// async fn my_handler(admin: AdminUser) -> AppResult<Json<()>> {
///     tracing::info!(admin_id = %admin.identity.id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub identity: Identity,
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let check = verify_admin(&parts.headers, state.identity.as_ref()).await;
        match check.identity {
            Some(identity) if check.authenticated => Ok(AdminUser { identity }),
            _ => Err(AppError::Core(CoreError::Unauthorized(
                "Unauthorized".into(),
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use axum::http::HeaderValue;

    use super::*;
    use crate::auth::identity::IdentityError;

    /// Records every token it is asked about and answers from a fixed script.
    struct ScriptedIdentity {
        answer: fn(&str) -> Result<Option<Identity>, IdentityError>,
        seen: Mutex<Vec<String>>,
    }

    impl ScriptedIdentity {
        fn new(answer: fn(&str) -> Result<Option<Identity>, IdentityError>) -> Self {
            Self {
                answer,
                seen: Mutex::new(Vec::new()),
            }
        }

        fn seen(&self) -> Vec<String> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl IdentityProvider for ScriptedIdentity {
        async fn verify(&self, token: &str) -> Result<Option<Identity>, IdentityError> {
            self.seen.lock().unwrap().push(token.to_string());
            (self.answer)(token)
        }
    }

    fn owner() -> Identity {
        Identity {
            id: "owner".to_string(),
            email: Some("owner@example.com".to_string()),
            role: None,
        }
    }

    fn headers(value: &str) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        map
    }

    #[test]
    fn bearer_prefix_is_stripped_once() {
        assert_eq!(bearer_token("Bearer abc"), "abc");
        assert_eq!(bearer_token("Bearer Bearer abc"), "Bearer abc");
        assert_eq!(bearer_token("abc"), "abc");
        assert_eq!(bearer_token("bearer abc"), "bearer abc");
    }

    #[tokio::test]
    async fn missing_header_skips_identity_service() {
        let provider = ScriptedIdentity::new(|_| Ok(Some(owner())));
        let check = verify_admin(&HeaderMap::new(), &provider).await;

        assert!(!check.authenticated);
        assert!(check.identity.is_none());
        assert!(provider.seen().is_empty());
    }

    #[tokio::test]
    async fn valid_token_authenticates() {
        let provider = ScriptedIdentity::new(|_| Ok(Some(owner())));
        let check = verify_admin(&headers("Bearer tok-1"), &provider).await;

        assert!(check.authenticated);
        assert_eq!(check.identity, Some(owner()));
        assert_eq!(provider.seen(), vec!["tok-1"]);
    }

    #[tokio::test]
    async fn raw_header_is_forwarded_without_prefix() {
        let provider = ScriptedIdentity::new(|_| Ok(Some(owner())));
        verify_admin(&headers("tok-2"), &provider).await;
        assert_eq!(provider.seen(), vec!["tok-2"]);
    }

    #[tokio::test]
    async fn null_identity_is_denied() {
        let provider = ScriptedIdentity::new(|_| Ok(None));
        let check = verify_admin(&headers("Bearer tok"), &provider).await;
        assert_eq!(check, AdminCheck::denied());
    }

    #[tokio::test]
    async fn provider_error_is_denied() {
        let provider = ScriptedIdentity::new(|_| {
            Err(IdentityError::ApiError {
                status: 401,
                body: "invalid JWT".to_string(),
            })
        });
        let check = verify_admin(&headers("Bearer tok"), &provider).await;
        assert_eq!(check, AdminCheck::denied());
    }
}
