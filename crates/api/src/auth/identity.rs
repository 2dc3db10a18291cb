//! Client for the external identity service.
//!
//! Tokens are opaque to this server: validation is delegated to the hosted
//! auth service (`GET {url}/auth/v1/user`), which answers with the user the
//! token belongs to or an error status.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Connection settings for the identity service.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    /// Project base URL, e.g. `https://abc.supabase.co`.
    pub url: String,
    /// Public anon key sent as the `apikey` header.
    pub anon_key: String,
}

/// The user a token resolved to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Errors from the identity service.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Identity service error ({status}): {body}")]
    ApiError { status: u16, body: String },
}

/// Resolves a bearer token to an [`Identity`].
///
/// `Ok(None)` means the service answered but vouched for no user.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn verify(&self, token: &str) -> Result<Option<Identity>, IdentityError>;
}

/// [`IdentityProvider`] backed by a Supabase (GoTrue) auth endpoint.
pub struct SupabaseIdentity {
    client: reqwest::Client,
    user_url: String,
    anon_key: String,
}

impl SupabaseIdentity {
    pub fn new(config: &IdentityConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            user_url: format!("{}/auth/v1/user", config.url.trim_end_matches('/')),
            anon_key: config.anon_key.clone(),
        }
    }
}

#[async_trait]
impl IdentityProvider for SupabaseIdentity {
    async fn verify(&self, token: &str) -> Result<Option<Identity>, IdentityError> {
        let response = self
            .client
            .get(&self.user_url)
            .bearer_auth(token)
            .header("apikey", &self.anon_key)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            tracing::debug!(status = status.as_u16(), "Identity service refused token");
            return Ok(None);
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(IdentityError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<Option<Identity>>().await?)
    }
}
