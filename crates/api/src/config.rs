use std::str::FromStr;

use folio_core::media::MediaCredentials;

use crate::auth::identity::IdentityConfig;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Server configuration loaded from environment variables.
///
/// Loaded once in `main` and shared through [`crate::state::AppState`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Upper bound on pooled database connections (default: `10`).
    pub database_max_connections: u32,
    /// Identity service used by the admin gate.
    pub identity: IdentityConfig,
    /// Media-host account; `None` disables upload signatures.
    pub media: Option<MediaCredentials>,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                    | Default     |
    /// |----------------------------|-------------|
    /// | `HOST`                     | `0.0.0.0`   |
    /// | `PORT`                     | `3000`      |
    /// | `CORS_ORIGINS`             | `*`         |
    /// | `DATABASE_URL`             | required    |
    /// | `DATABASE_MAX_CONNECTIONS` | `10`        |
    /// | `SUPABASE_URL`             | required    |
    /// | `SUPABASE_ANON_KEY`        | required    |
    /// | `CLOUDINARY_CLOUD_NAME`    | unset       |
    /// | `CLOUDINARY_API_KEY`       | unset       |
    /// | `CLOUDINARY_API_SECRET`    | unset       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&get, "PORT", 3000)?;

        let cors_origins = parse_origins(&get("CORS_ORIGINS").unwrap_or_else(|| "*".into()));

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let database_max_connections = parse_or(&get, "DATABASE_MAX_CONNECTIONS", 10)?;

        let identity = IdentityConfig {
            url: get("SUPABASE_URL").ok_or(ConfigError::Missing("SUPABASE_URL"))?,
            anon_key: get("SUPABASE_ANON_KEY").ok_or(ConfigError::Missing("SUPABASE_ANON_KEY"))?,
        };

        let media = match (
            get("CLOUDINARY_CLOUD_NAME"),
            get("CLOUDINARY_API_KEY"),
            get("CLOUDINARY_API_SECRET"),
        ) {
            (None, None, None) => None,
            (Some(cloud_name), Some(api_key), Some(api_secret)) => Some(MediaCredentials {
                cloud_name,
                api_key,
                api_secret,
            }),
            (cloud_name, api_key, _) => {
                let missing = if cloud_name.is_none() {
                    "CLOUDINARY_CLOUD_NAME"
                } else if api_key.is_none() {
                    "CLOUDINARY_API_KEY"
                } else {
                    "CLOUDINARY_API_SECRET"
                };
                return Err(ConfigError::Missing(missing));
            }
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            database_url,
            database_max_connections,
            identity,
            media,
        })
    }
}

fn parse_or<T, G>(get: &G, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    match get(name) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
