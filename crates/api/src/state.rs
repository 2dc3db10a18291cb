use std::sync::Arc;

use folio_db::PortfolioStore;

use crate::auth::identity::IdentityProvider;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once in `main` and injected into the router; cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Projects and bookings persistence.
    pub store: Arc<dyn PortfolioStore>,
    /// Resolves admin bearer tokens.
    pub identity: Arc<dyn IdentityProvider>,
    /// Server configuration (CORS policy, media-host credentials).
    pub config: Arc<ServerConfig>,
}
