//! Folio API server library.
//!
//! Exposes the building blocks (config, state, error handling, auth gate,
//! routes) so integration tests and the binary entrypoint share one router.
//!
//! Differences from the site's earlier API: a 500 body carries
//! the generic `"An internal error occurred"` rather than the fault text, and
//! a lookup or update of a missing project or booking answers 404, not 500.

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
