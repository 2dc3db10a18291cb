//! Request gates applied ahead of the handlers.
//!
//! - [`auth::AdminUser`] -- Requires a bearer token the identity service accepts.
//! - [`cors::apply_cors`] -- Answers preflights and stamps CORS headers on every response.

pub mod auth;
pub mod cors;
