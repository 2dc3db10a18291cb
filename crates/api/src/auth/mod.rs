//! Authentication primitives.
//!
//! - [`identity`] -- resolves bearer tokens against the external identity service.

pub mod identity;
