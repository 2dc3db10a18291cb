//! Domain primitives shared by the Folio crates.
//!
//! Nothing in here performs I/O; persistence lives in `folio-db` and the
//! HTTP surface in `folio-api`.

pub mod error;
pub mod media;
pub mod types;
