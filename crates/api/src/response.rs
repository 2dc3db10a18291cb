//! Small fixed-shape response bodies.
//!
//! Records are returned bare (`Json<Project>`, `Json<Vec<Booking>>`); only
//! acknowledgements without a record use these.

use serde::Serialize;

/// `{ "message": ... }`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// `{ "success": true }`
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}
