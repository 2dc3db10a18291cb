pub mod booking;
pub mod fallback;
pub mod media;
pub mod project;
pub mod root;
