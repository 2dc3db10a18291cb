pub mod booking;
pub mod project;
