pub mod booking_repo;
pub mod project_repo;

pub use booking_repo::BookingRepo;
pub use project_repo::ProjectRepo;
