//! Domain services for Fyyur.
//!
//! Services contain business logic that operates on domain models.

pub mod listing;

pub use listing::{group_venues_by_area, partition_shows, ShowSchedule};
