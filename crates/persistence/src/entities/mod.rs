//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod artist;
pub mod search;
pub mod show;
pub mod venue;

pub use artist::ArtistEntity;
pub use search::NameEntity;
pub use show::{ShowDetailsEntity, ShowEntity};
pub use venue::{VenueEntity, VenueLocationEntity};
