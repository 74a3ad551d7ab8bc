//! Show entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the shows table.
#[derive(Debug, Clone, FromRow)]
pub struct ShowEntity {
    pub id: i64,
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<ShowEntity> for domain::models::Show {
    fn from(entity: ShowEntity) -> Self {
        Self {
            id: entity.id,
            artist_id: entity.artist_id,
            venue_id: entity.venue_id,
            start_time: entity.start_time,
        }
    }
}

/// Show joined with its artist and venue.
#[derive(Debug, Clone, FromRow)]
pub struct ShowDetailsEntity {
    pub show_id: i64,
    pub start_time: DateTime<Utc>,
    // Artist fields
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    // Venue fields
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
}

impl From<ShowDetailsEntity> for domain::models::ShowDetails {
    fn from(entity: ShowDetailsEntity) -> Self {
        Self {
            show_id: entity.show_id,
            start_time: entity.start_time,
            artist_id: entity.artist_id,
            artist_name: entity.artist_name,
            artist_image_link: entity.artist_image_link,
            venue_id: entity.venue_id,
            venue_name: entity.venue_name,
            venue_image_link: entity.venue_image_link,
        }
    }
}
