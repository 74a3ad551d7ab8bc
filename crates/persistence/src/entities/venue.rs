//! Venue entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the venues table.
#[derive(Debug, Clone, FromRow)]
pub struct VenueEntity {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<VenueEntity> for domain::models::Venue {
    fn from(entity: VenueEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            city: entity.city,
            state: entity.state,
            address: entity.address,
            phone: entity.phone,
            genres: entity.genres,
            facebook_link: entity.facebook_link,
            image_link: entity.image_link,
            website_link: entity.website_link,
            seeking_talent: entity.seeking_talent,
            seeking_description: entity.seeking_description,
        }
    }
}

/// Venue location with its aggregated show count.
#[derive(Debug, Clone, FromRow)]
pub struct VenueLocationEntity {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub show_count: i64,
}

impl From<VenueLocationEntity> for domain::models::VenueLocation {
    fn from(entity: VenueLocationEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            city: entity.city,
            state: entity.state,
            show_count: entity.show_count,
        }
    }
}
