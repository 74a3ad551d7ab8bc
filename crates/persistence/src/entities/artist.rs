//! Artist entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the artists table.
#[derive(Debug, Clone, FromRow)]
pub struct ArtistEntity {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ArtistEntity> for domain::models::Artist {
    fn from(entity: ArtistEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            city: entity.city,
            state: entity.state,
            phone: entity.phone,
            genres: entity.genres,
            facebook_link: entity.facebook_link,
            image_link: entity.image_link,
            website_link: entity.website_link,
            seeking_venue: entity.seeking_venue,
            seeking_description: entity.seeking_description,
        }
    }
}
