//! Artist domain model.

use serde::{Deserialize, Serialize};
use shared::form::{empty_string_as_none, one_or_many};
use shared::validation::FieldError;
use validator::Validate;

use super::listing::SearchHit;
use super::show::VenueAppearance;

/// Represents an artist that plays shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
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
}

/// Submitted artist form, used for both create and edit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ArtistForm {
    #[validate(
        custom(function = "shared::validation::validate_not_blank"),
        length(max = 255, message = "Name must be at most 255 characters")
    )]
    #[serde(default)]
    pub name: String,

    #[validate(
        custom(function = "shared::validation::validate_not_blank"),
        length(max = 120, message = "City must be at most 120 characters")
    )]
    #[serde(default)]
    pub city: String,

    #[validate(custom(function = "shared::validation::validate_state"))]
    #[serde(default)]
    pub state: String,

    #[validate(custom(function = "shared::validation::validate_phone"))]
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub phone: Option<String>,

    #[validate(custom(function = "shared::validation::validate_genres"))]
    #[serde(default, deserialize_with = "one_or_many")]
    pub genres: Vec<String>,

    #[validate(
        url(message = "Facebook link must be a valid URL"),
        length(max = 120, message = "Facebook link must be at most 120 characters")
    )]
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub facebook_link: Option<String>,

    #[validate(
        url(message = "Image link must be a valid URL"),
        length(max = 500, message = "Image link must be at most 500 characters")
    )]
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub image_link: Option<String>,

    #[validate(
        url(message = "Website link must be a valid URL"),
        length(max = 120, message = "Website link must be at most 120 characters")
    )]
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub website_link: Option<String>,

    #[serde(default)]
    pub seeking_venue: bool,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    /// Runs every field rule and returns the failures as a flat list.
    pub fn check(&self) -> Result<(), Vec<FieldError>> {
        self.validate()
            .map_err(|errors| shared::validation::field_errors(&errors))
    }
}

impl From<Artist> for ArtistForm {
    fn from(artist: Artist) -> Self {
        Self {
            name: artist.name,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            genres: artist.genres,
            facebook_link: artist.facebook_link,
            image_link: artist.image_link,
            website_link: artist.website_link,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
        }
    }
}

/// Response for the artist listing.
#[derive(Debug, Clone, Serialize)]
pub struct ArtistList {
    pub artists: Vec<SearchHit>,
    pub total: usize,
}

/// Artist detail page payload.
#[derive(Debug, Clone, Serialize)]
pub struct ArtistDetail {
    pub id: i64,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<VenueAppearance>,
    pub upcoming_shows: Vec<VenueAppearance>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl ArtistDetail {
    pub fn new(
        artist: Artist,
        past_shows: Vec<VenueAppearance>,
        upcoming_shows: Vec<VenueAppearance>,
    ) -> Self {
        Self {
            id: artist.id,
            name: artist.name,
            genres: artist.genres,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            website: artist.website_link,
            facebook_link: artist.facebook_link,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
            image_link: artist.image_link,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}
