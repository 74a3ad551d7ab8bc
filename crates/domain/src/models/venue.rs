//! Venue domain model.

use serde::{Deserialize, Serialize};
use shared::form::{empty_string_as_none, one_or_many};
use shared::validation::FieldError;
use validator::Validate;

use super::show::ArtistAppearance;

/// Represents a venue that hosts shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
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
}

/// Submitted venue form, used for both create and edit.
///
/// Every field is written on edit; the form is a full-record overwrite.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct VenueForm {
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

    #[validate(
        custom(function = "shared::validation::validate_not_blank"),
        length(max = 120, message = "Address must be at most 120 characters")
    )]
    #[serde(default)]
    pub address: String,

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
    pub seeking_talent: bool,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub seeking_description: Option<String>,
}

impl VenueForm {
    /// Runs every field rule and returns the failures as a flat list.
    pub fn check(&self) -> Result<(), Vec<FieldError>> {
        self.validate()
            .map_err(|errors| shared::validation::field_errors(&errors))
    }
}

impl From<Venue> for VenueForm {
    fn from(venue: Venue) -> Self {
        Self {
            name: venue.name,
            city: venue.city,
            state: venue.state,
            address: venue.address,
            phone: venue.phone,
            genres: venue.genres,
            facebook_link: venue.facebook_link,
            image_link: venue.image_link,
            website_link: venue.website_link,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
        }
    }
}

/// Venue row on the grouped listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueSummary {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// A venue with its location and show count, before grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueLocation {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub show_count: i64,
}

/// Venues sharing one (city, state) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// Venue detail page payload.
#[derive(Debug, Clone, Serialize)]
pub struct VenueDetail {
    pub id: i64,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<ArtistAppearance>,
    pub upcoming_shows: Vec<ArtistAppearance>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl VenueDetail {
    pub fn new(
        venue: Venue,
        past_shows: Vec<ArtistAppearance>,
        upcoming_shows: Vec<ArtistAppearance>,
    ) -> Self {
        Self {
            id: venue.id,
            name: venue.name,
            genres: venue.genres,
            address: venue.address,
            city: venue.city,
            state: venue.state,
            phone: venue.phone,
            website: venue.website_link,
            facebook_link: venue.facebook_link,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
            image_link: venue.image_link,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}
