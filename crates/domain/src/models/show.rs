//! Show domain model.
//!
//! A show links one artist to one venue at one point in time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::form::form_datetime;
use shared::validation::FieldError;
use validator::Validate;

/// Layout used when a start time is displayed.
pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats a start time for display records.
pub fn format_start_time(start_time: &DateTime<Utc>) -> String {
    start_time.format(START_TIME_FORMAT).to_string()
}

/// Represents a scheduled show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    pub id: i64,
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: DateTime<Utc>,
}

/// A show joined with the artist and venue it references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowDetails {
    pub show_id: i64,
    pub start_time: DateTime<Utc>,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
}

/// Submitted show form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ShowForm {
    #[validate(range(min = 1, message = "Artist ID must be a positive number"))]
    pub artist_id: i64,

    #[validate(range(min = 1, message = "Venue ID must be a positive number"))]
    pub venue_id: i64,

    #[serde(deserialize_with = "form_datetime")]
    pub start_time: DateTime<Utc>,
}

impl ShowForm {
    /// Runs every field rule and returns the failures as a flat list.
    pub fn check(&self) -> Result<(), Vec<FieldError>> {
        self.validate()
            .map_err(|errors| shared::validation::field_errors(&errors))
    }
}

/// Empty show form handed out before submission.
#[derive(Debug, Clone, Serialize)]
pub struct NewShowForm {
    pub artist_id: Option<i64>,
    pub venue_id: Option<i64>,
    pub start_time: String,
}

impl NewShowForm {
    /// Builds the empty form with the start time defaulting to `now`.
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            artist_id: None,
            venue_id: None,
            start_time: format_start_time(&now),
        }
    }
}

/// A show as listed on a venue page: the performing artist and the time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistAppearance {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

impl From<ShowDetails> for ArtistAppearance {
    fn from(show: ShowDetails) -> Self {
        Self {
            artist_id: show.artist_id,
            artist_name: show.artist_name,
            artist_image_link: show.artist_image_link,
            start_time: format_start_time(&show.start_time),
        }
    }
}

/// A show as listed on an artist page: the hosting venue and the time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueAppearance {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: String,
}

impl From<ShowDetails> for VenueAppearance {
    fn from(show: ShowDetails) -> Self {
        Self {
            venue_id: show.venue_id,
            venue_name: show.venue_name,
            venue_image_link: show.venue_image_link,
            start_time: format_start_time(&show.start_time),
        }
    }
}

/// A row of the full shows listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowListing {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

impl From<ShowDetails> for ShowListing {
    fn from(show: ShowDetails) -> Self {
        Self {
            venue_id: show.venue_id,
            venue_name: show.venue_name,
            artist_id: show.artist_id,
            artist_name: show.artist_name,
            artist_image_link: show.artist_image_link,
            start_time: format_start_time(&show.start_time),
        }
    }
}

/// Response for the shows listing.
#[derive(Debug, Clone, Serialize)]
pub struct ShowList {
    pub shows: Vec<ShowListing>,
    pub total: usize,
}
