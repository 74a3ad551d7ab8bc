//! Common validation utilities.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use validator::{ValidationError, ValidationErrors};

/// Genres offered by the venue and artist forms.
pub const GENRE_CHOICES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

/// Two-letter US state codes accepted for venue and artist locations.
pub const STATE_CHOICES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

lazy_static! {
    static ref PHONE_REGEX: Regex =
        Regex::new(r"^\+?[0-9(][0-9 ().\-]{5,18}[0-9]$").expect("phone regex is valid");
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Flattens `validator` output into one entry per failed rule.
///
/// Entries are sorted by field name so the order is stable across runs.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| FieldError {
                field: field.to_string(),
                message: e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field)),
            })
        })
        .collect();
    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

/// Validates that a required text field is not only whitespace.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("This field is required".into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Validates that a state is one of the supported two-letter codes.
pub fn validate_state(state: &str) -> Result<(), ValidationError> {
    if STATE_CHOICES.contains(&state) {
        Ok(())
    } else {
        let mut err = ValidationError::new("state_choice");
        err.message = Some("State must be a two-letter US state code".into());
        Err(err)
    }
}

/// Validates the genre list: at least one entry, each from the fixed choices.
pub fn validate_genres(genres: &[String]) -> Result<(), ValidationError> {
    if genres.is_empty() {
        let mut err = ValidationError::new("genres_required");
        err.message = Some("At least one genre is required".into());
        return Err(err);
    }

    if let Some(unknown) = genres.iter().find(|g| !GENRE_CHOICES.contains(&g.as_str())) {
        let mut err = ValidationError::new("genre_choice");
        err.message = Some(format!("Unknown genre: {}", unknown).into());
        return Err(err);
    }

    Ok(())
}

/// Validates a phone number: digits with common separators, 7 to 20 characters.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_REGEX.is_match(phone) {
        Ok(())
    } else {
        let mut err = ValidationError::new("phone_format");
        err.message = Some("Invalid phone number".into());
        Err(err)
    }
}
