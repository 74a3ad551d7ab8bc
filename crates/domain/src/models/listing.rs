//! Listing options and shared listing payloads.

use serde::{Deserialize, Serialize};

/// How the per-venue show count on the grouped listing is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShowCountMode {
    /// Count every show the venue has hosted or will host.
    #[default]
    All,
    /// Count only shows starting after the current time.
    Upcoming,
}

impl ShowCountMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShowCountMode::All => "all",
            ShowCountMode::Upcoming => "upcoming",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "all" => Some(ShowCountMode::All),
            "upcoming" => Some(ShowCountMode::Upcoming),
            _ => None,
        }
    }
}

/// What happens to shows when the venue or artist they reference is deleted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeletePolicy {
    /// Delete every dependent show in the same transaction.
    #[default]
    Cascade,
    /// Refuse the deletion while any dependent show exists.
    Restrict,
}

impl DeletePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeletePolicy::Cascade => "cascade",
            DeletePolicy::Restrict => "restrict",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "cascade" => Some(DeletePolicy::Cascade),
            "restrict" => Some(DeletePolicy::Restrict),
            _ => None,
        }
    }
}

/// Result of a policy-driven delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The record existed and was removed together with `removed_shows` shows.
    Deleted { removed_shows: u64 },
    /// No record with the given id existed; nothing changed.
    Missing,
    /// The restrict policy refused the delete because shows still reference it.
    Blocked { dependent_shows: i64 },
}

/// Response body for deletions.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub id: i64,
    pub deleted: bool,
    pub removed_shows: u64,
    pub message: String,
}

/// Request body for name searches.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub search_term: String,
}

/// A single search match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub id: i64,
    pub name: String,
}

/// Search response: number of matches, the matches, and the echoed term.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<SearchHit>,
    pub search_term: String,
}

impl SearchResults {
    pub fn new(search_term: String, data: Vec<SearchHit>) -> Self {
        Self {
            count: data.len(),
            data,
            search_term,
        }
    }
}

/// Response body for successful create and edit submissions.
#[derive(Debug, Clone, Serialize)]
pub struct MutationResponse<T> {
    pub message: String,
    pub data: T,
}

/// Choices offered by the venue and artist forms.
#[derive(Debug, Clone, Serialize)]
pub struct FormChoices {
    pub genres: &'static [&'static str],
    pub states: &'static [&'static str],
}

impl Default for FormChoices {
    fn default() -> Self {
        Self {
            genres: shared::validation::GENRE_CHOICES,
            states: shared::validation::STATE_CHOICES,
        }
    }
}

/// A form description: current field values plus the allowed choices.
#[derive(Debug, Clone, Serialize)]
pub struct FormTemplate<T> {
    pub form: T,
    pub choices: FormChoices,
}

impl<T> FormTemplate<T> {
    pub fn new(form: T) -> Self {
        Self {
            form,
            choices: FormChoices::default(),
        }
    }
}
