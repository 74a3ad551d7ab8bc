//! HTTP route handlers.

pub mod artists;
pub mod health;
pub mod index;
pub mod shows;
pub mod venues;

use axum::http::Uri;
use domain::models::{DeleteOutcome, DeleteResponse};

use crate::error::ApiError;

/// Fallback for unmapped routes.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}

/// Turns a policy-driven delete outcome into the response for `kind`
/// ("venue" or "artist").
///
/// A missing record is a successful no-op; a delete refused by the
/// restrict policy is a 409.
pub(crate) fn delete_response(
    kind: &str,
    id: i64,
    outcome: DeleteOutcome,
) -> Result<DeleteResponse, ApiError> {
    match outcome {
        DeleteOutcome::Deleted { removed_shows } => Ok(DeleteResponse {
            id,
            deleted: true,
            removed_shows,
            message: format!("The {} has been successfully deleted", kind),
        }),
        DeleteOutcome::Missing => Ok(DeleteResponse {
            id,
            deleted: false,
            removed_shows: 0,
            message: format!("No {} with id {} exists; nothing was deleted", kind, id),
        }),
        DeleteOutcome::Blocked { dependent_shows } => Err(ApiError::Conflict(format!(
            "The {} is referenced by {} show(s) and could not be deleted",
            kind, dependent_shows
        ))),
    }
}
