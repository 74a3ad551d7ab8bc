//! Show endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use domain::models::{
    FormTemplate, MutationResponse, NewShowForm, Show, ShowDetails, ShowForm, ShowList,
    ShowListing,
};
use persistence::repositories::ShowRepository;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AppJson;
use crate::middleware::metrics::record_mutation;

const SHOW_FAILURE: &str = "An error occurred. Show could not be listed.";

/// Every show with its venue and artist, ordered by start time.
///
/// GET /shows
pub async fn list_shows(State(state): State<AppState>) -> Result<Json<ShowList>, ApiError> {
    let shows: Vec<ShowListing> = ShowRepository::new(state.pool.clone())
        .find_all_details()
        .await?
        .into_iter()
        .map(|entity| ShowListing::from(ShowDetails::from(entity)))
        .collect();

    Ok(Json(ShowList {
        total: shows.len(),
        shows,
    }))
}

/// Empty show form; the start time defaults to now.
///
/// GET /shows/create
pub async fn create_show_form() -> Json<FormTemplate<NewShowForm>> {
    Json(FormTemplate::new(NewShowForm::starting_at(Utc::now())))
}

/// Book an artist at a venue.
///
/// POST /shows/create
///
/// An unknown artist or venue is a 400 carrying the generic failure
/// message; nothing is written.
pub async fn create_show(
    State(state): State<AppState>,
    AppJson(form): AppJson<ShowForm>,
) -> Result<(StatusCode, Json<MutationResponse<Show>>), ApiError> {
    form.check().map_err(|details| ApiError::InvalidForm {
        message: SHOW_FAILURE.to_string(),
        details,
    })?;

    let show: Show = ShowRepository::new(state.pool.clone())
        .create(form.artist_id, form.venue_id, form.start_time)
        .await
        .map_err(|e| ApiError::from_mutation(e, SHOW_FAILURE))?
        .into();

    info!(
        show_id = show.id,
        artist_id = show.artist_id,
        venue_id = show.venue_id,
        start_time = %show.start_time,
        "Show created"
    );
    record_mutation("show", "create");

    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            message: "Show was successfully listed!".to_string(),
            data: show,
        }),
    ))
}
