//! Venue endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use domain::models::{
    ArtistAppearance, DeleteResponse, FormTemplate, MutationResponse, SearchHit, SearchRequest,
    SearchResults, ShowCountMode, Venue, VenueArea, VenueDetail, VenueForm, VenueLocation,
};
use domain::services::partition_shows;
use persistence::repositories::{ShowRepository, VenueRepository};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::delete_response;
use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{AppJson, AppPath, AppQuery};
use crate::middleware::metrics::record_mutation;

/// Query parameters for the venue listing.
#[derive(Debug, Default, Deserialize)]
pub struct VenueListQuery {
    /// Overrides the configured show-count mode for this request.
    pub count: Option<ShowCountMode>,
}

/// Grouped venue listing.
#[derive(Debug, Serialize)]
pub struct VenueListResponse {
    pub areas: Vec<VenueArea>,
    pub show_count_mode: ShowCountMode,
}

fn not_found(venue_id: i64) -> ApiError {
    ApiError::NotFound(format!("Venue {} not found", venue_id))
}

/// List venues grouped by (city, state).
///
/// GET /venues?count=all|upcoming
pub async fn list_venues(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<VenueListQuery>,
) -> Result<Json<VenueListResponse>, ApiError> {
    let mode = query.count.unwrap_or(state.config.listing.venue_show_count);

    let repo = VenueRepository::new(state.pool.clone());
    let locations: Vec<VenueLocation> = repo
        .list_locations(mode, Utc::now())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(VenueListResponse {
        areas: domain::services::group_venues_by_area(locations),
        show_count_mode: mode,
    }))
}

/// Case-insensitive substring search on venue names.
///
/// POST /venues/search
pub async fn search_venues(
    State(state): State<AppState>,
    AppJson(request): AppJson<SearchRequest>,
) -> Result<Json<SearchResults>, ApiError> {
    let repo = VenueRepository::new(state.pool.clone());
    let hits: Vec<SearchHit> = repo
        .search_by_name(&request.search_term)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(SearchResults::new(request.search_term, hits)))
}

/// Venue detail with past and upcoming shows.
///
/// GET /venues/:venue_id
pub async fn show_venue(
    State(state): State<AppState>,
    AppPath(venue_id): AppPath<i64>,
) -> Result<Json<VenueDetail>, ApiError> {
    let venue: Venue = VenueRepository::new(state.pool.clone())
        .find_by_id(venue_id)
        .await?
        .ok_or_else(|| not_found(venue_id))?
        .into();

    let shows = ShowRepository::new(state.pool.clone())
        .find_details_by_venue(venue_id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    let schedule = partition_shows(shows, Utc::now());

    Ok(Json(VenueDetail::new(
        venue,
        schedule.past.into_iter().map(ArtistAppearance::from).collect(),
        schedule
            .upcoming
            .into_iter()
            .map(ArtistAppearance::from)
            .collect(),
    )))
}

/// Empty venue form.
///
/// GET /venues/create
pub async fn create_venue_form() -> Json<FormTemplate<VenueForm>> {
    Json(FormTemplate::new(VenueForm::default()))
}

/// Create a venue.
///
/// POST /venues/create
pub async fn create_venue(
    State(state): State<AppState>,
    AppJson(form): AppJson<VenueForm>,
) -> Result<(StatusCode, Json<MutationResponse<Venue>>), ApiError> {
    let failure = format!("An error occurred. Venue {} could not be listed.", form.name);
    form.check().map_err(|details| ApiError::InvalidForm {
        message: failure.clone(),
        details,
    })?;

    let venue: Venue = VenueRepository::new(state.pool.clone())
        .create(&form)
        .await
        .map_err(|e| ApiError::from_mutation(e, failure))?
        .into();

    info!(venue_id = venue.id, name = %venue.name, "Venue created");
    record_mutation("venue", "create");

    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            message: format!("Venue {} was successfully listed!", venue.name),
            data: venue,
        }),
    ))
}

/// Venue form pre-filled with the stored values.
///
/// GET /venues/:venue_id/edit
pub async fn edit_venue_form(
    State(state): State<AppState>,
    AppPath(venue_id): AppPath<i64>,
) -> Result<Json<FormTemplate<VenueForm>>, ApiError> {
    let venue: Venue = VenueRepository::new(state.pool.clone())
        .find_by_id(venue_id)
        .await?
        .ok_or_else(|| not_found(venue_id))?
        .into();

    Ok(Json(FormTemplate::new(VenueForm::from(venue))))
}

/// Overwrite every field of a venue.
///
/// POST /venues/:venue_id/edit
pub async fn edit_venue(
    State(state): State<AppState>,
    AppPath(venue_id): AppPath<i64>,
    AppJson(form): AppJson<VenueForm>,
) -> Result<Json<MutationResponse<Venue>>, ApiError> {
    let failure = format!(
        "An error occurred. Venue {} could not be modified.",
        form.name
    );
    form.check().map_err(|details| ApiError::InvalidForm {
        message: failure.clone(),
        details,
    })?;

    let venue: Venue = VenueRepository::new(state.pool.clone())
        .update(venue_id, &form)
        .await
        .map_err(|e| ApiError::from_mutation(e, failure))?
        .ok_or_else(|| not_found(venue_id))?
        .into();

    info!(venue_id = venue.id, name = %venue.name, "Venue updated");
    record_mutation("venue", "update");

    Ok(Json(MutationResponse {
        message: format!("Venue {} was successfully modified!", venue.name),
        data: venue,
    }))
}

/// Delete a venue, handling its shows per the configured delete policy.
///
/// POST /venues/:venue_id and DELETE /venues/:venue_id
pub async fn delete_venue(
    State(state): State<AppState>,
    AppPath(venue_id): AppPath<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let policy = state.config.listing.delete_policy;
    let outcome = VenueRepository::new(state.pool.clone())
        .delete(venue_id, policy)
        .await
        .map_err(|e| ApiError::from_mutation(e, "An error occurred. Venue could not be deleted."))?;

    let response = delete_response("venue", venue_id, outcome)?;
    if response.deleted {
        info!(
            venue_id,
            removed_shows = response.removed_shows,
            policy = policy.as_str(),
            "Venue deleted"
        );
        record_mutation("venue", "delete");
    }

    Ok(Json(response))
}
