//! Artist endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use domain::models::{
    Artist, ArtistDetail, ArtistForm, ArtistList, DeleteResponse, FormTemplate, MutationResponse,
    SearchHit, SearchRequest, SearchResults, VenueAppearance,
};
use domain::services::partition_shows;
use persistence::repositories::{ArtistRepository, ShowRepository};
use tracing::info;

use super::delete_response;
use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{AppJson, AppPath};
use crate::middleware::metrics::record_mutation;

fn not_found(artist_id: i64) -> ApiError {
    ApiError::NotFound(format!("Artist {} not found", artist_id))
}

/// Every artist as (id, name), ordered by name.
///
/// GET /artists
pub async fn list_artists(State(state): State<AppState>) -> Result<Json<ArtistList>, ApiError> {
    let artists: Vec<SearchHit> = ArtistRepository::new(state.pool.clone())
        .list_names()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(ArtistList {
        total: artists.len(),
        artists,
    }))
}

/// POST /artists/search
pub async fn search_artists(
    State(state): State<AppState>,
    AppJson(request): AppJson<SearchRequest>,
) -> Result<Json<SearchResults>, ApiError> {
    let hits: Vec<SearchHit> = ArtistRepository::new(state.pool.clone())
        .search_by_name(&request.search_term)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(SearchResults::new(request.search_term, hits)))
}

/// Artist detail with past and upcoming shows.
///
/// GET /artists/:artist_id
pub async fn show_artist(
    State(state): State<AppState>,
    AppPath(artist_id): AppPath<i64>,
) -> Result<Json<ArtistDetail>, ApiError> {
    let artist: Artist = ArtistRepository::new(state.pool.clone())
        .find_by_id(artist_id)
        .await?
        .ok_or_else(|| not_found(artist_id))?
        .into();

    let shows = ShowRepository::new(state.pool.clone())
        .find_details_by_artist(artist_id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    let schedule = partition_shows(shows, Utc::now());

    Ok(Json(ArtistDetail::new(
        artist,
        schedule.past.into_iter().map(VenueAppearance::from).collect(),
        schedule
            .upcoming
            .into_iter()
            .map(VenueAppearance::from)
            .collect(),
    )))
}

/// GET /artists/create
pub async fn create_artist_form() -> Json<FormTemplate<ArtistForm>> {
    Json(FormTemplate::new(ArtistForm::default()))
}

/// Create an artist.
///
/// POST /artists/create
pub async fn create_artist(
    State(state): State<AppState>,
    AppJson(form): AppJson<ArtistForm>,
) -> Result<(StatusCode, Json<MutationResponse<Artist>>), ApiError> {
    let failure = format!("An error occurred. Artist {} could not be listed.", form.name);
    form.check().map_err(|details| ApiError::InvalidForm {
        message: failure.clone(),
        details,
    })?;

    let artist: Artist = ArtistRepository::new(state.pool.clone())
        .create(&form)
        .await
        .map_err(|e| ApiError::from_mutation(e, failure))?
        .into();

    info!(artist_id = artist.id, name = %artist.name, "Artist created");
    record_mutation("artist", "create");

    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            message: format!("Artist {} was successfully listed!", artist.name),
            data: artist,
        }),
    ))
}

/// GET /artists/:artist_id/edit
pub async fn edit_artist_form(
    State(state): State<AppState>,
    AppPath(artist_id): AppPath<i64>,
) -> Result<Json<FormTemplate<ArtistForm>>, ApiError> {
    let artist: Artist = ArtistRepository::new(state.pool.clone())
        .find_by_id(artist_id)
        .await?
        .ok_or_else(|| not_found(artist_id))?
        .into();

    Ok(Json(FormTemplate::new(ArtistForm::from(artist))))
}

/// Overwrite every field of an artist. Its shows are kept.
///
/// POST /artists/:artist_id/edit
pub async fn edit_artist(
    State(state): State<AppState>,
    AppPath(artist_id): AppPath<i64>,
    AppJson(form): AppJson<ArtistForm>,
) -> Result<Json<MutationResponse<Artist>>, ApiError> {
    let failure = format!(
        "An error occurred. Artist {} could not be modified.",
        form.name
    );
    form.check().map_err(|details| ApiError::InvalidForm {
        message: failure.clone(),
        details,
    })?;

    let artist: Artist = ArtistRepository::new(state.pool.clone())
        .update(artist_id, &form)
        .await
        .map_err(|e| ApiError::from_mutation(e, failure))?
        .ok_or_else(|| not_found(artist_id))?
        .into();

    info!(artist_id = artist.id, name = %artist.name, "Artist updated");
    record_mutation("artist", "update");

    Ok(Json(MutationResponse {
        message: format!("Artist {} was successfully modified!", artist.name),
        data: artist,
    }))
}

/// Delete an artist, handling its shows per the configured delete policy.
///
/// DELETE /artists/:artist_id and POST /artists/:artist_id/delete
pub async fn delete_artist(
    State(state): State<AppState>,
    AppPath(artist_id): AppPath<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let policy = state.config.listing.delete_policy;
    let outcome = ArtistRepository::new(state.pool.clone())
        .delete(artist_id, policy)
        .await
        .map_err(|e| ApiError::from_mutation(e, "An error occurred. Artist could not be deleted."))?;

    let response = delete_response("artist", artist_id, outcome)?;
    if response.deleted {
        info!(
            artist_id,
            removed_shows = response.removed_shows,
            policy = policy.as_str(),
            "Artist deleted"
        );
        record_mutation("artist", "delete");
    }

    Ok(Json(response))
}
