//! Landing endpoint.

use axum::{extract::State, Json};
use persistence::repositories::{ArtistRepository, ShowRepository, VenueRepository};
use serde::Serialize;

use crate::app::AppState;
use crate::error::ApiError;

/// Directory totals and the listing entry points.
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub venues: i64,
    pub artists: i64,
    pub shows: i64,
    pub links: IndexLinks,
}

#[derive(Debug, Serialize)]
pub struct IndexLinks {
    pub venues: &'static str,
    pub artists: &'static str,
    pub shows: &'static str,
}

impl Default for IndexLinks {
    fn default() -> Self {
        Self {
            venues: "/venues",
            artists: "/artists",
            shows: "/shows",
        }
    }
}

/// GET /
pub async fn index(State(state): State<AppState>) -> Result<Json<IndexResponse>, ApiError> {
    let venue_repo = VenueRepository::new(state.pool.clone());
    let artist_repo = ArtistRepository::new(state.pool.clone());
    let show_repo = ShowRepository::new(state.pool.clone());

    let (venues, artists, shows) =
        tokio::try_join!(venue_repo.count(), artist_repo.count(), show_repo.count())?;

    Ok(Json(IndexResponse {
        name: "Fyyur",
        version: env!("CARGO_PKG_VERSION"),
        venues,
        artists,
        shows,
        links: IndexLinks::default(),
    }))
}
