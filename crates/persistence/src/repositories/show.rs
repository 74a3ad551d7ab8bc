//! Show repository for database operations.
//!
//! Read queries join shows with their artist and venue so callers get
//! display-ready rows in one round trip.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::entities::{ShowDetailsEntity, ShowEntity};
use crate::metrics::QueryTimer;

const SHOW_DETAILS_SELECT: &str = r#"
    SELECT
        s.id AS show_id, s.start_time,
        a.id AS artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
        v.id AS venue_id, v.name AS venue_name, v.image_link AS venue_image_link
    FROM shows s
    JOIN artists a ON a.id = s.artist_id
    JOIN venues v ON v.id = s.venue_id
"#;

/// Repository for show-related database operations.
#[derive(Clone)]
pub struct ShowRepository {
    pool: PgPool,
}

impl ShowRepository {
    /// Creates a new ShowRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All shows with artist and venue details, ordered by start time.
    pub async fn find_all_details(&self) -> Result<Vec<ShowDetailsEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_all_show_details");
        let sql = format!("{} ORDER BY s.start_time, s.id", SHOW_DETAILS_SELECT);
        let result = sqlx::query_as::<_, ShowDetailsEntity>(&sql)
            .fetch_all(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Shows hosted by one venue, ordered by start time.
    pub async fn find_details_by_venue(
        &self,
        venue_id: i64,
    ) -> Result<Vec<ShowDetailsEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_show_details_by_venue");
        let sql = format!(
            "{} WHERE s.venue_id = $1 ORDER BY s.start_time, s.id",
            SHOW_DETAILS_SELECT
        );
        let result = sqlx::query_as::<_, ShowDetailsEntity>(&sql)
            .bind(venue_id)
            .fetch_all(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Shows played by one artist, ordered by start time.
    pub async fn find_details_by_artist(
        &self,
        artist_id: i64,
    ) -> Result<Vec<ShowDetailsEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_show_details_by_artist");
        let sql = format!(
            "{} WHERE s.artist_id = $1 ORDER BY s.start_time, s.id",
            SHOW_DETAILS_SELECT
        );
        let result = sqlx::query_as::<_, ShowDetailsEntity>(&sql)
            .bind(artist_id)
            .fetch_all(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Count all shows.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_shows");
        let result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM shows")
            .fetch_one(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Create a show.
    ///
    /// A missing artist or venue fails with a foreign key violation and the
    /// transaction is rolled back.
    pub async fn create(
        &self,
        artist_id: i64,
        venue_id: i64,
        start_time: DateTime<Utc>,
    ) -> Result<ShowEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_show");
        let result = self.insert(artist_id, venue_id, start_time).await;
        timer.record();
        result
    }

    async fn insert(
        &self,
        artist_id: i64,
        venue_id: i64,
        start_time: DateTime<Utc>,
    ) -> Result<ShowEntity, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let show = sqlx::query_as::<_, ShowEntity>(
            r#"
            INSERT INTO shows (artist_id, venue_id, start_time)
            VALUES ($1, $2, $3)
            RETURNING id, artist_id, venue_id, start_time, created_at
            "#,
        )
        .bind(artist_id)
        .bind(venue_id)
        .bind(start_time)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(show)
    }
}
