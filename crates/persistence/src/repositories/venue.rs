//! Venue repository for database operations.

use chrono::{DateTime, Utc};
use domain::models::{DeleteOutcome, DeletePolicy, ShowCountMode, VenueForm};
use shared::search::contains_pattern;
use sqlx::PgPool;

use super::{delete_with_shows, ShowParent};
use crate::entities::{NameEntity, VenueEntity, VenueLocationEntity};
use crate::metrics::QueryTimer;

const VENUE_COLUMNS: &str = "id, name, city, state, address, phone, genres, facebook_link, \
     image_link, website_link, seeking_talent, seeking_description, created_at, updated_at";

/// Repository for venue-related database operations.
#[derive(Clone)]
pub struct VenueRepository {
    pool: PgPool,
}

impl VenueRepository {
    /// Creates a new VenueRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every venue with its location and show count.
    ///
    /// Rows are ordered by state, city and name. With
    /// [`ShowCountMode::Upcoming`] only shows starting after `now` are counted.
    pub async fn list_locations(
        &self,
        mode: ShowCountMode,
        now: DateTime<Utc>,
    ) -> Result<Vec<VenueLocationEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_venue_locations");
        let result = sqlx::query_as::<_, VenueLocationEntity>(
            r#"
            SELECT
                v.id, v.name, v.city, v.state,
                COUNT(s.id) FILTER (WHERE $1 = false OR s.start_time > $2) AS show_count
            FROM venues v
            LEFT JOIN shows s ON s.venue_id = v.id
            GROUP BY v.id
            ORDER BY v.state, v.city, v.name
            "#,
        )
        .bind(mode == ShowCountMode::Upcoming)
        .bind(now)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Case-insensitive substring search on the venue name.
    pub async fn search_by_name(&self, term: &str) -> Result<Vec<NameEntity>, sqlx::Error> {
        let timer = QueryTimer::new("search_venues_by_name");
        let result = sqlx::query_as::<_, NameEntity>(
            r#"
            SELECT id, name
            FROM venues
            WHERE name ILIKE $1 ESCAPE '\'
            ORDER BY name
            "#,
        )
        .bind(contains_pattern(term))
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a venue by ID.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<VenueEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_venue_by_id");
        let sql = format!("SELECT {} FROM venues WHERE id = $1", VENUE_COLUMNS);
        let result = sqlx::query_as::<_, VenueEntity>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Count all venues.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_venues");
        let result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM venues")
            .fetch_one(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Create a new venue from a validated form.
    pub async fn create(&self, form: &VenueForm) -> Result<VenueEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_venue");
        let result = self.insert(form).await;
        timer.record();
        result
    }

    async fn insert(&self, form: &VenueForm) -> Result<VenueEntity, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let sql = format!(
            r#"
            INSERT INTO venues (
                name, city, state, address, phone, genres, facebook_link,
                image_link, website_link, seeking_talent, seeking_description
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {}
            "#,
            VENUE_COLUMNS
        );
        let venue = sqlx::query_as::<_, VenueEntity>(&sql)
            .bind(&form.name)
            .bind(&form.city)
            .bind(&form.state)
            .bind(&form.address)
            .bind(&form.phone)
            .bind(&form.genres)
            .bind(&form.facebook_link)
            .bind(&form.image_link)
            .bind(&form.website_link)
            .bind(form.seeking_talent)
            .bind(&form.seeking_description)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(venue)
    }

    /// Overwrite every mutable field of an existing venue.
    ///
    /// Returns `None` when no venue has the given ID; nothing is written then.
    pub async fn update(
        &self,
        id: i64,
        form: &VenueForm,
    ) -> Result<Option<VenueEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_venue");
        let result = self.overwrite(id, form).await;
        timer.record();
        result
    }

    async fn overwrite(
        &self,
        id: i64,
        form: &VenueForm,
    ) -> Result<Option<VenueEntity>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_scalar::<_, i64>("SELECT id FROM venues WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if existing.is_none() {
            tx.rollback().await?;
            return Ok(None);
        }

        let sql = format!(
            r#"
            UPDATE venues
            SET
                name = $2,
                city = $3,
                state = $4,
                address = $5,
                phone = $6,
                genres = $7,
                facebook_link = $8,
                image_link = $9,
                website_link = $10,
                seeking_talent = $11,
                seeking_description = $12,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            VENUE_COLUMNS
        );
        let venue = sqlx::query_as::<_, VenueEntity>(&sql)
            .bind(id)
            .bind(&form.name)
            .bind(&form.city)
            .bind(&form.state)
            .bind(&form.address)
            .bind(&form.phone)
            .bind(&form.genres)
            .bind(&form.facebook_link)
            .bind(&form.image_link)
            .bind(&form.website_link)
            .bind(form.seeking_talent)
            .bind(&form.seeking_description)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(venue))
    }

    /// Delete a venue and handle its shows according to `policy`.
    pub async fn delete(
        &self,
        id: i64,
        policy: DeletePolicy,
    ) -> Result<DeleteOutcome, sqlx::Error> {
        let timer = QueryTimer::new("delete_venue");
        let result = delete_with_shows(&self.pool, ShowParent::Venue, id, policy).await;
        timer.record();
        result
    }
}
