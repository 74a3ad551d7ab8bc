//! Artist repository for database operations.

use domain::models::{ArtistForm, DeleteOutcome, DeletePolicy};
use shared::search::contains_pattern;
use sqlx::PgPool;

use super::{delete_with_shows, ShowParent};
use crate::entities::{ArtistEntity, NameEntity};
use crate::metrics::QueryTimer;

const ARTIST_COLUMNS: &str = "id, name, city, state, phone, genres, facebook_link, image_link, \
     website_link, seeking_venue, seeking_description, created_at, updated_at";

/// Repository for artist-related database operations.
#[derive(Clone)]
pub struct ArtistRepository {
    pool: PgPool,
}

impl ArtistRepository {
    /// Creates a new ArtistRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every artist as an (id, name) pair, ordered by name.
    pub async fn list_names(&self) -> Result<Vec<NameEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_artist_names");
        let result = sqlx::query_as::<_, NameEntity>(
            r#"
            SELECT id, name
            FROM artists
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Case-insensitive substring search on the artist name.
    pub async fn search_by_name(&self, term: &str) -> Result<Vec<NameEntity>, sqlx::Error> {
        let timer = QueryTimer::new("search_artists_by_name");
        let result = sqlx::query_as::<_, NameEntity>(
            r#"
            SELECT id, name
            FROM artists
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

    /// Find an artist by ID.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<ArtistEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_artist_by_id");
        let sql = format!("SELECT {} FROM artists WHERE id = $1", ARTIST_COLUMNS);
        let result = sqlx::query_as::<_, ArtistEntity>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Count all artists.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_artists");
        let result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM artists")
            .fetch_one(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Create a new artist from a validated form.
    pub async fn create(&self, form: &ArtistForm) -> Result<ArtistEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_artist");
        let result = self.insert(form).await;
        timer.record();
        result
    }

    async fn insert(&self, form: &ArtistForm) -> Result<ArtistEntity, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let sql = format!(
            r#"
            INSERT INTO artists (
                name, city, state, phone, genres, facebook_link,
                image_link, website_link, seeking_venue, seeking_description
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {}
            "#,
            ARTIST_COLUMNS
        );
        let artist = sqlx::query_as::<_, ArtistEntity>(&sql)
            .bind(&form.name)
            .bind(&form.city)
            .bind(&form.state)
            .bind(&form.phone)
            .bind(&form.genres)
            .bind(&form.facebook_link)
            .bind(&form.image_link)
            .bind(&form.website_link)
            .bind(form.seeking_venue)
            .bind(&form.seeking_description)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(artist)
    }

    /// Overwrite every mutable field of an existing artist.
    ///
    /// Shows referencing the artist are left untouched. Returns `None`
    /// when no artist has the given ID.
    pub async fn update(
        &self,
        id: i64,
        form: &ArtistForm,
    ) -> Result<Option<ArtistEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_artist");
        let result = self.overwrite(id, form).await;
        timer.record();
        result
    }

    async fn overwrite(
        &self,
        id: i64,
        form: &ArtistForm,
    ) -> Result<Option<ArtistEntity>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_scalar::<_, i64>("SELECT id FROM artists WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if existing.is_none() {
            tx.rollback().await?;
            return Ok(None);
        }

        let sql = format!(
            r#"
            UPDATE artists
            SET
                name = $2,
                city = $3,
                state = $4,
                phone = $5,
                genres = $6,
                facebook_link = $7,
                image_link = $8,
                website_link = $9,
                seeking_venue = $10,
                seeking_description = $11,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            ARTIST_COLUMNS
        );
        let artist = sqlx::query_as::<_, ArtistEntity>(&sql)
            .bind(id)
            .bind(&form.name)
            .bind(&form.city)
            .bind(&form.state)
            .bind(&form.phone)
            .bind(&form.genres)
            .bind(&form.facebook_link)
            .bind(&form.image_link)
            .bind(&form.website_link)
            .bind(form.seeking_venue)
            .bind(&form.seeking_description)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(artist))
    }

    /// Delete an artist and handle its shows according to `policy`.
    pub async fn delete(
        &self,
        id: i64,
        policy: DeletePolicy,
    ) -> Result<DeleteOutcome, sqlx::Error> {
        let timer = QueryTimer::new("delete_artist");
        let result = delete_with_shows(&self.pool, ShowParent::Artist, id, policy).await;
        timer.record();
        result
    }
}
