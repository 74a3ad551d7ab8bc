//! Repository implementations for database operations.

pub mod artist;
pub mod show;
pub mod venue;

pub use artist::ArtistRepository;
pub use show::ShowRepository;
pub use venue::VenueRepository;

use domain::models::{DeleteOutcome, DeletePolicy};
use sqlx::PgPool;

/// Tables whose rows are referenced by shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShowParent {
    Venue,
    Artist,
}

impl ShowParent {
    fn table(self) -> &'static str {
        match self {
            ShowParent::Venue => "venues",
            ShowParent::Artist => "artists",
        }
    }

    /// Locks the parent row so a concurrent show insert waits for the delete.
    fn lock_sql(self) -> String {
        format!("SELECT id FROM {} WHERE id = $1 FOR UPDATE", self.table())
    }

    fn show_column(self) -> &'static str {
        match self {
            ShowParent::Venue => "venue_id",
            ShowParent::Artist => "artist_id",
        }
    }
}

/// Deletes a venue or artist together with its shows, according to `policy`.
///
/// Runs in one transaction holding a row lock on the parent, so shows
/// booked concurrently are either counted or refused. A missing row is
/// reported as [`DeleteOutcome::Missing`] and a restrict refusal as
/// [`DeleteOutcome::Blocked`]; both roll back without changes.
pub(crate) async fn delete_with_shows(
    pool: &PgPool,
    parent: ShowParent,
    id: i64,
    policy: DeletePolicy,
) -> Result<DeleteOutcome, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let lock_sql = parent.lock_sql();
    let existing = sqlx::query_scalar::<_, i64>(&lock_sql)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

    if existing.is_none() {
        tx.rollback().await?;
        return Ok(DeleteOutcome::Missing);
    }

    let count_sql = format!(
        "SELECT COUNT(*) FROM shows WHERE {} = $1",
        parent.show_column()
    );
    let dependent_shows = sqlx::query_scalar::<_, i64>(&count_sql)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

    let removed_shows = match policy {
        DeletePolicy::Restrict if dependent_shows > 0 => {
            tx.rollback().await?;
            return Ok(DeleteOutcome::Blocked { dependent_shows });
        }
        DeletePolicy::Restrict => 0,
        DeletePolicy::Cascade => {
            let delete_shows_sql =
                format!("DELETE FROM shows WHERE {} = $1", parent.show_column());
            sqlx::query(&delete_shows_sql)
                .bind(id)
                .execute(&mut *tx)
                .await?
                .rows_affected()
        }
    };

    let delete_sql = format!("DELETE FROM {} WHERE id = $1", parent.table());
    sqlx::query(&delete_sql).bind(id).execute(&mut *tx).await?;

    tx.commit().await?;
    Ok(DeleteOutcome::Deleted { removed_shows })
}
