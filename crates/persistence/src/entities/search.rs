//! Minimal (id, name) projection shared by listings and searches.

use sqlx::FromRow;

/// Database row mapping for name projections.
#[derive(Debug, Clone, FromRow)]
pub struct NameEntity {
    pub id: i64,
    pub name: String,
}

impl From<NameEntity> for domain::models::SearchHit {
    fn from(entity: NameEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}
