//! Match Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Match, MatchRepository, NewMatch};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct MatchRow {
    match_id: i64,
    user_one_id: i64,
    user_two_id: i64,
    matched_at: DateTime<Utc>,
}

impl MatchRow {
    fn into_match(self) -> Match {
        Match {
            id: self.match_id,
            user_one_id: self.user_one_id,
            user_two_id: self.user_two_id,
            matched_at: self.matched_at,
        }
    }
}

/// PostgreSQL match repository implementation.
#[derive(Clone)]
pub struct PgMatchRepository {
    pool: PgPool,
}

impl PgMatchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MatchRepository for PgMatchRepository {
    async fn find_all(&self) -> Result<Vec<Match>, AppError> {
        let rows = sqlx::query_as::<_, MatchRow>(
            r#"
            SELECT match_id, user_one_id, user_two_id, matched_at
            FROM matches
            ORDER BY match_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_match()).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Match>, AppError> {
        let row = sqlx::query_as::<_, MatchRow>(
            r#"
            SELECT match_id, user_one_id, user_two_id, matched_at
            FROM matches
            WHERE match_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_match()))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM matches WHERE match_id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn create(&self, new_match: NewMatch) -> Result<Match, AppError> {
        let row = sqlx::query_as::<_, MatchRow>(
            r#"
            INSERT INTO matches (user_one_id, user_two_id, matched_at)
            VALUES ($1, $2, $3)
            RETURNING match_id, user_one_id, user_two_id, matched_at
            "#,
        )
        .bind(new_match.user_one_id)
        .bind(new_match.user_two_id)
        .bind(new_match.matched_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_match())
    }
}
