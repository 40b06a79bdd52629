//! UserLanguage Repository Implementation

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{NewUserLanguage, UserLanguage, UserLanguageRepository};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct UserLanguageRow {
    language_id: i64,
    user_id: i64,
    language_name: String,
    proficiency_level: Option<String>,
}

impl UserLanguageRow {
    fn into_language(self) -> UserLanguage {
        UserLanguage {
            id: self.language_id,
            user_id: self.user_id,
            language_name: self.language_name,
            proficiency_level: self.proficiency_level,
        }
    }
}

/// PostgreSQL user language repository implementation.
#[derive(Clone)]
pub struct PgUserLanguageRepository {
    pool: PgPool,
}

impl PgUserLanguageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserLanguageRepository for PgUserLanguageRepository {
    async fn find_all(&self) -> Result<Vec<UserLanguage>, AppError> {
        let rows = sqlx::query_as::<_, UserLanguageRow>(
            r#"
            SELECT language_id, user_id, language_name, proficiency_level
            FROM user_languages
            ORDER BY language_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_language()).collect())
    }

    async fn find_by_user(&self, user_id: i64) -> Result<Vec<UserLanguage>, AppError> {
        let rows = sqlx::query_as::<_, UserLanguageRow>(
            r#"
            SELECT language_id, user_id, language_name, proficiency_level
            FROM user_languages
            WHERE user_id = $1
            ORDER BY language_id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_language()).collect())
    }

    async fn create(&self, language: NewUserLanguage) -> Result<UserLanguage, AppError> {
        let row = sqlx::query_as::<_, UserLanguageRow>(
            r#"
            INSERT INTO user_languages (user_id, language_name, proficiency_level)
            VALUES ($1, $2, $3)
            RETURNING language_id, user_id, language_name, proficiency_level
            "#,
        )
        .bind(language.user_id)
        .bind(&language.language_name)
        .bind(&language.proficiency_level)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_language())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM user_languages WHERE language_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
