//! Profile Repository Implementation

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{NewProfile, Profile, ProfileAttributes, ProfileRepository};
use crate::shared::error::AppError;

/// Internal row type for profile queries.
#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    profile_id: i64,
    user_id: i64,
    bio: Option<String>,
    major: Option<String>,
    year: Option<String>,
    location: Option<String>,
    career_goals: Option<String>,
    availability: Option<String>,
    linkedin: Option<String>,
    github: Option<String>,
    portfolio: Option<String>,
    career: Option<String>,
    career_experience: Option<String>,
    research_publications: Option<String>,
    awards: Option<String>,
}

impl ProfileRow {
    fn into_profile(self) -> Profile {
        Profile {
            id: self.profile_id,
            user_id: self.user_id,
            attributes: ProfileAttributes {
                bio: self.bio,
                major: self.major,
                year: self.year,
                location: self.location,
                career_goals: self.career_goals,
                availability: self.availability,
                linkedin: self.linkedin,
                github: self.github,
                portfolio: self.portfolio,
                career: self.career,
                career_experience: self.career_experience,
                research_publications: self.research_publications,
                awards: self.awards,
            },
        }
    }
}

const PROFILE_COLUMNS: &str = "profile_id, user_id, bio, major, year, location, career_goals, \
     availability, linkedin, github, portfolio, career, career_experience, \
     research_publications, awards";

/// PostgreSQL profile repository implementation.
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    async fn find_all(&self) -> Result<Vec<Profile>, AppError> {
        let query = format!("SELECT {} FROM profiles ORDER BY profile_id", PROFILE_COLUMNS);
        let rows = sqlx::query_as::<_, ProfileRow>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(|r| r.into_profile()).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Profile>, AppError> {
        let query = format!("SELECT {} FROM profiles WHERE profile_id = $1", PROFILE_COLUMNS);
        let row = sqlx::query_as::<_, ProfileRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| r.into_profile()))
    }

    async fn create(&self, profile: NewProfile) -> Result<Profile, AppError> {
        let query = format!(
            r#"
            INSERT INTO profiles (user_id, bio, major, year, location, career_goals,
                                  availability, linkedin, github, portfolio, career,
                                  career_experience, research_publications, awards)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING {}
            "#,
            PROFILE_COLUMNS
        );
        let a = &profile.attributes;
        let row = sqlx::query_as::<_, ProfileRow>(&query)
            .bind(profile.user_id)
            .bind(&a.bio)
            .bind(&a.major)
            .bind(&a.year)
            .bind(&a.location)
            .bind(&a.career_goals)
            .bind(&a.availability)
            .bind(&a.linkedin)
            .bind(&a.github)
            .bind(&a.portfolio)
            .bind(&a.career)
            .bind(&a.career_experience)
            .bind(&a.research_publications)
            .bind(&a.awards)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.into_profile())
    }

    async fn update(&self, profile: &Profile) -> Result<Profile, AppError> {
        let query = format!(
            r#"
            UPDATE profiles
            SET bio = $2, major = $3, year = $4, location = $5, career_goals = $6,
                availability = $7, linkedin = $8, github = $9, portfolio = $10,
                career = $11, career_experience = $12, research_publications = $13,
                awards = $14
            WHERE profile_id = $1
            RETURNING {}
            "#,
            PROFILE_COLUMNS
        );
        let a = &profile.attributes;
        let row = sqlx::query_as::<_, ProfileRow>(&query)
            .bind(profile.id)
            .bind(&a.bio)
            .bind(&a.major)
            .bind(&a.year)
            .bind(&a.location)
            .bind(&a.career_goals)
            .bind(&a.availability)
            .bind(&a.linkedin)
            .bind(&a.github)
            .bind(&a.portfolio)
            .bind(&a.career)
            .bind(&a.career_experience)
            .bind(&a.research_publications)
            .bind(&a.awards)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| r.into_profile())
            .ok_or_else(|| AppError::NotFound(format!("Profile {} not found", profile.id)))
    }
}
