/*
 * Responsibility
 * - profiles (+ faculty, faculty_achievements) lookups
 * - role lookup used by the role authorizer
 */
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoResult;

/// A profile joined with its optional faculty record.
#[derive(Debug, Clone, FromRow)]
pub struct FacultyProfileRow {
    pub id: Uuid,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    // false when the LEFT JOIN found no faculty row
    pub has_faculty: bool,
    pub department: Option<String>,
    pub designation: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct AchievementRow {
    pub faculty_achievement_id: Uuid,
    pub achievements: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[async_trait]
pub trait ProfileRepo: Send + Sync {
    // Raw role string of the profile. `None` when the profile is absent or has no role.
    async fn find_role(&self, user_id: Uuid) -> RepoResult<Option<String>>;

    async fn find_faculty_profile(&self, user_id: Uuid) -> RepoResult<Option<FacultyProfileRow>>;

    // Newest first.
    async fn list_achievements(&self, faculty_id: Uuid) -> RepoResult<Vec<AchievementRow>>;
}

#[derive(Clone, Debug)]
pub struct PgProfileRepo {
    pool: PgPool,
}

impl PgProfileRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepo for PgProfileRepo {
    async fn find_role(&self, user_id: Uuid) -> RepoResult<Option<String>> {
        let role = sqlx::query_scalar::<_, Option<String>>(
            r#"
            SELECT role
            FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(role.flatten())
    }

    async fn find_faculty_profile(&self, user_id: Uuid) -> RepoResult<Option<FacultyProfileRow>> {
        let row = sqlx::query_as::<_, FacultyProfileRow>(
            r#"
            SELECT
                p.id,
                p.full_name,
                p.email,
                p.role,
                (f.id IS NOT NULL) AS has_faculty,
                f.department,
                f.designation
            FROM profiles p
            LEFT JOIN faculty f ON f.id = p.id
            WHERE p.id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn list_achievements(&self, faculty_id: Uuid) -> RepoResult<Vec<AchievementRow>> {
        let rows = sqlx::query_as::<_, AchievementRow>(
            r#"
            SELECT faculty_achievement_id, achievements, updated_at
            FROM faculty_achievements
            WHERE faculty_id = $1
            ORDER BY updated_at DESC
            "#,
        )
        .bind(faculty_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
