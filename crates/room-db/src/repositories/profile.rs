//! PostgreSQL implementation of ProfileRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use room_core::entities::{NewProfile, Profile};
use room_core::error::DomainError;
use room_core::traits::{ProfileRepository, RepoResult};
use room_core::value_objects::{ImageRef, RecordId};

use crate::models::ProfileModel;

use super::error::{map_db_error, map_unique_violation, profile_not_found};

/// PostgreSQL implementation of ProfileRepository
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    /// Create a new PgProfileRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn unique_violation(constraint: Option<&str>) -> DomainError {
    // Both user_id and email carry UNIQUE constraints; tell them apart by name
    match constraint {
        Some(name) if name.contains("user_id") => DomainError::ProfileAlreadyExists,
        _ => DomainError::EmailAlreadyExists,
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Profile>> {
        let result = sqlx::query_as::<_, ProfileModel>(
            r"
            SELECT id, user_id, image, email
            FROM profiles
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Profile::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: RecordId) -> RepoResult<Option<Profile>> {
        let result = sqlx::query_as::<_, ProfileModel>(
            r"
            SELECT id, user_id, image, email
            FROM profiles
            WHERE user_id = $1
            ",
        )
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Profile::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM profiles WHERE email = $1)
            ",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn create(&self, profile: &NewProfile) -> RepoResult<Profile> {
        let model = sqlx::query_as::<_, ProfileModel>(
            r"
            INSERT INTO profiles (user_id, image, email)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, image, email
            ",
        )
        .bind(profile.user_id.into_inner())
        .bind(profile.image.as_ref().map(ImageRef::as_str))
        .bind(profile.email.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, unique_violation))?;

        Profile::try_from(model)
    }

    #[instrument(skip(self))]
    async fn update(&self, profile: &Profile) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE profiles
            SET image = $2, email = $3
            WHERE id = $1
            ",
        )
        .bind(profile.id.into_inner())
        .bind(profile.image.as_ref().map(ImageRef::as_str))
        .bind(profile.email.as_deref())
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, unique_violation))?;

        if result.rows_affected() == 0 {
            return Err(profile_not_found(profile.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM profiles WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(profile_not_found(id));
        }

        Ok(())
    }
}
