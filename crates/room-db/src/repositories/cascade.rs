//! Explicit user-cascade purge
//!
//! Users live in an external identity system, so there is no users table for
//! foreign keys to hang off. When an account is deleted, everything the user
//! owns is removed here in one transaction. Cascade among owned records
//! (topic → rooms, room → messages/participants) stays declarative in the
//! schema; this covers the user-to-record edge only.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, instrument};

use room_core::traits::{CascadeRepository, RepoResult, UserPurge};
use room_core::value_objects::{ImageRef, RecordId};

use super::error::map_db_error;

/// PostgreSQL implementation of CascadeRepository
#[derive(Clone)]
pub struct PgCascadeRepository {
    pool: PgPool,
}

impl PgCascadeRepository {
    /// Create a new PgCascadeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CascadeRepository for PgCascadeRepository {
    #[instrument(skip(self))]
    async fn purge_user(&self, user_id: RecordId) -> RepoResult<UserPurge> {
        let uid = user_id.into_inner();
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Messages the user authored in rooms that survive the purge
        let messages_deleted = sqlx::query(
            r"
            DELETE FROM messages WHERE user_id = $1
            ",
        )
        .bind(uid)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?
        .rows_affected();

        // Membership rows in rooms the user merely joined
        sqlx::query(
            r"
            DELETE FROM room_participants WHERE user_id = $1
            ",
        )
        .bind(uid)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        // Rooms the user hosts, plus rooms under the user's topics. Their
        // messages and participant rows go via FK cascade.
        let rooms_deleted = sqlx::query(
            r"
            DELETE FROM rooms
            WHERE host_id = $1
               OR topic_id IN (SELECT id FROM topics WHERE user_id = $1)
            ",
        )
        .bind(uid)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?
        .rows_affected();

        let topics_deleted = sqlx::query(
            r"
            DELETE FROM topics WHERE user_id = $1
            ",
        )
        .bind(uid)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?
        .rows_affected();

        // Grab the avatar reference before the row goes; the caller owns
        // deleting the file, the database layer never touches the filesystem.
        let image = sqlx::query_scalar::<_, Option<String>>(
            r"
            SELECT image FROM profiles WHERE user_id = $1
            ",
        )
        .bind(uid)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .flatten();

        let profile_deleted = sqlx::query(
            r"
            DELETE FROM profiles WHERE user_id = $1
            ",
        )
        .bind(uid)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?
        .rows_affected()
            > 0;

        tx.commit().await.map_err(map_db_error)?;

        let profile_image = image.map(ImageRef::new).transpose()?;

        info!(
            user_id = %user_id,
            messages = messages_deleted,
            rooms = rooms_deleted,
            topics = topics_deleted,
            profile = profile_deleted,
            "Purged user records"
        );

        Ok(UserPurge {
            profile_deleted,
            profile_image,
            topics_deleted,
            rooms_deleted,
            messages_deleted,
        })
    }
}
