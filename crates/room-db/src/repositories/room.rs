//! PostgreSQL implementation of RoomRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use room_core::entities::{NewRoom, Room};
use room_core::error::DomainError;
use room_core::traits::{RepoResult, RoomRepository};
use room_core::value_objects::RecordId;

use crate::mappers::room_with_participants;
use crate::models::RoomModel;

use super::error::{map_db_error, room_not_found};

/// PostgreSQL implementation of RoomRepository
#[derive(Clone)]
pub struct PgRoomRepository {
    pool: PgPool,
}

impl PgRoomRepository {
    /// Create a new PgRoomRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load participant IDs for a room
    async fn load_participant_ids(&self, room_id: i64) -> Result<Vec<i64>, DomainError> {
        let ids = sqlx::query_scalar::<_, i64>(
            r"
            SELECT user_id FROM room_participants WHERE room_id = $1 ORDER BY user_id
            ",
        )
        .bind(room_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(ids)
    }

    /// Attach participants to each room row
    async fn hydrate(&self, models: Vec<RoomModel>) -> RepoResult<Vec<Room>> {
        let mut rooms = Vec::with_capacity(models.len());
        for model in models {
            let ids = self.load_participant_ids(model.id).await?;
            rooms.push(room_with_participants(model, ids));
        }
        Ok(rooms)
    }
}

#[async_trait]
impl RoomRepository for PgRoomRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Room>> {
        let result = sqlx::query_as::<_, RoomModel>(
            r"
            SELECT id, host_id, topic_id, name, description, created_at, updated_at
            FROM rooms
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match result {
            Some(model) => {
                let ids = self.load_participant_ids(model.id).await?;
                Ok(Some(room_with_participants(model, ids)))
            }
            None => Ok(None),
        }
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Room>> {
        let results = sqlx::query_as::<_, RoomModel>(
            r"
            SELECT id, host_id, topic_id, name, description, created_at, updated_at
            FROM rooms
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        self.hydrate(results).await
    }

    #[instrument(skip(self))]
    async fn list_by_topic(&self, topic_id: RecordId) -> RepoResult<Vec<Room>> {
        let results = sqlx::query_as::<_, RoomModel>(
            r"
            SELECT id, host_id, topic_id, name, description, created_at, updated_at
            FROM rooms
            WHERE topic_id = $1
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(topic_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        self.hydrate(results).await
    }

    #[instrument(skip(self))]
    async fn list_by_host(&self, host_id: RecordId) -> RepoResult<Vec<Room>> {
        let results = sqlx::query_as::<_, RoomModel>(
            r"
            SELECT id, host_id, topic_id, name, description, created_at, updated_at
            FROM rooms
            WHERE host_id = $1
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(host_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        self.hydrate(results).await
    }

    #[instrument(skip(self))]
    async fn create(&self, room: &NewRoom) -> RepoResult<Room> {
        let model = sqlx::query_as::<_, RoomModel>(
            r"
            INSERT INTO rooms (host_id, topic_id, name, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, host_id, topic_id, name, description, created_at, updated_at
            ",
        )
        .bind(room.host_id.into_inner())
        .bind(room.topic_id.into_inner())
        .bind(&room.name)
        .bind(room.description.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(room_with_participants(model, Vec::new()))
    }

    #[instrument(skip(self))]
    async fn update(&self, room: &Room) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE rooms
            SET name = $2, description = $3, topic_id = $4, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(room.id.into_inner())
        .bind(&room.name)
        .bind(room.description.as_deref())
        .bind(room.topic_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(room_not_found(room.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        // Messages and participant rows go with it (FK cascade)
        let result = sqlx::query(
            r"
            DELETE FROM rooms WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(room_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn add_participant(&self, room_id: RecordId, user_id: RecordId) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO room_participants (room_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT (room_id, user_id) DO NOTHING
            ",
        )
        .bind(room_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove_participant(&self, room_id: RecordId, user_id: RecordId) -> RepoResult<()> {
        sqlx::query(
            r"
            DELETE FROM room_participants WHERE room_id = $1 AND user_id = $2
            ",
        )
        .bind(room_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn participants(&self, room_id: RecordId) -> RepoResult<Vec<RecordId>> {
        let ids = self.load_participant_ids(room_id.into_inner()).await?;
        Ok(ids.into_iter().map(RecordId::new).collect())
    }
}
