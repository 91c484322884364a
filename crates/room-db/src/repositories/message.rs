//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use room_core::entities::{Message, NewMessage};
use room_core::traits::{MessageQuery, MessageRepository, RepoResult};
use room_core::value_objects::RecordId;

use crate::models::MessageModel;

use super::error::{map_db_error, message_not_found};

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Message>> {
        let result = sqlx::query_as::<_, MessageModel>(
            r"
            SELECT id, user_id, room_id, body, created_at, updated_at
            FROM messages
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Message::from))
    }

    #[instrument(skip(self))]
    async fn find_by_room(
        &self,
        room_id: RecordId,
        query: MessageQuery,
    ) -> RepoResult<Vec<Message>> {
        let limit = query.limit.clamp(1, 100);

        let results = match query.before {
            Some(before) => {
                // Fetch messages older than the cursor (scrolling up)
                sqlx::query_as::<_, MessageModel>(
                    r"
                    SELECT id, user_id, room_id, body, created_at, updated_at
                    FROM messages
                    WHERE room_id = $1 AND id < $2
                    ORDER BY created_at DESC, id DESC
                    LIMIT $3
                    ",
                )
                .bind(room_id.into_inner())
                .bind(before.into_inner())
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                // Fetch latest messages (no cursor)
                sqlx::query_as::<_, MessageModel>(
                    r"
                    SELECT id, user_id, room_id, body, created_at, updated_at
                    FROM messages
                    WHERE room_id = $1
                    ORDER BY created_at DESC, id DESC
                    LIMIT $2
                    ",
                )
                .bind(room_id.into_inner())
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Message::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, message: &NewMessage) -> RepoResult<Message> {
        let model = sqlx::query_as::<_, MessageModel>(
            r"
            INSERT INTO messages (user_id, room_id, body)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, room_id, body, created_at, updated_at
            ",
        )
        .bind(message.user_id.into_inner())
        .bind(message.room_id.into_inner())
        .bind(&message.body)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Message::from(model))
    }

    #[instrument(skip(self))]
    async fn update(&self, message: &Message) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE messages
            SET body = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(message.id.into_inner())
        .bind(&message.body)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(message_not_found(message.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM messages WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(message_not_found(id));
        }

        Ok(())
    }
}
