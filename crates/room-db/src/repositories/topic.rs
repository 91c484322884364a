//! PostgreSQL implementation of TopicRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use room_core::entities::{NewTopic, Topic};
use room_core::traits::{RepoResult, TopicRepository};
use room_core::value_objects::RecordId;

use crate::models::TopicModel;

use super::error::{map_db_error, topic_not_found};

/// PostgreSQL implementation of TopicRepository
#[derive(Clone)]
pub struct PgTopicRepository {
    pool: PgPool,
}

impl PgTopicRepository {
    /// Create a new PgTopicRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TopicRepository for PgTopicRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Topic>> {
        let result = sqlx::query_as::<_, TopicModel>(
            r"
            SELECT id, name, user_id
            FROM topics
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Topic::from))
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Vec<Topic>> {
        let results = sqlx::query_as::<_, TopicModel>(
            r"
            SELECT id, name, user_id
            FROM topics
            WHERE name = $1
            ORDER BY id
            ",
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Topic::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_by_user(&self, user_id: RecordId) -> RepoResult<Vec<Topic>> {
        let results = sqlx::query_as::<_, TopicModel>(
            r"
            SELECT id, name, user_id
            FROM topics
            WHERE user_id = $1
            ORDER BY id
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Topic::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, topic: &NewTopic) -> RepoResult<Topic> {
        let model = sqlx::query_as::<_, TopicModel>(
            r"
            INSERT INTO topics (name, user_id)
            VALUES ($1, $2)
            RETURNING id, name, user_id
            ",
        )
        .bind(&topic.name)
        .bind(topic.user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Topic::from(model))
    }

    #[instrument(skip(self))]
    async fn update(&self, topic: &Topic) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE topics
            SET name = $2
            WHERE id = $1
            ",
        )
        .bind(topic.id.into_inner())
        .bind(&topic.name)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(topic_not_found(topic.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        // Rooms under the topic and their messages go with it (FK cascade)
        let result = sqlx::query(
            r"
            DELETE FROM topics WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(topic_not_found(id));
        }

        Ok(())
    }
}
