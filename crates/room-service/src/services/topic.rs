//! Topic service

use tracing::{info, instrument};
use validator::Validate;

use room_core::entities::NewTopic;
use room_core::value_objects::RecordId;

use crate::dto::{CreateTopicRequest, TopicResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Topic service
pub struct TopicService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TopicService<'a> {
    /// Create a new TopicService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get topic by ID
    #[instrument(skip(self))]
    pub async fn get_topic(&self, topic_id: RecordId) -> ServiceResult<TopicResponse> {
        let topic = self
            .ctx
            .topic_repo()
            .find_by_id(topic_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Topic", topic_id.to_string()))?;

        Ok(TopicResponse::from(&topic))
    }

    /// Find topics by exact name. Duplicates are permitted, so this returns
    /// every match.
    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> ServiceResult<Vec<TopicResponse>> {
        let topics = self.ctx.topic_repo().find_by_name(name).await?;
        Ok(topics.iter().map(TopicResponse::from).collect())
    }

    /// List topics created by a user
    #[instrument(skip(self))]
    pub async fn list_by_user(&self, user_id: RecordId) -> ServiceResult<Vec<TopicResponse>> {
        let topics = self.ctx.topic_repo().list_by_user(user_id).await?;
        Ok(topics.iter().map(TopicResponse::from).collect())
    }

    /// Create a topic
    #[instrument(skip(self, request))]
    pub async fn create_topic(
        &self,
        user_id: RecordId,
        request: CreateTopicRequest,
    ) -> ServiceResult<TopicResponse> {
        request.validate()?;

        let topic = self
            .ctx
            .topic_repo()
            .create(&NewTopic {
                name: request.name,
                user_id,
            })
            .await?;

        info!(topic_id = %topic.id, user_id = %user_id, "Topic created");
        Ok(TopicResponse::from(&topic))
    }

    /// Delete a topic; its rooms and their messages go with it
    #[instrument(skip(self))]
    pub async fn delete_topic(&self, topic_id: RecordId) -> ServiceResult<()> {
        self.ctx.topic_repo().delete(topic_id).await?;
        info!(topic_id = %topic_id, "Topic deleted");
        Ok(())
    }
}
