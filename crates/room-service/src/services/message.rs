//! Message service

use tracing::{info, instrument};
use validator::Validate;

use room_core::entities::NewMessage;
use room_core::traits::MessageQuery;
use room_core::value_objects::RecordId;

use crate::dto::{MessageResponse, PostMessageRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Post a message to a room. The author joins the room's participants,
    /// matching the chatroom convention that commenting means joining.
    #[instrument(skip(self, request))]
    pub async fn post_message(
        &self,
        user_id: RecordId,
        room_id: RecordId,
        request: PostMessageRequest,
    ) -> ServiceResult<MessageResponse> {
        request.validate()?;
        if request.body.trim().is_empty() {
            return Err(ServiceError::validation("Message body must not be blank"));
        }

        self.ctx
            .room_repo()
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Room", room_id.to_string()))?;

        let message = self
            .ctx
            .message_repo()
            .create(&NewMessage {
                user_id,
                room_id,
                body: request.body,
            })
            .await?;

        self.ctx.room_repo().add_participant(room_id, user_id).await?;

        info!(message_id = %message.id, room_id = %room_id, "Message posted");
        Ok(MessageResponse::from(&message))
    }

    /// Edit a message's body
    #[instrument(skip(self, body))]
    pub async fn edit_message(
        &self,
        message_id: RecordId,
        body: String,
    ) -> ServiceResult<MessageResponse> {
        if body.trim().is_empty() {
            return Err(ServiceError::validation("Message body must not be blank"));
        }

        let mut message = self
            .ctx
            .message_repo()
            .find_by_id(message_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Message", message_id.to_string()))?;

        message.edit(body);
        self.ctx.message_repo().update(&message).await?;

        info!(message_id = %message_id, "Message edited");
        Ok(MessageResponse::from(&message))
    }

    /// List messages in a room, newest first
    #[instrument(skip(self))]
    pub async fn list_messages(
        &self,
        room_id: RecordId,
        before: Option<RecordId>,
        limit: i64,
    ) -> ServiceResult<Vec<MessageResponse>> {
        let messages = self
            .ctx
            .message_repo()
            .find_by_room(room_id, MessageQuery { before, limit })
            .await?;

        Ok(messages.iter().map(MessageResponse::from).collect())
    }

    /// Delete a message
    #[instrument(skip(self))]
    pub async fn delete_message(&self, message_id: RecordId) -> ServiceResult<()> {
        self.ctx.message_repo().delete(message_id).await?;
        info!(message_id = %message_id, "Message deleted");
        Ok(())
    }
}
