//! Room service

use tracing::{info, instrument};
use validator::Validate;

use room_core::entities::NewRoom;
use room_core::value_objects::RecordId;

use crate::dto::{CreateRoomRequest, RoomResponse, UpdateRoomRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Room service
pub struct RoomService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RoomService<'a> {
    /// Create a new RoomService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get room by ID, with participants
    #[instrument(skip(self))]
    pub async fn get_room(&self, room_id: RecordId) -> ServiceResult<RoomResponse> {
        let room = self
            .ctx
            .room_repo()
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Room", room_id.to_string()))?;

        Ok(RoomResponse::from(&room))
    }

    /// List all rooms, newest-created first
    #[instrument(skip(self))]
    pub async fn list_rooms(&self) -> ServiceResult<Vec<RoomResponse>> {
        let rooms = self.ctx.room_repo().list().await?;
        Ok(rooms.iter().map(RoomResponse::from).collect())
    }

    /// List rooms under a topic, newest-created first
    #[instrument(skip(self))]
    pub async fn list_by_topic(&self, topic_id: RecordId) -> ServiceResult<Vec<RoomResponse>> {
        let rooms = self.ctx.room_repo().list_by_topic(topic_id).await?;
        Ok(rooms.iter().map(RoomResponse::from).collect())
    }

    /// List rooms hosted by a user, newest-created first
    #[instrument(skip(self))]
    pub async fn list_by_host(&self, host_id: RecordId) -> ServiceResult<Vec<RoomResponse>> {
        let rooms = self.ctx.room_repo().list_by_host(host_id).await?;
        Ok(rooms.iter().map(RoomResponse::from).collect())
    }

    /// Create a room under an existing topic. The host joins the room's
    /// participants right away.
    #[instrument(skip(self, request))]
    pub async fn create_room(
        &self,
        host_id: RecordId,
        request: CreateRoomRequest,
    ) -> ServiceResult<RoomResponse> {
        request.validate()?;

        let topic_id = RecordId::new(request.topic_id);
        self.ctx
            .topic_repo()
            .find_by_id(topic_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Topic", topic_id.to_string()))?;

        let mut room = self
            .ctx
            .room_repo()
            .create(&NewRoom {
                host_id,
                topic_id,
                name: request.name,
                description: request.description,
            })
            .await?;

        self.ctx.room_repo().add_participant(room.id, host_id).await?;
        room.participants.push(host_id);

        info!(room_id = %room.id, host_id = %host_id, "Room created");
        Ok(RoomResponse::from(&room))
    }

    /// Update a room's name, description, or topic
    #[instrument(skip(self, request))]
    pub async fn update_room(
        &self,
        room_id: RecordId,
        request: UpdateRoomRequest,
    ) -> ServiceResult<RoomResponse> {
        request.validate()?;

        let mut room = self
            .ctx
            .room_repo()
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Room", room_id.to_string()))?;

        if let Some(name) = request.name {
            room.set_name(name);
        }
        if request.remove_description {
            room.set_description(None);
        }
        if let Some(description) = request.description {
            room.set_description(Some(description));
        }
        if let Some(topic_id) = request.topic_id {
            let topic_id = RecordId::new(topic_id);
            self.ctx
                .topic_repo()
                .find_by_id(topic_id)
                .await?
                .ok_or_else(|| ServiceError::not_found("Topic", topic_id.to_string()))?;
            room.set_topic(topic_id);
        }

        self.ctx.room_repo().update(&room).await?;

        info!(room_id = %room_id, "Room updated");
        Ok(RoomResponse::from(&room))
    }

    /// Add a user to the room's participants
    #[instrument(skip(self))]
    pub async fn join_room(&self, room_id: RecordId, user_id: RecordId) -> ServiceResult<()> {
        self.ctx
            .room_repo()
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Room", room_id.to_string()))?;

        self.ctx.room_repo().add_participant(room_id, user_id).await?;
        info!(room_id = %room_id, user_id = %user_id, "User joined room");
        Ok(())
    }

    /// Remove a user from the room's participants
    #[instrument(skip(self))]
    pub async fn leave_room(&self, room_id: RecordId, user_id: RecordId) -> ServiceResult<()> {
        self.ctx
            .room_repo()
            .remove_participant(room_id, user_id)
            .await?;
        info!(room_id = %room_id, user_id = %user_id, "User left room");
        Ok(())
    }

    /// Delete a room; its messages and participant rows go with it
    #[instrument(skip(self))]
    pub async fn delete_room(&self, room_id: RecordId) -> ServiceResult<()> {
        self.ctx.room_repo().delete(room_id).await?;
        info!(room_id = %room_id, "Room deleted");
        Ok(())
    }
}
