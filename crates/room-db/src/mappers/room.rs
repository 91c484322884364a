//! Room model <-> entity mapper

use room_core::entities::Room;
use room_core::value_objects::RecordId;

use crate::models::RoomModel;

/// Combine a room row with its participant IDs from the join table
pub fn room_with_participants(model: RoomModel, participant_ids: Vec<i64>) -> Room {
    Room {
        id: RecordId::new(model.id),
        host_id: RecordId::new(model.host_id),
        topic_id: RecordId::new(model.topic_id),
        name: model.name,
        description: model.description,
        participants: participant_ids.into_iter().map(RecordId::new).collect(),
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
