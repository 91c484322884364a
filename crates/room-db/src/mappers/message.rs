//! Message model <-> entity mapper

use room_core::entities::Message;
use room_core::value_objects::RecordId;

use crate::models::MessageModel;

/// Convert MessageModel to Message entity
impl From<MessageModel> for Message {
    fn from(model: MessageModel) -> Self {
        Message {
            id: RecordId::new(model.id),
            user_id: RecordId::new(model.user_id),
            room_id: RecordId::new(model.room_id),
            body: model.body,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
