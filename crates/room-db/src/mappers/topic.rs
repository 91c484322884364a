//! Topic model <-> entity mapper

use room_core::entities::Topic;
use room_core::value_objects::RecordId;

use crate::models::TopicModel;

/// Convert TopicModel to Topic entity
impl From<TopicModel> for Topic {
    fn from(model: TopicModel) -> Self {
        Topic {
            id: RecordId::new(model.id),
            name: model.name,
            user_id: RecordId::new(model.user_id),
        }
    }
}
