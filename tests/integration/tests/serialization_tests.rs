//! Response serialization tests
//!
//! Record IDs cross the wire as strings so JavaScript clients never hit
//! the 53-bit integer limit.

use integration_tests::TestHarness;
use room_service::dto::{CreateProfileRequest, CreateRoomRequest, CreateTopicRequest};
use room_service::services::{ProfileService, RoomService, TopicService};

#[tokio::test]
async fn profile_ids_serialize_as_strings() {
    let harness = TestHarness::new();
    let user = integration_tests::unique_user();

    let saved = ProfileService::new(&harness.ctx)
        .create_profile(
            user,
            CreateProfileRequest {
                email: None,
                image: None,
            },
        )
        .await
        .unwrap();

    let fetched = ProfileService::new(&harness.ctx)
        .get_profile_by_user(user)
        .await
        .unwrap();
    let json = serde_json::to_value(&fetched).unwrap();

    assert!(json["id"].is_string());
    assert_eq!(json["user_id"], user.to_string());
    assert_eq!(json["image"], "default.jpg");
    // Absent email is omitted, not null
    assert!(json.get("email").is_none());
    assert_eq!(json["id"], saved.profile.id.to_string());
}

#[tokio::test]
async fn room_participants_serialize_as_strings() {
    let harness = TestHarness::new();
    let host = integration_tests::unique_user();

    let topic = TopicService::new(&harness.ctx)
        .create_topic(
            host,
            CreateTopicRequest {
                name: "wire".to_string(),
            },
        )
        .await
        .unwrap();

    let room = RoomService::new(&harness.ctx)
        .create_room(
            host,
            CreateRoomRequest {
                topic_id: topic.id.parse().unwrap(),
                name: "format".to_string(),
                description: None,
            },
        )
        .await
        .unwrap();

    let json = serde_json::to_value(&room).unwrap();
    assert!(json["id"].is_string());
    assert!(json["topic_id"].is_string());
    assert_eq!(json["participants"], serde_json::json!([host.to_string()]));
    // No description means no key
    assert!(json.get("description").is_none());
}
