//! Topic, room, message, and purge scenario tests

use integration_tests::TestHarness;
use room_core::value_objects::RecordId;
use room_service::dto::{
    CreateProfileRequest, CreateRoomRequest, CreateTopicRequest, PostMessageRequest,
    UpdateRoomRequest,
};
use room_service::services::{
    AccountService, MessageService, ProfileService, RoomService, TopicService,
};

fn record_id(id: &str) -> RecordId {
    RecordId::new(id.parse().expect("numeric id"))
}

async fn make_topic(harness: &TestHarness, user: RecordId, name: &str) -> RecordId {
    let topic = TopicService::new(&harness.ctx)
        .create_topic(
            user,
            CreateTopicRequest {
                name: name.to_string(),
            },
        )
        .await
        .unwrap();
    record_id(&topic.id)
}

async fn make_room(harness: &TestHarness, host: RecordId, topic: RecordId, name: &str) -> RecordId {
    let room = RoomService::new(&harness.ctx)
        .create_room(
            host,
            CreateRoomRequest {
                topic_id: topic.into_inner(),
                name: name.to_string(),
                description: None,
            },
        )
        .await
        .unwrap();
    record_id(&room.id)
}

#[tokio::test]
async fn host_joins_created_room() {
    let harness = TestHarness::new();
    let host = integration_tests::unique_user();
    let topic = make_topic(&harness, host, "rust").await;

    let room = RoomService::new(&harness.ctx)
        .create_room(
            host,
            CreateRoomRequest {
                topic_id: topic.into_inner(),
                name: "beginners".to_string(),
                description: Some("ask anything".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(room.participants, vec![host.to_string()]);
}

#[tokio::test]
async fn room_under_unknown_topic_is_rejected() {
    let harness = TestHarness::new();
    let host = integration_tests::unique_user();

    let err = RoomService::new(&harness.ctx)
        .create_room(
            host,
            CreateRoomRequest {
                topic_id: 999_999,
                name: "orphan".to_string(),
                description: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "NOT_FOUND");
}

#[tokio::test]
async fn author_joins_room_on_first_message() {
    let harness = TestHarness::new();
    let host = integration_tests::unique_user();
    let visitor = integration_tests::unique_user();
    let topic = make_topic(&harness, host, "python").await;
    let room = make_room(&harness, host, topic, "help desk").await;

    let service = MessageService::new(&harness.ctx);
    service
        .post_message(
            visitor,
            room,
            PostMessageRequest {
                body: "hello there".to_string(),
            },
        )
        .await
        .unwrap();
    // A second message must not duplicate the membership row
    service
        .post_message(
            visitor,
            room,
            PostMessageRequest {
                body: "still here".to_string(),
            },
        )
        .await
        .unwrap();

    let fetched = RoomService::new(&harness.ctx).get_room(room).await.unwrap();
    assert_eq!(
        fetched.participants,
        vec![host.to_string(), visitor.to_string()]
    );
}

#[tokio::test]
async fn blank_message_is_rejected() {
    let harness = TestHarness::new();
    let host = integration_tests::unique_user();
    let topic = make_topic(&harness, host, "go").await;
    let room = make_room(&harness, host, topic, "lounge").await;

    let err = MessageService::new(&harness.ctx)
        .post_message(
            host,
            room,
            PostMessageRequest {
                body: "   ".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn rooms_list_newest_first() {
    let harness = TestHarness::new();
    let host = integration_tests::unique_user();
    let topic = make_topic(&harness, host, "news").await;

    let first = make_room(&harness, host, topic, "first").await;
    let second = make_room(&harness, host, topic, "second").await;
    let third = make_room(&harness, host, topic, "third").await;

    let rooms = RoomService::new(&harness.ctx).list_rooms().await.unwrap();
    let ids: Vec<RecordId> = rooms.iter().map(|r| record_id(&r.id)).collect();
    assert_eq!(ids, vec![third, second, first]);
}

#[tokio::test]
async fn hosted_rooms_list_newest_first() {
    let harness = TestHarness::new();
    let host = integration_tests::unique_user();
    let other = integration_tests::unique_user();
    let topic = make_topic(&harness, host, "hosting").await;

    let first = make_room(&harness, host, topic, "first").await;
    make_room(&harness, other, topic, "not mine").await;
    let second = make_room(&harness, host, topic, "second").await;

    let rooms = RoomService::new(&harness.ctx)
        .list_by_host(host)
        .await
        .unwrap();
    let ids: Vec<RecordId> = rooms.iter().map(|r| record_id(&r.id)).collect();
    assert_eq!(ids, vec![second, first]);
}

#[tokio::test]
async fn clearing_room_description() {
    let harness = TestHarness::new();
    let host = integration_tests::unique_user();
    let topic = make_topic(&harness, host, "tidy").await;

    let room = RoomService::new(&harness.ctx)
        .create_room(
            host,
            CreateRoomRequest {
                topic_id: topic.into_inner(),
                name: "described".to_string(),
                description: Some("soon gone".to_string()),
            },
        )
        .await
        .unwrap();
    let room_id = record_id(&room.id);

    let updated = RoomService::new(&harness.ctx)
        .update_room(
            room_id,
            UpdateRoomRequest {
                remove_description: true,
                ..UpdateRoomRequest::default()
            },
        )
        .await
        .unwrap();
    assert!(updated.description.is_none());

    let fetched = RoomService::new(&harness.ctx).get_room(room_id).await.unwrap();
    assert!(fetched.description.is_none());
}

#[tokio::test]
async fn messages_page_newest_first_with_cursor() {
    let harness = TestHarness::new();
    let host = integration_tests::unique_user();
    let topic = make_topic(&harness, host, "chatter").await;
    let room = make_room(&harness, host, topic, "wall").await;

    let service = MessageService::new(&harness.ctx);
    let mut posted = Vec::new();
    for n in 1..=5 {
        let message = service
            .post_message(
                host,
                room,
                PostMessageRequest {
                    body: format!("message {n}"),
                },
            )
            .await
            .unwrap();
        posted.push(record_id(&message.id));
    }

    let page = service.list_messages(room, None, 2).await.unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(record_id(&page[0].id), posted[4]);
    assert_eq!(record_id(&page[1].id), posted[3]);

    let cursor = record_id(&page[1].id);
    let next = service.list_messages(room, Some(cursor), 2).await.unwrap();
    assert_eq!(record_id(&next[0].id), posted[2]);
    assert_eq!(record_id(&next[1].id), posted[1]);
}

#[tokio::test]
async fn edited_message_is_flagged() {
    let harness = TestHarness::new();
    let host = integration_tests::unique_user();
    let topic = make_topic(&harness, host, "edits").await;
    let room = make_room(&harness, host, topic, "drafts").await;

    let service = MessageService::new(&harness.ctx);
    let posted = service
        .post_message(
            host,
            room,
            PostMessageRequest {
                body: "frist".to_string(),
            },
        )
        .await
        .unwrap();
    assert!(!posted.edited);

    let edited = service
        .edit_message(record_id(&posted.id), "first".to_string())
        .await
        .unwrap();
    assert!(edited.edited);
    assert_eq!(edited.body, "first");
}

#[tokio::test]
async fn leaving_room_removes_participant() {
    let harness = TestHarness::new();
    let host = integration_tests::unique_user();
    let visitor = integration_tests::unique_user();
    let topic = make_topic(&harness, host, "doors").await;
    let room = make_room(&harness, host, topic, "revolving").await;

    let service = RoomService::new(&harness.ctx);
    service.join_room(room, visitor).await.unwrap();
    service.leave_room(room, visitor).await.unwrap();

    let fetched = service.get_room(room).await.unwrap();
    assert_eq!(fetched.participants, vec![host.to_string()]);
}

#[tokio::test]
async fn updating_room_requires_existing_topic() {
    let harness = TestHarness::new();
    let host = integration_tests::unique_user();
    let topic = make_topic(&harness, host, "old").await;
    let room = make_room(&harness, host, topic, "movable").await;

    let err = RoomService::new(&harness.ctx)
        .update_room(
            room,
            UpdateRoomRequest {
                topic_id: Some(424_242),
                ..UpdateRoomRequest::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "NOT_FOUND");
}

#[tokio::test]
async fn deleting_topic_cascades_to_rooms_and_messages() {
    let harness = TestHarness::new();
    let host = integration_tests::unique_user();
    let topic = make_topic(&harness, host, "doomed").await;
    let room = make_room(&harness, host, topic, "condemned").await;

    MessageService::new(&harness.ctx)
        .post_message(
            host,
            room,
            PostMessageRequest {
                body: "last words".to_string(),
            },
        )
        .await
        .unwrap();

    TopicService::new(&harness.ctx).delete_topic(topic).await.unwrap();

    assert_eq!(harness.store.room_count(), 0);
    assert_eq!(harness.store.message_count(), 0);
}

#[tokio::test]
async fn topic_names_may_repeat() {
    let harness = TestHarness::new();
    let a = integration_tests::unique_user();
    let b = integration_tests::unique_user();
    make_topic(&harness, a, "music").await;
    make_topic(&harness, b, "music").await;

    let found = TopicService::new(&harness.ctx)
        .find_by_name("music")
        .await
        .unwrap();
    assert_eq!(found.len(), 2);
}

#[tokio::test]
async fn purging_user_removes_content_and_avatar() {
    let harness = TestHarness::new();
    let doomed = integration_tests::unique_user();
    let bystander = integration_tests::unique_user();

    let avatar = harness.write_png("doomed.png", 100, 100);
    ProfileService::new(&harness.ctx)
        .create_profile(
            doomed,
            CreateProfileRequest {
                email: None,
                image: Some("doomed.png".to_string()),
            },
        )
        .await
        .unwrap();
    ProfileService::new(&harness.ctx)
        .create_profile(
            bystander,
            CreateProfileRequest {
                email: None,
                image: None,
            },
        )
        .await
        .unwrap();

    let topic = make_topic(&harness, doomed, "mine").await;
    let room = make_room(&harness, doomed, topic, "my room").await;
    let messages = MessageService::new(&harness.ctx);
    messages
        .post_message(
            doomed,
            room,
            PostMessageRequest {
                body: "one".to_string(),
            },
        )
        .await
        .unwrap();
    messages
        .post_message(
            doomed,
            room,
            PostMessageRequest {
                body: "two".to_string(),
            },
        )
        .await
        .unwrap();
    // A bystander's message in the doomed room goes with the room
    messages
        .post_message(
            bystander,
            room,
            PostMessageRequest {
                body: "passing by".to_string(),
            },
        )
        .await
        .unwrap();

    let purge = AccountService::new(&harness.ctx)
        .purge_user(doomed)
        .await
        .unwrap();

    assert!(purge.profile_deleted);
    assert!(purge.avatar_removed);
    assert_eq!(purge.topics_deleted, 1);
    assert_eq!(purge.rooms_deleted, 1);
    assert_eq!(purge.messages_deleted, 2);

    assert!(!harness.image_store().exists(&avatar));
    assert_eq!(harness.store.topic_count(), 0);
    assert_eq!(harness.store.room_count(), 0);
    assert_eq!(harness.store.message_count(), 0);
    // The bystander's profile is untouched
    assert_eq!(harness.store.profile_count(), 1);
}

#[tokio::test]
async fn purging_unknown_user_is_a_noop() {
    let harness = TestHarness::new();

    let purge = AccountService::new(&harness.ctx)
        .purge_user(integration_tests::unique_user())
        .await
        .unwrap();

    assert!(!purge.profile_deleted);
    assert!(!purge.avatar_removed);
    assert_eq!(purge.topics_deleted, 0);
    assert_eq!(purge.rooms_deleted, 0);
    assert_eq!(purge.messages_deleted, 0);
}
