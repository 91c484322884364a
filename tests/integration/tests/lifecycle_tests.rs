//! Profile image lifecycle tests
//!
//! Exercises the save pipeline end to end: persist record, sweep the stale
//! avatar file, bound the new avatar's dimensions.

use integration_tests::TestHarness;
use room_service::services::{Cleanup, ProfileService, ServiceError};
use room_service::dto::{CreateProfileRequest, UpdateProfileRequest};

fn no_image() -> CreateProfileRequest {
    CreateProfileRequest {
        email: None,
        image: None,
    }
}

fn with_image(name: &str) -> CreateProfileRequest {
    CreateProfileRequest {
        email: None,
        image: Some(name.to_string()),
    }
}

fn change_image(name: &str) -> UpdateProfileRequest {
    UpdateProfileRequest {
        email: None,
        image: Some(name.to_string()),
        remove_image: false,
    }
}

#[tokio::test]
async fn create_without_image_uses_placeholder() {
    let harness = TestHarness::new();
    let service = ProfileService::new(&harness.ctx);
    let user = integration_tests::unique_user();

    let saved = service.create_profile(user, no_image()).await.unwrap();

    assert!(saved.profile.image.is_none());
    assert_eq!(saved.profile.avatar_path(), "default.jpg");
    assert_eq!(saved.cleanup, Cleanup::Clean);

    // No file was uploaded, so nothing lands in the upload dir
    let entries = std::fs::read_dir(harness.upload_path()).unwrap().count();
    assert_eq!(entries, 0);
}

#[tokio::test]
async fn create_bounds_oversized_avatar() {
    let harness = TestHarness::new();
    let service = ProfileService::new(&harness.ctx);
    let user = integration_tests::unique_user();

    let image = harness.write_png("avatars/me.png", 600, 400);
    let saved = service
        .create_profile(user, with_image("avatars/me.png"))
        .await
        .unwrap();

    assert_eq!(saved.profile.image.as_ref(), Some(&image));
    assert_eq!(harness.dimensions_of(&image), (300, 200));
}

#[tokio::test]
async fn create_keeps_small_avatar_untouched() {
    let harness = TestHarness::new();
    let service = ProfileService::new(&harness.ctx);
    let user = integration_tests::unique_user();

    let image = harness.write_png("small.png", 200, 150);
    service
        .create_profile(user, with_image("small.png"))
        .await
        .unwrap();

    assert_eq!(harness.dimensions_of(&image), (200, 150));
}

#[tokio::test]
async fn replacing_avatar_sweeps_old_file() {
    let harness = TestHarness::new();
    let service = ProfileService::new(&harness.ctx);
    let user = integration_tests::unique_user();

    let old = harness.write_png("a.png", 100, 100);
    service.create_profile(user, with_image("a.png")).await.unwrap();

    let new = harness.write_png("b.png", 640, 480);
    let saved = service.update_profile(user, change_image("b.png")).await.unwrap();

    assert_eq!(saved.cleanup, Cleanup::Clean);
    assert_eq!(saved.profile.image.as_ref(), Some(&new));
    assert!(!harness.image_store().exists(&old), "stale file must be deleted");
    assert_eq!(harness.dimensions_of(&new), (300, 225));
}

#[tokio::test]
async fn saving_unchanged_avatar_sweeps_nothing() {
    let harness = TestHarness::new();
    let service = ProfileService::new(&harness.ctx);
    let user = integration_tests::unique_user();

    let image = harness.write_png("keep.png", 100, 100);
    service.create_profile(user, with_image("keep.png")).await.unwrap();

    let saved = service
        .update_profile(
            user,
            UpdateProfileRequest {
                email: Some("renamed@example.com".to_string()),
                image: Some("keep.png".to_string()),
                remove_image: false,
            },
        )
        .await
        .unwrap();

    assert_eq!(saved.cleanup, Cleanup::Clean);
    assert!(harness.image_store().exists(&image), "unchanged file must survive");
    assert_eq!(saved.profile.email.as_deref(), Some("renamed@example.com"));
}

#[tokio::test]
async fn removing_avatar_clears_field_and_file() {
    let harness = TestHarness::new();
    let service = ProfileService::new(&harness.ctx);
    let user = integration_tests::unique_user();

    let image = harness.write_png("gone.png", 100, 100);
    service.create_profile(user, with_image("gone.png")).await.unwrap();

    let saved = service
        .update_profile(
            user,
            UpdateProfileRequest {
                email: None,
                image: None,
                remove_image: true,
            },
        )
        .await
        .unwrap();

    assert_eq!(saved.cleanup, Cleanup::Clean);
    assert!(saved.profile.image.is_none());
    assert_eq!(saved.profile.avatar_path(), "default.jpg");
    assert!(!harness.image_store().exists(&image));

    // The cleared state is what a fresh read sees
    let fetched = service.get_profile_by_user(user).await.unwrap();
    assert_eq!(fetched.image, "default.jpg");
}

#[tokio::test]
async fn sweeping_already_missing_file_is_clean() {
    let harness = TestHarness::new();
    let service = ProfileService::new(&harness.ctx);
    let user = integration_tests::unique_user();

    let old = harness.write_png("vanished.png", 100, 100);
    service
        .create_profile(user, with_image("vanished.png"))
        .await
        .unwrap();

    // Someone deleted the file out from under us
    harness.image_store().remove(&old).unwrap();

    harness.write_png("replacement.png", 100, 100);
    let saved = service
        .update_profile(user, change_image("replacement.png"))
        .await
        .unwrap();

    assert_eq!(saved.cleanup, Cleanup::Clean);
}

#[tokio::test]
async fn undecodable_avatar_fails_after_record_is_saved() {
    let harness = TestHarness::new();
    let service = ProfileService::new(&harness.ctx);
    let user = integration_tests::unique_user();

    let old = harness.write_png("good.png", 100, 100);
    service.create_profile(user, with_image("good.png")).await.unwrap();

    harness.write_garbage("broken.png");
    let err = service
        .update_profile(user, change_image("broken.png"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Storage(_)));

    // The record update and the stale sweep both happened before the
    // resize failed.
    let fetched = service.get_profile_by_user(user).await.unwrap();
    assert_eq!(fetched.image, "broken.png");
    assert!(!harness.image_store().exists(&old));
}

#[tokio::test]
async fn email_only_update_leaves_avatar_alone() {
    let harness = TestHarness::new();
    let service = ProfileService::new(&harness.ctx);
    let user = integration_tests::unique_user();

    let image = harness.write_png("stay.png", 100, 100);
    service.create_profile(user, with_image("stay.png")).await.unwrap();

    let saved = service
        .update_profile(
            user,
            UpdateProfileRequest {
                email: Some(integration_tests::unique_email()),
                image: None,
                remove_image: false,
            },
        )
        .await
        .unwrap();

    assert_eq!(saved.profile.image.as_ref(), Some(&image));
    assert!(harness.image_store().exists(&image));
    assert_eq!(saved.cleanup, Cleanup::Clean);
}

#[tokio::test]
async fn deleting_profile_sweeps_avatar() {
    let harness = TestHarness::new();
    let service = ProfileService::new(&harness.ctx);
    let user = integration_tests::unique_user();

    let image = harness.write_png("deleted.png", 100, 100);
    let saved = service
        .create_profile(user, with_image("deleted.png"))
        .await
        .unwrap();

    let cleanup = service.delete_profile(saved.profile.id).await.unwrap();

    assert_eq!(cleanup, Cleanup::Clean);
    assert!(!harness.image_store().exists(&image));
    assert!(service.get_profile_by_user(user).await.is_err());
}

#[tokio::test]
async fn duplicate_profile_for_user_is_rejected() {
    let harness = TestHarness::new();
    let service = ProfileService::new(&harness.ctx);
    let user = integration_tests::unique_user();

    service.create_profile(user, no_image()).await.unwrap();
    let err = service.create_profile(user, no_image()).await.unwrap_err();
    assert_eq!(err.error_code(), "PROFILE_ALREADY_EXISTS");
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let harness = TestHarness::new();
    let service = ProfileService::new(&harness.ctx);

    let email = integration_tests::unique_email();
    service
        .create_profile(
            integration_tests::unique_user(),
            CreateProfileRequest {
                email: Some(email.clone()),
                image: None,
            },
        )
        .await
        .unwrap();

    let err = service
        .create_profile(
            integration_tests::unique_user(),
            CreateProfileRequest {
                email: Some(email),
                image: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "EMAIL_ALREADY_EXISTS");
}

#[tokio::test]
async fn changing_email_to_taken_address_is_rejected() {
    let harness = TestHarness::new();
    let service = ProfileService::new(&harness.ctx);

    let taken = integration_tests::unique_email();
    service
        .create_profile(
            integration_tests::unique_user(),
            CreateProfileRequest {
                email: Some(taken.clone()),
                image: None,
            },
        )
        .await
        .unwrap();

    let user = integration_tests::unique_user();
    let own = integration_tests::unique_email();
    service
        .create_profile(
            user,
            CreateProfileRequest {
                email: Some(own.clone()),
                image: None,
            },
        )
        .await
        .unwrap();

    let err = service
        .update_profile(
            user,
            UpdateProfileRequest {
                email: Some(taken),
                image: None,
                remove_image: false,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "EMAIL_ALREADY_EXISTS");

    // Re-saving the current address is not a conflict
    let saved = service
        .update_profile(
            user,
            UpdateProfileRequest {
                email: Some(own.clone()),
                image: None,
                remove_image: false,
            },
        )
        .await
        .unwrap();
    assert_eq!(saved.profile.email, Some(own));
}

#[tokio::test]
async fn traversal_image_path_is_rejected() {
    let harness = TestHarness::new();
    let service = ProfileService::new(&harness.ctx);

    let err = service
        .create_profile(
            integration_tests::unique_user(),
            with_image("../outside.png"),
        )
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "INVALID_IMAGE_PATH");
}
