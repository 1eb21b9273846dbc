mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use reading_levels::ui_mode::{MemoryPreferenceSlots, PreferenceSlots, PreferenceStore, StoreError};
use serde_json::json;

/// Every storage call fails.
struct FailingStore;

impl PreferenceStore for FailingStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("quota exceeded".into()))
    }
    fn save(&self, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("quota exceeded".into()))
    }
}

struct FailingSlots;

impl PreferenceSlots for FailingSlots {
    fn slot(&self, _client_id: &str) -> Box<dyn PreferenceStore> {
        Box::new(FailingStore)
    }
}

#[tokio::test]
async fn test_default_is_auto_on_desktop_width() {
    let app = common::create_test_app();
    let (status, json) = common::send(&app, "GET", "/api/v1/ui-mode/client-a", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["userPreference"], "auto");
    assert_eq!(json["currentMode"], "desktop");
    assert_eq!(json["deviceType"], "desktop");
    assert_eq!(json["screenWidth"], 1024);
}

#[tokio::test]
async fn test_viewport_changes_follow_auto_only() {
    let app = common::create_test_app();
    let uri = "/api/v1/ui-mode/client-a/viewport";
    let (_, json) = common::send(&app, "POST", uri, Some(json!({ "width": 767 }))).await;
    assert_eq!(json["currentMode"], "mobile");
    assert_eq!(json["deviceType"], "mobile");

    let (_, json) = common::send(&app, "POST", uri, Some(json!({ "width": 768 }))).await;
    assert_eq!(json["currentMode"], "desktop");
    assert_eq!(json["deviceType"], "tablet");

    common::send(&app, "PUT", "/api/v1/ui-mode/client-a", Some(json!({ "mode": "desktop" }))).await;
    let (_, json) = common::send(&app, "POST", uri, Some(json!({ "width": 320 }))).await;
    assert_eq!(json["currentMode"], "desktop");
    assert_eq!(json["userPreference"], "desktop");
}

#[tokio::test]
async fn test_clients_keep_their_own_mode() {
    let app = common::create_test_app();
    let (_, json) =
        common::send(&app, "POST", "/api/v1/ui-mode/phone/viewport", Some(json!({ "width": 390 }))).await;
    assert_eq!(json["currentMode"], "mobile");

    common::send(&app, "POST", "/api/v1/ui-mode/laptop/viewport", Some(json!({ "width": 1440 }))).await;
    let (_, json) = common::send(&app, "POST", "/api/v1/ui-mode/laptop/toggle", None).await;
    assert_eq!(json["currentMode"], "mobile");
    assert_eq!(json["userPreference"], "mobile");

    let (_, json) = common::send(&app, "GET", "/api/v1/ui-mode/phone", None).await;
    assert_eq!(json["currentMode"], "mobile");
    assert_eq!(json["userPreference"], "auto");
    assert_eq!(json["screenWidth"], 390);
    assert_eq!(json["deviceType"], "mobile");
}

#[tokio::test]
async fn test_set_mode_persists_across_reload() {
    let slots = Arc::new(MemoryPreferenceSlots::default());
    let app = common::create_test_app_with_slots(slots.clone());
    let (_, json) =
        common::send(&app, "PUT", "/api/v1/ui-mode/client-a", Some(json!({ "mode": "mobile" }))).await;
    assert_eq!(json["currentMode"], "mobile");

    let reloaded = common::create_test_app_with_slots(slots.clone());
    let (_, json) = common::send(&reloaded, "GET", "/api/v1/ui-mode/client-a", None).await;
    assert_eq!(json["currentMode"], "mobile");
    assert_eq!(json["userPreference"], "mobile");

    // Another client on the same server starts from auto.
    let (_, json) = common::send(&reloaded, "GET", "/api/v1/ui-mode/client-b", None).await;
    assert_eq!(json["userPreference"], "auto");
    assert!(slots.stored("client-b").is_none());
}

#[tokio::test]
async fn test_auto_mode_resolves_against_current_width() {
    let slots = Arc::new(MemoryPreferenceSlots::default());
    let app = common::create_test_app_with_slots(slots.clone());
    common::send(&app, "POST", "/api/v1/ui-mode/client-a/viewport", Some(json!({ "width": 500 }))).await;
    common::send(&app, "PUT", "/api/v1/ui-mode/client-a", Some(json!({ "mode": "desktop" }))).await;
    let (_, json) =
        common::send(&app, "PUT", "/api/v1/ui-mode/client-a", Some(json!({ "mode": "auto" }))).await;
    assert_eq!(json["currentMode"], "mobile");
    assert_eq!(slots.stored("client-a").as_deref(), Some("auto"));
}

#[tokio::test]
async fn test_failing_storage_still_switches_modes() {
    let app = common::create_test_app_with_slots(Arc::new(FailingSlots));
    let (_, json) = common::send(&app, "GET", "/api/v1/ui-mode/client-a", None).await;
    assert_eq!(json["userPreference"], "auto");

    let (status, json) = common::send(&app, "POST", "/api/v1/ui-mode/client-a/toggle", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["currentMode"], "mobile");

    let (_, json) = common::send(&app, "POST", "/api/v1/ui-mode/client-a/toggle", None).await;
    assert_eq!(json["currentMode"], "desktop");

    let (_, json) =
        common::send(&app, "PUT", "/api/v1/ui-mode/client-a", Some(json!({ "mode": "mobile" }))).await;
    assert_eq!(json["currentMode"], "mobile");
}

#[tokio::test]
async fn test_unknown_mode_is_rejected() {
    let app = common::create_test_app();
    let (status, _) =
        common::send(&app, "PUT", "/api/v1/ui-mode/client-a", Some(json!({ "mode": "tablet" }))).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_bad_client_id_is_rejected() {
    let app = common::create_test_app();
    let (status, json) = common::send(&app, "GET", "/api/v1/ui-mode/a.b", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].as_str().unwrap().contains("client id"));
}
