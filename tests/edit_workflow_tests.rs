// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

mod common;

use common::{mount_get, test_client};
use fitboard::error::ApiError;
use fitboard::models::{RecordId, Role};
use fitboard::views::{UsersView, ViewState};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn ready_users_view(server: &MockServer) -> UsersView {
    mount_get(
        server,
        "/users/",
        json!([
            {"_id": 3, "name": "Ana", "email": "ana@example.com", "role": "member", "team_id": 5},
            {"id": 4, "name": "Ben", "email": "ben@example.com", "role": "coach"},
        ]),
    )
    .await;
    mount_get(
        server,
        "/teams/",
        json!([{"id": 5, "name": "Red"}, {"id": 6, "name": "Blue"}]),
    )
    .await;

    let mut view = UsersView::new();
    view.activate(&test_client(server)).await;
    assert!(matches!(view.state(), ViewState::Ready(_)));
    view
}

#[tokio::test]
async fn test_open_edit_snapshots_selected_user() {
    let server = MockServer::start().await;
    let mut view = ready_users_view(&server).await;

    assert!(view.open_edit(&RecordId::Int(3)));
    let form = view.edit().form().expect("form open");
    assert_eq!(form.name, "Ana");
    assert_eq!(form.email, "ana@example.com");
    assert_eq!(form.role, Role::Member);
    assert_eq!(form.team_id, "5");
}

#[tokio::test]
async fn test_open_edit_unknown_user_does_not_open() {
    let server = MockServer::start().await;
    let mut view = ready_users_view(&server).await;

    assert!(!view.open_edit(&RecordId::Int(99)));
    assert!(!view.edit().is_open());
}

#[tokio::test]
async fn test_cancel_discards_snapshot_without_network_call() {
    let server = MockServer::start().await;
    let mut view = ready_users_view(&server).await;

    Mock::given(method("PUT"))
        .and(path("/users/3/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    view.open_edit(&RecordId::Int(3));
    view.form_mut().unwrap().set_name("Changed");
    view.cancel_edit();
    assert!(!view.edit().is_open());

    // Reopening shows the original record, not the discarded edits
    view.open_edit(&RecordId::Int(3));
    assert_eq!(view.edit().form().unwrap().name, "Ana");
}

#[tokio::test]
async fn test_validation_failure_never_reaches_the_network() {
    let server = MockServer::start().await;
    let mut view = ready_users_view(&server).await;

    Mock::given(method("PUT"))
        .and(path("/users/3/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    view.open_edit(&RecordId::Int(3));
    view.form_mut().unwrap().set_email("");

    let err = view.submit_edit(&test_client(&server)).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidForm(_)));

    // Workflow is back in Editing with the snapshot intact
    assert_eq!(view.edit().form().unwrap().email, "");
}

#[tokio::test]
async fn test_submit_reconciles_collection_with_server_representation() {
    let server = MockServer::start().await;
    let mut view = ready_users_view(&server).await;

    Mock::given(method("PUT"))
        .and(path("/users/3/"))
        .and(body_json(json!({
            "_id": 3,
            "name": "Ana Maria",
            "email": "ana@example.com",
            "role": "member",
            "team_id": 6
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": 3,
            "name": "Ana Maria",
            "email": "ana@example.com",
            "role": "member",
            "team_id": 6
        })))
        .expect(1)
        .mount(&server)
        .await;

    view.open_edit(&RecordId::Int(3));
    {
        let form = view.form_mut().unwrap();
        form.set_name("Ana Maria");
        form.set_team_id("6");
    }
    view.submit_edit(&test_client(&server)).await.expect("submit ok");

    assert!(!view.edit().is_open());
    let ViewState::Ready(data) = view.state() else {
        panic!("view no longer ready");
    };
    assert_eq!(data.users[0].name.as_deref(), Some("Ana Maria"));
    assert_eq!(data.users[0].team_id, Some(RecordId::Int(6)));
    // The other record is untouched
    assert_eq!(data.users[1].name.as_deref(), Some("Ben"));
}

#[tokio::test]
async fn test_unchanged_round_trip_leaves_collection_observably_equal() {
    let server = MockServer::start().await;
    let mut view = ready_users_view(&server).await;

    Mock::given(method("PUT"))
        .and(path("/users/3/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": 3,
            "name": "Ana",
            "email": "ana@example.com",
            "role": "member",
            "team_id": 5
        })))
        .mount(&server)
        .await;

    let ViewState::Ready(before) = view.state() else {
        panic!("not ready");
    };
    let before = before.users.clone();

    view.open_edit(&RecordId::Int(3));
    view.submit_edit(&test_client(&server)).await.expect("submit ok");

    let ViewState::Ready(after) = view.state() else {
        panic!("not ready");
    };
    assert_eq!(after.users, before);
}

#[tokio::test]
async fn test_failed_submit_keeps_form_open_and_collection_unchanged() {
    let server = MockServer::start().await;
    let mut view = ready_users_view(&server).await;

    Mock::given(method("PUT"))
        .and(path("/users/3/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("server broke"))
        .mount(&server)
        .await;

    view.open_edit(&RecordId::Int(3));
    view.form_mut().unwrap().set_name("Doomed Edit");

    let err = view.submit_edit(&test_client(&server)).await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 500, .. }));

    // Snapshot preserved for the operator to retry
    assert_eq!(view.edit().form().unwrap().name, "Doomed Edit");
    // No partial or optimistic write happened
    let ViewState::Ready(data) = view.state() else {
        panic!("not ready");
    };
    assert_eq!(data.users[0].name.as_deref(), Some("Ana"));
}

#[tokio::test]
async fn test_garbage_team_id_submits_null() {
    let server = MockServer::start().await;
    let mut view = ready_users_view(&server).await;

    Mock::given(method("PUT"))
        .and(path("/users/3/"))
        .and(body_json(json!({
            "_id": 3,
            "name": "Ana",
            "email": "ana@example.com",
            "role": "member",
            "team_id": null
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"_id": 3, "name": "Ana"})))
        .expect(1)
        .mount(&server)
        .await;

    view.open_edit(&RecordId::Int(3));
    view.form_mut().unwrap().set_team_id("not-a-number");
    view.submit_edit(&test_client(&server)).await.expect("submit ok");
}

#[tokio::test]
async fn test_team_options_derive_from_teams_collection() {
    let server = MockServer::start().await;
    let view = ready_users_view(&server).await;

    let options = view.team_options();
    assert_eq!(options.len(), 3);
    assert_eq!(options[0], (None, "No Team".to_string()));
    assert_eq!(options[1], (Some(RecordId::Int(5)), "Red".to_string()));
    assert_eq!(options[2], (Some(RecordId::Int(6)), "Blue".to_string()));
}

#[tokio::test]
async fn test_submit_with_no_open_form_is_a_no_op() {
    let server = MockServer::start().await;
    let mut view = ready_users_view(&server).await;

    view.submit_edit(&test_client(&server)).await.expect("no-op");
    assert!(!view.edit().is_open());
}
