//! End-to-end tests for the author endpoints, driving the full router
//! in-process.

use axum::http::StatusCode;
use serde_json::json;

use crate::common;

#[tokio::test]
async fn author_details_returns_not_found_for_unknown_id() {
    let (app, _state) = common::test_app().await;

    let (status, body) = common::get(&app, "/author/author-details/some-not-existing-id").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn all_authors_returns_every_registered_author() {
    let (app, state) = common::test_app().await;
    common::seed_author(
        &state.repository.pool,
        "janeAu",
        "Jane Austen",
        Some("English"),
        None,
    )
    .await;
    common::seed_author(
        &state.repository.pool,
        "MTwain",
        "Mark Twain",
        Some("American"),
        None,
    )
    .await;

    let (status, body) = common::get(&app, "/author/all-authors").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    let authors = body["data"].as_array().expect("data should be an array");
    assert_eq!(authors.len(), 2);
}

#[tokio::test]
async fn all_authors_returns_empty_list_when_none_registered() {
    let (app, _state) = common::test_app().await;

    let (status, body) = common::get(&app, "/author/all-authors").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn register_author_by_fullname_returns_success() {
    let (app, _state) = common::test_app().await;
    let new_author = json!({
        "full_name": "Victor Hugo",
        "nationality": "French",
        "biography": "Famous French writer..."
    });

    let (status, body) =
        common::post_json(&app, "/author/register-author-by-fullname", new_author).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["id"], json!("VHugo"));

    let (status, body) = common::get(&app, "/author/author-details/VHugo").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["full_name"], json!("Victor Hugo"));
}

#[tokio::test]
async fn register_author_with_blank_name_is_rejected() {
    let (app, _state) = common::test_app().await;

    let (status, body) = common::post_json(
        &app,
        "/author/register-author-by-fullname",
        json!({ "full_name": "   " }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn update_author_changes_are_visible_on_fetch() {
    let (app, state) = common::test_app().await;
    common::seed_author(
        &state.repository.pool,
        "MTwain",
        "Mark Twain",
        Some("American"),
        Some("Writer from Missouri..."),
    )
    .await;
    let updated_dto = json!({
        "full_name": "Mark Twain",
        "nationality": "American",
        "biography": "American author known for his novels ..."
    });

    let (status, _body) =
        common::put_json(&app, "/author/update-author/MTwain", updated_dto).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = common::get(&app, "/author/author-details/MTwain").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], json!("MTwain"));
    assert_eq!(
        body["data"]["biography"],
        json!("American author known for his novels ...")
    );
}

#[tokio::test]
async fn update_author_unknown_id_returns_not_found() {
    let (app, _state) = common::test_app().await;

    let (status, body) = common::put_json(
        &app,
        "/author/update-author/some-not-existing-id",
        json!({ "full_name": "Nobody" }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn delete_author_removes_from_db() {
    let (app, state) = common::test_app().await;
    common::seed_author(
        &state.repository.pool,
        "MTwain",
        "Mark Twain",
        Some("American"),
        None,
    )
    .await;

    let (status, _body) = common::get(&app, "/author/author-details/MTwain").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = common::delete(&app, "/author/delete-author/MTwain").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    let (status, _body) = common::get(&app, "/author/author-details/MTwain").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_author_unknown_id_still_succeeds() {
    let (app, _state) = common::test_app().await;

    let (status, body) = common::delete(&app, "/author/delete-author/some-not-existing-id").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
}

#[tokio::test]
async fn health_check_reports_healthy() {
    let (app, _state) = common::test_app().await;

    let (status, body) = common::get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("healthy"));
}
