mod common;

use common::*;
use http::StatusCode;
use serde_json::json;
use shared::factories::ReservationFactory;
use shared::models::Reservation;
use timeless_server::db::repository;

async fn reservation_id(app: &TestApp) -> i64 {
    repository::create::<Reservation>(&app.state.pool, &ReservationFactory::build())
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn test_requires_token() {
    let app = TestApp::new().await;

    let response = app.json("GET", "/api/comments", None, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], 1001);

    let response = app
        .json("GET", "/api/comments", Some("not-a-jwt"), None)
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_crud_with_token() {
    let app = TestApp::new().await;
    let token = app.token();
    let reservation_id = reservation_id(&app).await;

    let response = app
        .json(
            "POST",
            "/api/comments",
            Some(&token),
            Some(json!({ "reservation_id": reservation_id, "body": "Allergic to nuts" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    let id = created["data"]["id"].as_i64().unwrap();
    assert_eq!(created["data"]["body"], "Allergic to nuts");

    let list = body_json(app.json("GET", "/api/comments", Some(&token), None).await).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 1);

    let response = app
        .json(
            "PUT",
            &format!("/api/comments/{id}"),
            Some(&token),
            Some(json!({ "reservation_id": reservation_id, "body": "Window seat" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["body"], "Window seat");

    let response = app
        .json("DELETE", &format!("/api/comments/{id}"), Some(&token), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .json("GET", &format!("/api/comments/{id}"), Some(&token), None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], 4201);
}

#[tokio::test]
async fn test_invalid_body_is_rejected() {
    let app = TestApp::new().await;
    let token = app.token();
    let reservation_id = reservation_id(&app).await;

    let response = app
        .json(
            "POST",
            "/api/comments",
            Some(&token),
            Some(json!({ "reservation_id": reservation_id, "body": "" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["details"]["body"].is_array());
}

#[tokio::test]
async fn test_comments_cascade_with_reservation() {
    let app = TestApp::new().await;
    let token = app.token();
    let reservation_id = reservation_id(&app).await;
    app.json(
        "POST",
        "/api/comments",
        Some(&token),
        Some(json!({ "reservation_id": reservation_id, "body": "Late arrival" })),
    )
    .await;

    let response = app
        .post_form(&format!("/reservations/delete/{reservation_id}"), &[])
        .await;
    assert_eq!(response.status(), StatusCode::FOUND);

    let list = body_json(app.json("GET", "/api/comments", Some(&token), None).await).await;
    assert!(list["data"].as_array().unwrap().is_empty());
}
