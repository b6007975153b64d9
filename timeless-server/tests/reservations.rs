mod common;

use chrono::Duration;
use common::*;
use http::StatusCode;
use serde_json::json;
use shared::factories::{ReservationFactory, TableFactory, form_fields};
use shared::models::{DiningTable, Reservation, ReservationForm};
use timeless_server::db::repository::{self, reservation};

#[tokio::test]
async fn test_create_redirects_to_list() {
    let app = TestApp::new().await;
    let form = ReservationFactory::build();

    let response = app.post_form("/reservations/create", &form_fields(&form)).await;
    assert_redirect(&response, "/reservations/");

    let rows = repository::find_all::<Reservation>(&app.state.pool).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].comment, form.comment);
    assert_eq!(rows[0].num_of_persons, form.num_of_persons);
    assert_eq!(rows[0].end_time - rows[0].start_time, Duration::days(3));
}

#[tokio::test]
async fn test_create_links_tables() {
    let app = TestApp::new().await;
    let table = repository::create::<DiningTable>(&app.state.pool, &TableFactory::build())
        .await
        .unwrap();
    let mut fields = form_fields(&ReservationFactory::build());
    fields.push(("tables".into(), table.id.to_string()));

    let response = app.post_form("/reservations/create", &fields).await;
    assert_eq!(response.status(), StatusCode::FOUND);

    let rows = reservation::find_all_with_tables(&app.state.pool).await.unwrap();
    assert_eq!(rows[0].tables, vec![table.id]);
}

#[tokio::test]
async fn test_create_with_missing_field_rerenders() {
    let app = TestApp::new().await;
    let fields = without(&form_fields(&ReservationFactory::build()), "num_of_persons");

    let response = app.post_form("/reservations/create", &fields).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("flash-error"), "{body}");
    assert!(body.contains("missing field"), "{body}");

    assert_eq!(repository::count::<Reservation>(&app.state.pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_with_inverted_period_rerenders() {
    let app = TestApp::new().await;
    let form = ReservationFactory::build();
    let mut fields = form_fields(&form);
    set(
        &mut fields,
        "end_time",
        &(form.start_time - Duration::hours(1)).to_string(),
    );

    let response = app.post_form("/reservations/create", &fields).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("End time must be after start time"), "{body}");
    assert_eq!(repository::count::<Reservation>(&app.state.pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_with_unknown_table_rolls_back() {
    let app = TestApp::new().await;
    let mut fields = form_fields(&ReservationFactory::build());
    fields.push(("tables".into(), "999".into()));

    let response = app.post_form("/reservations/create", &fields).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("flash-error"));
    assert_eq!(repository::count::<Reservation>(&app.state.pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_removes_from_list() {
    let app = TestApp::new().await;
    let created = repository::create::<Reservation>(&app.state.pool, &ReservationFactory::build())
        .await
        .unwrap();

    let before = body_text(app.get("/reservations/").await).await;
    assert!(before.contains(&created.comment));

    let response = app
        .post_form(&format!("/reservations/delete/{}", created.id), &[])
        .await;
    assert_redirect(&response, "/reservations/");

    let after = body_text(app.get("/reservations/").await).await;
    assert!(!after.contains(&created.comment));
}

#[tokio::test]
async fn test_delete_missing_is_not_found() {
    let app = TestApp::new().await;
    let response = app.post_form("/reservations/delete/4242", &[]).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["code"], 4001);
}

#[tokio::test]
async fn test_edit_is_a_placeholder() {
    let app = TestApp::new().await;
    let created = repository::create::<Reservation>(&app.state.pool, &ReservationFactory::build())
        .await
        .unwrap();
    let mut fields = form_fields(&ReservationForm::from(&created));
    set(&mut fields, "comment", "changed");

    let response = app
        .post_form(&format!("/reservations/edit/{}", created.id), &fields)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Edit not yet implemented"));
    assert!(body.contains(&format!("/reservations/edit/{}", created.id)));

    let stored = repository::find_by_id::<Reservation>(&app.state.pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.comment, created.comment);
}

#[tokio::test]
async fn test_edit_form_preselects_linked_tables() {
    let app = TestApp::new().await;
    let linked = repository::create::<DiningTable>(&app.state.pool, &TableFactory::build())
        .await
        .unwrap();
    let other = repository::create::<DiningTable>(&app.state.pool, &TableFactory::build())
        .await
        .unwrap();
    let mut form = ReservationFactory::build();
    form.tables = vec![linked.id];
    let created = repository::create::<Reservation>(&app.state.pool, &form)
        .await
        .unwrap();

    let response = app.get(&format!("/reservations/edit/{}", created.id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(
        body.contains(&format!(r#"<option value="{}" selected>"#, linked.id)),
        "{body}"
    );
    assert!(
        body.contains(&format!(r#"<option value="{}">"#, other.id)),
        "{body}"
    );
}

#[tokio::test]
async fn test_create_form_renders() {
    let app = TestApp::new().await;
    let response = app.get("/reservations/create").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains(r#"action="/reservations/create""#));
    assert!(body.contains(r#"name="num_of_persons""#));
}

#[tokio::test]
async fn test_demo_payload() {
    let app = TestApp::new().await;
    let response = app.json("GET", "/api/reservations/7", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "items": [{
                "id": 1,
                "start_time": "0001-01-01T00:00:00",
                "end_time": "0001-01-01T00:00:00",
                "customer_id": 1,
                "num_of_persons": 1,
                "comment": "Test",
                "status": 2
            }]
        })
    );
}
