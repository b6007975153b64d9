mod common;

use common::*;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::json;
use shared::factories::{
    CompanyFactory, EmployeeFactory, FloorFactory, ItemFactory, LocationFactory, RoleFactory,
    SchemeTypeFactory, TableFactory, TableShapeFactory, form_fields,
};
use shared::models::{Company, Employee, Location};
use timeless_server::db::repository::{self, employee};

#[tokio::test]
async fn test_every_resource_accepts_factory_forms() {
    let app = TestApp::new().await;
    let cases = [
        ("/companies", form_fields(&CompanyFactory::build())),
        ("/employees", form_fields(&EmployeeFactory::build())),
        ("/items", form_fields(&ItemFactory::build())),
        ("/roles", form_fields(&RoleFactory::build())),
        ("/tables", form_fields(&TableFactory::build())),
        ("/table-shapes", form_fields(&TableShapeFactory::build())),
        ("/floors", form_fields(&FloorFactory::build())),
        ("/locations", form_fields(&LocationFactory::build())),
        ("/schemetypes", form_fields(&SchemeTypeFactory::build())),
    ];

    for (base, fields) in cases {
        let response = app.post_form(&format!("{base}/create"), &fields).await;
        assert_eq!(response.status(), StatusCode::FOUND, "{base}");
        assert_eq!(location(&response), format!("{base}/"));

        let list = app.get(&format!("{base}/")).await;
        assert_eq!(list.status(), StatusCode::OK, "{base}");
        assert!(body_text(list).await.contains(&format!("{base}/edit/1")), "{base}");
    }
}

#[tokio::test]
async fn test_employee_password_is_hashed() {
    let app = TestApp::new().await;
    let form = EmployeeFactory::build();

    let response = app.post_form("/employees/create", &form_fields(&form)).await;
    assert_eq!(response.status(), StatusCode::FOUND);

    let stored = employee::find_by_username(&app.state.pool, &form.username)
        .await
        .unwrap()
        .unwrap();
    assert_ne!(stored.password, form.password);
    assert!(stored.password.starts_with("$argon2"));

    let body = body_text(app.get(&format!("/employees/{}", stored.id)).await).await;
    assert!(body.contains(&form.username));
    assert!(!body.contains(&stored.password));
}

#[tokio::test]
async fn test_employee_username_too_long() {
    let app = TestApp::new().await;
    let mut fields = form_fields(&EmployeeFactory::build());
    set(&mut fields, "username", "abcdefghijklmnopq");

    let response = app.post_form("/employees/create", &fields).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("flash-error"));
    assert_eq!(repository::count::<Employee>(&app.state.pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_duplicate_username_rerenders() {
    let app = TestApp::new().await;
    let fields = form_fields(&EmployeeFactory::build());
    app.post_form("/employees/create", &fields).await;

    let response = app.post_form("/employees/create", &fields).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("flash-error"));
    assert!(body.contains("Employee username already exists"), "{body}");
    assert_eq!(repository::count::<Employee>(&app.state.pool).await.unwrap(), 1);
}

#[tokio::test]
async fn test_location_edit_keeps_company() {
    let app = TestApp::new().await;
    let company = repository::create::<Company>(&app.state.pool, &CompanyFactory::build())
        .await
        .unwrap();
    let mut form = LocationFactory::build();
    form.company_id = Some(company.id);
    let created = repository::create::<Location>(&app.state.pool, &form)
        .await
        .unwrap();

    let fields = LocationFactory::edit_fields();
    let response = app
        .post_form(&format!("/locations/edit/{}", created.id), &fields)
        .await;
    assert_redirect(&response, "/locations/");

    let stored = repository::find_by_id::<Location>(&app.state.pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.company_id, Some(company.id));
    assert_ne!(stored.name, created.name);
}

#[tokio::test]
async fn test_edit_missing_row_redirects() {
    let app = TestApp::new().await;
    let response = app.get("/companies/edit/9").await;
    assert_redirect(&response, "/companies/");

    let response = app
        .post_form("/companies/edit/9", &form_fields(&CompanyFactory::build()))
        .await;
    assert_redirect(&response, "/companies/");
    assert_eq!(repository::count::<Company>(&app.state.pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;
    let response = app.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn test_request_id_on_every_response() {
    let app = TestApp::new().await;
    for uri in ["/reservations/", "/companies/", "/reservations/settings/"] {
        let response = app.get(uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert!(response.headers().contains_key("x-request-id"), "{uri}");
    }

    let response = app
        .send(
            Request::get("/health")
                .header("x-request-id", "table-7")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(response.headers()["x-request-id"], "table-7");
}

#[tokio::test]
async fn test_login_issues_usable_token() {
    let app = TestApp::new().await;
    let form = EmployeeFactory::build();
    repository::create::<Employee>(&app.state.pool, &form)
        .await
        .unwrap();

    let response = app
        .json(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "username": form.username, "password": "wrong" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .json(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "username": form.username, "password": form.password })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["employee"].get("password").is_none());
    let token = body["token"].as_str().unwrap().to_string();

    let response = app.json("GET", "/api/comments", Some(&token), None).await;
    assert_eq!(response.status(), StatusCode::OK);
}
