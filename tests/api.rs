use adapter::store::AppStore;
use api::route::routes;
use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use registry::AppRegistry;
use serde_json::{json, Value};
use shared::config::AppConfig;
use tower::ServiceExt;

fn app() -> Router {
    let app_config = AppConfig::new().unwrap();
    let store = AppStore::new();
    store.seed().unwrap();
    Router::new()
        .merge(routes())
        .with_state(AppRegistry::new(store, &app_config))
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn send_json(method: &str, uri: &str, body: Value, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn session_cookie(response: &Response<Body>) -> String {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("response should carry a session cookie")
        .to_str()
        .unwrap();
    assert!(set_cookie.starts_with("auth-token="));
    assert!(set_cookie.contains("HttpOnly"));
    set_cookie.split(';').next().unwrap().to_string()
}

async fn login(app: &Router, email: &str, password: &str) -> String {
    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/auth/login",
            json!({ "email": email, "password": password }),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    session_cookie(&response)
}

#[tokio::test]
async fn login_returns_safe_user_and_session_cookie() {
    let app = app();
    let response = app
        .oneshot(send_json(
            "POST",
            "/api/auth/login",
            json!({ "email": "admin@system.com", "password": "admin123" }),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    session_cookie(&response);

    let body = body_json(response).await;
    assert_eq!(body["user"]["email"], "admin@system.com");
    assert_eq!(body["user"]["role"], "admin");
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("passwordHash").is_none());
    assert!(body["user"].get("faceDescriptor").is_none());
}

#[tokio::test]
async fn login_with_unknown_email_is_unauthorized() {
    let app = app();
    let response = app
        .oneshot(send_json(
            "POST",
            "/api/auth/login",
            json!({ "email": "nobody@system.com", "password": "admin123" }),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn login_without_password_is_bad_request() {
    let app = app();
    let response = app
        .oneshot(send_json(
            "POST",
            "/api/auth/login",
            json!({ "email": "admin@system.com" }),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Email and password are required");
}

#[tokio::test]
async fn whoami_requires_a_session() {
    let app = app();

    let response = app.clone().oneshot(get("/api/auth/me", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let cookie = login(&app, "alice@student.com", "student123").await;
    let response = app
        .oneshot(get("/api/auth/me", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["user"]["email"], "alice@student.com");
}

#[tokio::test]
async fn signup_rejects_duplicate_email() {
    let app = app();
    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/auth/signup",
            json!({ "name": "Alice Again", "email": "alice@student.com", "password": "pw" }),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Email already registered");

    let response = app
        .oneshot(send_json(
            "POST",
            "/api/auth/signup",
            json!({ "name": "Frank Green", "email": "frank@student.com", "password": "pw" }),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    session_cookie(&response);
    let body = body_json(response).await;
    assert_eq!(body["user"]["role"], "student");
}

#[tokio::test]
async fn face_login_matches_only_enrolled_descriptors() {
    let app = app();
    let descriptor = [0.1, 0.2, 0.3, 0.4];

    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/auth/signup",
            json!({
                "name": "Grace Lee",
                "email": "grace@student.com",
                "password": "pw",
                "faceDescriptor": descriptor,
            }),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // exact descriptor: distance 0, confidence 1
    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/auth/login-face",
            json!({ "faceDescriptor": descriptor }),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    session_cookie(&response);
    let body = body_json(response).await;
    assert_eq!(body["user"]["email"], "grace@student.com");
    assert_eq!(body["confidence"].as_f64().unwrap(), 1.0);

    // far away: best distance exceeds the match threshold
    let response = app
        .oneshot(send_json(
            "POST",
            "/api/auth/login-face",
            json!({ "faceDescriptor": [9.0, 9.0, 9.0, 9.0] }),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        "No matching face found. Please try again or use email login."
    );
}

#[tokio::test]
async fn class_creation_is_admin_only() {
    let app = app();

    let student = login(&app, "alice@student.com", "student123").await;
    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/classes",
            json!({ "name": "Ethics", "room": "Room D404" }),
            Some(&student),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Forbidden");

    let admin = login(&app, "admin@system.com", "admin123").await;
    let response = app
        .oneshot(send_json(
            "POST",
            "/api/classes",
            json!({ "name": "Ethics", "room": "Room D404" }),
            Some(&admin),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["class"]["name"], "Ethics");
    assert_eq!(body["class"]["description"], "");
    assert_eq!(body["class"]["capacity"], 30);
}

#[tokio::test]
async fn class_creation_requires_name_and_room() {
    let app = app();
    let admin = login(&app, "admin@system.com", "admin123").await;

    let response = app
        .oneshot(send_json(
            "POST",
            "/api/classes",
            json!({ "name": "Ethics" }),
            Some(&admin),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Name and room are required");
}

#[tokio::test]
async fn class_list_is_public() {
    let app = app();
    let response = app.oneshot(get("/api/classes", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["classes"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn booking_creation_requires_all_fields() {
    let app = app();
    let lecturer = login(&app, "sarah@university.com", "lecturer123").await;

    let classes = body_json(app.clone().oneshot(get("/api/classes", None)).await.unwrap()).await;
    let class_id = classes["classes"][0]["id"].as_str().unwrap().to_owned();

    let response = app
        .oneshot(send_json(
            "POST",
            "/api/bookings",
            json!({ "classId": class_id, "date": "2026-09-01", "startTime": "09:00" }),
            Some(&lecturer),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "All fields are required");
}

#[tokio::test]
async fn lecturers_only_see_their_own_bookings() {
    let app = app();
    let lecturer = login(&app, "sarah@university.com", "lecturer123").await;

    let response = app
        .oneshot(get("/api/bookings", Some(&lecturer)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let bookings = body["bookings"].as_array().unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0]["startTime"], "09:00");
}

#[tokio::test]
async fn cancelling_a_booking_notifies_every_student() {
    let app = app();
    let lecturer = login(&app, "sarah@university.com", "lecturer123").await;

    let bookings = body_json(
        app.clone()
            .oneshot(get("/api/bookings", Some(&lecturer)))
            .await
            .unwrap(),
    )
    .await;
    let booking_id = bookings["bookings"][0]["id"].as_str().unwrap().to_owned();

    let response = app
        .clone()
        .oneshot(send_json(
            "PUT",
            &format!("/api/bookings/{booking_id}"),
            json!({ "status": "cancelled" }),
            Some(&lecturer),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["booking"]["status"], "cancelled");

    // every student got exactly one cancellation notice, newest first
    let student = login(&app, "alice@student.com", "student123").await;
    let body = body_json(
        app.oneshot(get("/api/notifications", Some(&student)))
            .await
            .unwrap(),
    )
    .await;
    let notifications = body["notifications"].as_array().unwrap();
    let cancelled: Vec<_> = notifications
        .iter()
        .filter(|n| n["title"] == "Class Cancelled")
        .collect();
    assert_eq!(cancelled.len(), 1);
    assert_eq!(notifications[0]["title"], "Class Cancelled");
    assert_eq!(notifications[0]["type"], "cancellation");
}

#[tokio::test]
async fn attendance_marking_is_idempotent() {
    let app = app();
    let student = login(&app, "alice@student.com", "student123").await;

    let bookings = body_json(
        app.clone()
            .oneshot(get("/api/bookings", Some(&student)))
            .await
            .unwrap(),
    )
    .await;
    let booking_id = bookings["bookings"][0]["id"].as_str().unwrap().to_owned();
    let attendance_uri = format!("/api/bookings/{booking_id}/attendance");

    let before = body_json(app.clone().oneshot(get(&attendance_uri, None)).await.unwrap()).await;
    let count = before["attendance"].as_array().unwrap().len();

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(send_json("POST", &attendance_uri, json!({}), Some(&student)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let after = body_json(app.oneshot(get(&attendance_uri, None)).await.unwrap()).await;
    assert_eq!(after["attendance"].as_array().unwrap().len(), count);
}

#[tokio::test]
async fn marking_unknown_notification_read_is_not_found() {
    let app = app();
    let student = login(&app, "alice@student.com", "student123").await;

    let response = app
        .oneshot(send_json(
            "PATCH",
            "/api/notifications/00000000-0000-0000-0000-000000000000",
            json!({}),
            Some(&student),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Notification not found");
}

#[tokio::test]
async fn report_is_admin_only_and_summarizes_bookings() {
    let app = app();

    let student = login(&app, "alice@student.com", "student123").await;
    let response = app
        .clone()
        .oneshot(send_json("POST", "/api/reports", json!({}), Some(&student)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let admin = login(&app, "admin@system.com", "admin123").await;
    let response = app
        .oneshot(send_json("POST", "/api/reports", json!({}), Some(&admin)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["summary"]["totalBookings"], 2);
    assert_eq!(body["summary"]["scheduledBookings"], 2);
    assert_eq!(body["summary"]["cancelledBookings"], 0);
    assert_eq!(body["summary"]["totalAttendance"], 2);
    assert_eq!(body["summary"]["averageAttendance"], 1);

    let rows = body["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["className"], "Introduction to Computer Science");
    assert_eq!(rows[0]["time"], "09:00 - 11:00");
}

#[tokio::test]
async fn user_list_filters_by_role() {
    let app = app();
    let admin = login(&app, "admin@system.com", "admin123").await;

    let body = body_json(
        app.oneshot(get("/api/users?role=lecturer", Some(&admin)))
            .await
            .unwrap(),
    )
    .await;
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    for user in users {
        assert_eq!(user["role"], "lecturer");
        assert!(user.get("password").is_none());
        assert!(user.get("passwordHash").is_none());
        assert!(user.get("faceDescriptor").is_none());
    }
}

#[tokio::test]
async fn logout_expires_the_session_cookie() {
    let app = app();
    let response = app
        .oneshot(send_json("POST", "/api/auth/logout", json!({}), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned();
    assert!(set_cookie.starts_with("auth-token="));
    assert!(set_cookie.contains("Max-Age=0"));

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn health_check_works() {
    let app = app();
    let response = app.oneshot(get("/api/health", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
