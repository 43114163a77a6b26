use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use tutoring_bot::config::Config;
use tutoring_bot::store::MAX_CHAT_HISTORY;
use tutoring_bot::{build_router, AppState};

fn test_app() -> (Router, Arc<AppState>) {
    let config = Config::default();
    let state = Arc::new(AppState::from_config(&config));
    (build_router(state.clone(), &config), state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_home_and_status() {
    let (app, _) = test_app();

    let (status, body) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], "4.0");
    assert_eq!(body["features"].as_array().unwrap().len(), 10);

    send(&app, "POST", "/session/create", Some(json!({"username": "ada"}))).await;
    send(
        &app,
        "POST",
        "/drawings/ada/save",
        Some(json!({"drawing": "data:image/png;base64,AAAA"})),
    )
    .await;

    let (status, body) = send(&app, "GET", "/status", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "operational");
    assert_eq!(body["active_sessions"], 1);
    assert_eq!(body["users_with_chat_history"], 1);
    assert_eq!(body["total_drawings"], 1);
    assert_eq!(body["total_reminders"], 0);
    assert_eq!(body["answer_engine"], "knowledge_base");
}

#[tokio::test]
async fn test_ask_records_exchange_in_history() {
    let (app, _) = test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/ask",
        Some(json!({"question": "  what is photosynthesis  ", "username": "ada"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["answer"].as_str().unwrap().starts_with("**Photosynthesis**"));
    assert!(body["timestamp"].is_string());

    let (_, history) = send(&app, "GET", "/chat/ada/history", None).await;
    assert_eq!(history["count"], 2);
    assert_eq!(history["history"][0]["sender"], "user");
    assert_eq!(history["history"][0]["message"], "what is photosynthesis");
    assert_eq!(history["history"][1]["sender"], "bot");
}

#[tokio::test]
async fn test_ask_without_username_keeps_no_history() {
    let (app, state) = test_app();

    let (status, body) = send(&app, "POST", "/ask", Some(json!({"question": "xyzzy"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["answer"].as_str().unwrap().contains("'xyzzy'"));
    assert_eq!(state.chat_history.users(), 0);
}

#[tokio::test]
async fn test_ask_rejects_empty_question() {
    let (app, _) = test_app();

    let (status, body) = send(&app, "POST", "/ask", Some(json!({"question": "   "}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["answer"], "Please ask a question! I'm here to help you learn.");
}

#[tokio::test]
async fn test_session_lifecycle() {
    let (app, state) = test_app();

    let (status, body) = send(&app, "GET", "/session/ada", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Session not found");

    let (status, body) = send(&app, "POST", "/session/ada/theme", Some(json!({"theme": "dark"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Session not found");
    assert!(state.sessions.is_empty());

    let (_, body) = send(&app, "POST", "/session/ada/update", Some(json!({"topic": "gravity"}))).await;
    assert_eq!(body["status"], "created and updated");
    let (_, body) = send(&app, "POST", "/session/ada/update", Some(json!({}))).await;
    assert_eq!(body["status"], "updated");

    let (_, body) = send(
        &app,
        "POST",
        "/session/ada/quiz",
        Some(json!({"topic": "gravity", "score": 4, "total": 5})),
    )
    .await;
    assert_eq!(body["status"], "quiz score added");

    let (status, body) = send(&app, "POST", "/session/ada/theme", Some(json!({"theme": "dark"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["theme"], "dark");

    let (status, body) = send(&app, "GET", "/session/ada", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "ada");
    assert_eq!(body["questions_asked"], 2);
    assert_eq!(body["topics_covered"], json!(["gravity"]));
    assert_eq!(body["quiz_scores"]["gravity"], json!({"score": 4.0, "total": 5.0}));
    assert_eq!(body["theme_preference"], "dark");
    assert!(body["session_duration"].as_str().unwrap().starts_with("0:00:"));
}

#[tokio::test]
async fn test_quiz_on_new_user_creates_session_with_defaults() {
    let (app, _) = test_app();

    let (_, body) = send(&app, "POST", "/session/bob/quiz", Some(json!({"topic": "math"}))).await;
    assert_eq!(body["status"], "session created and quiz score added");

    let (_, body) = send(&app, "GET", "/session/bob", None).await;
    assert_eq!(body["quiz_scores"]["math"], json!({"score": 0.0, "total": 1.0}));
    assert_eq!(body["questions_asked"], 0);
}

#[tokio::test]
async fn test_quiz_accepts_fractional_scores() {
    let (app, _) = test_app();

    let (status, _) = send(
        &app,
        "POST",
        "/session/bob/quiz",
        Some(json!({"topic": "physics", "score": 3.5, "total": 4})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", "/session/bob", None).await;
    assert_eq!(body["quiz_scores"]["physics"], json!({"score": 3.5, "total": 4.0}));
}

#[tokio::test]
async fn test_create_session_requires_username() {
    let (app, _) = test_app();

    let (status, body) = send(&app, "POST", "/session/create", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Username required");
}

#[tokio::test]
async fn test_chat_save_trim_and_clear() {
    let (app, _) = test_app();

    let (status, body) = send(&app, "POST", "/chat/ada/clear", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");

    let (_, body) = send(&app, "GET", "/chat/ghost/history", None).await;
    assert_eq!(body, json!({"history": [], "count": 0}));

    for i in 0..105 {
        let (_, body) = send(
            &app,
            "POST",
            "/chat/ada/save",
            Some(json!({"message": format!("m{}", i), "sender": "bot", "timestamp": "2030-01-01T00:00:00"})),
        )
        .await;
        assert_eq!(body["status"], "message saved");
    }

    let (_, body) = send(&app, "GET", "/chat/ada/history", None).await;
    assert_eq!(body["count"], MAX_CHAT_HISTORY);
    assert_eq!(body["history"][0]["message"], "m5");
    assert_eq!(body["history"][0]["timestamp"], "2030-01-01T00:00:00");

    let (status, body) = send(&app, "POST", "/chat/ada/clear", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "chat history cleared");

    let (_, body) = send(&app, "GET", "/chat/ada/history", None).await;
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn test_session_create_registers_chat_history() {
    let (app, _) = test_app();

    send(&app, "POST", "/session/create", Some(json!({"username": "ada"}))).await;
    let (status, _) = send(&app, "POST", "/chat/ada/clear", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_reminder_routes() {
    let (app, _) = test_app();

    let (status, body) = send(&app, "DELETE", "/reminders/ada/delete/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No reminders found");

    let (status, body) = send(&app, "POST", "/reminders/ada/add", Some(json!({"title": "Exam"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Title and datetime are required");

    let (status, body) = send(
        &app,
        "POST",
        "/reminders/ada/add",
        Some(json!({"title": "Exam", "datetime": "tomorrow-ish"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid datetime format");

    let (status, body) = send(
        &app,
        "POST",
        "/reminders/ada/add",
        Some(json!({"title": "Exam", "subject": "math", "datetime": "2099-06-01T09:00", "notes": "chapter 4"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "reminder added");
    assert_eq!(body["reminder"]["id"], 1);
    assert_eq!(body["reminder"]["datetime"], "2099-06-01T09:00");
    assert!(body["reminder"].get("due_at").is_none());

    send(
        &app,
        "POST",
        "/reminders/ada/add",
        Some(json!({"title": "Missed", "datetime": "2000-01-01T09:00:00Z"})),
    )
    .await;

    let (_, body) = send(&app, "GET", "/reminders/ada", None).await;
    let reminders = body["reminders"].as_array().unwrap();
    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0]["title"], "Exam");

    let (status, body) = send(&app, "DELETE", "/reminders/ada/delete/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "reminder deleted");
    let (status, _) = send(&app, "DELETE", "/reminders/ada/delete/1", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_drawing_routes() {
    let (app, _) = test_app();

    let (status, body) = send(&app, "POST", "/drawings/ada/save", Some(json!({"title": "Empty"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Drawing data is required");

    let (status, body) = send(
        &app,
        "POST",
        "/drawings/ada/save",
        Some(json!({"drawing": "data:image/png;base64,AAAA", "subject": "geometry"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "drawing saved");
    assert_eq!(body["drawing"]["title"], "Untitled Drawing");
    assert!(body["drawing"].get("data").is_none());

    let (_, body) = send(&app, "GET", "/drawings/ada", None).await;
    assert_eq!(body["drawings"].as_array().unwrap().len(), 1);
    assert!(body["drawings"][0].get("data").is_none());

    let (status, body) = send(&app, "GET", "/drawings/ada/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["drawing"]["data"], "data:image/png;base64,AAAA");

    let (status, body) = send(&app, "GET", "/drawings/ada/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Drawing not found");

    let (status, body) = send(&app, "GET", "/drawings/bob/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No drawings found");

    let (status, _) = send(&app, "DELETE", "/drawings/ada/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "GET", "/drawings/ada/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_file_routes() {
    let (app, _) = test_app();

    let (status, body) = send(&app, "POST", "/files/ada/upload", Some(json!({"file": "AAAA"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "File data and name are required");

    let (status, body) = send(
        &app,
        "POST",
        "/files/ada/upload",
        Some(json!({
            "file": "data:image/jpeg;base64,AAAA",
            "fileName": "problem.jpg",
            "fileType": "image/jpeg",
            "question": "how do I solve this?"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "file uploaded");
    assert_eq!(body["fileId"], 1);
    assert!(body["response"]
        .as_str()
        .unwrap()
        .starts_with("I can see you've uploaded an image: 'problem.jpg'."));

    let (_, body) = send(&app, "GET", "/files/ada", None).await;
    let files = body["files"].as_array().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0]["fileName"], "problem.jpg");
    assert_eq!(files[0]["question"], "how do I solve this?");
    assert!(files[0].get("data").is_none());

    let (status, body) = send(&app, "GET", "/files/ada/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["file"]["data"], "data:image/jpeg;base64,AAAA");

    let (status, _) = send(&app, "DELETE", "/files/ada/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = send(&app, "GET", "/files/ada", None).await;
    assert_eq!(body["files"], json!([]));
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let (app, _) = test_app();

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

async fn send_raw(app: &Router, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).expect("error responses are JSON");
    (status, json)
}

#[tokio::test]
async fn test_unknown_sender_is_a_structured_validation_error() {
    let (app, state) = test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/chat/ada/save",
        Some(json!({"message": "hi", "sender": "admin"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("admin"));
    assert!(state.chat_history.get("ada").is_empty());
}

#[tokio::test]
async fn test_truncated_body_is_a_structured_validation_error() {
    let (app, _) = test_app();

    let (status, body) = send_raw(&app, "POST", "/ask", r#"{"question": "what is gra"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_non_numeric_id_is_a_structured_validation_error() {
    let (app, _) = test_app();

    for (method, uri) in [
        ("DELETE", "/reminders/ada/delete/abc"),
        ("GET", "/drawings/ada/abc"),
        ("DELETE", "/files/ada/abc"),
    ] {
        let (status, body) = send(&app, method, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{} {}", method, uri);
        assert!(body["error"].is_string(), "{} {}", method, uri);
    }
}

#[tokio::test]
async fn test_missing_content_type_is_a_structured_validation_error() {
    let (app, _) = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/session/create")
        .body(Body::from(r#"{"username": "ada"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());
}
