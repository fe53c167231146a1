//! End-to-end tests for the remember HTTP API.
//!
//! Tests exercise the full stack: HTTP request -> axum router -> handler ->
//! DocumentService -> core mutation -> store -> HTTP response.
//!
//! Each test builds a fresh router over an in-memory store and sends
//! requests with `tower::ServiceExt::oneshot`, without a network server.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

use remember_server::config::{ServerConfig, StoreBackend};
use remember_server::router::build_router;
use remember_server::state::AppState;

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

fn test_app() -> Router {
    build_router(AppState::in_memory())
}

/// Sends a request and returns (status, content-type, raw body).
async fn send(
    app: &Router,
    method: Method,
    path: &str,
    body: Option<Vec<u8>>,
) -> (StatusCode, String, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(path);
    let body = match body {
        Some(bytes) => {
            builder = builder.header("content-type", "application/json");
            Body::from(bytes)
        }
        None => Body::empty(),
    };
    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, content_type, bytes.to_vec())
}

/// Sends a POST request with a JSON body and returns (status, json).
async fn post_json(
    app: &Router,
    path: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let (status, _, bytes) = send(app, Method::POST, path, Some(serde_json::to_vec(&body).unwrap())).await;
    let json = serde_json::from_slice(&bytes).unwrap_or(json!(null));
    (status, json)
}

/// Sends a GET request and returns (status, json).
async fn get_json(app: &Router, path: &str) -> (StatusCode, serde_json::Value) {
    let (status, _, bytes) = send(app, Method::GET, path, None).await;
    let json = serde_json::from_slice(&bytes).unwrap_or(json!(null));
    (status, json)
}

async fn data(app: &Router) -> serde_json::Value {
    let (status, body) = get_json(app, "/api/data").await;
    assert_eq!(status, StatusCode::OK);
    body
}

async fn create_todo(app: &Router, content: &str) {
    let (status, body) = post_json(app, "/api/todos", json!({ "content": content })).await;
    assert_eq!(status, StatusCode::OK, "create todo failed: {:?}", body);
    assert_eq!(body, json!({ "success": true }));
}

fn pending_contents(doc: &serde_json::Value) -> Vec<String> {
    doc["todos"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["content"].as_str().unwrap().to_string())
        .collect()
}

fn pending_id(doc: &serde_json::Value, content: &str) -> String {
    doc["todos"]
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["content"] == content)
        .and_then(|t| t["id"].as_str())
        .unwrap()
        .to_string()
}

// ---------------------------------------------------------------------------
// Document fetch / replace
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_fetch_empty_store_returns_default_shape() {
    let app = test_app();
    let (status, content_type, bytes) = send(&app, Method::GET, "/api/data", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "application/json");
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "notes": [], "todos": [], "completedTodos": [] }));
}

#[tokio::test]
async fn test_replace_then_fetch_roundtrips() {
    let app = test_app();
    let document = json!({
        "notes": [{ "id": "1", "title": "t", "content": "<p>c</p>", "date": "2024-01-01T00:00:00.000Z" }],
        "todos": [{ "id": "2", "content": "x", "completed": false, "date": "2024-01-02T00:00:00.000Z" }],
        "completedTodos": [],
        "theme": "dark"
    });

    let (status, body) = post_json(&app, "/api/data", document.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    assert_eq!(data(&app).await, document);
}

#[tokio::test]
async fn test_replace_with_malformed_json_is_500() {
    let app = test_app();
    let (status, content_type, bytes) =
        send(&app, Method::POST, "/api/data", Some(b"{\"notes\":".to_vec())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(content_type, "application/json");
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].as_str().unwrap().contains("EOF"), "{:?}", body);

    // The stored document is untouched.
    assert_eq!(data(&app).await["notes"], json!([]));
}

// ---------------------------------------------------------------------------
// Notes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_note_scenario() {
    let app = test_app();
    let (status, note) =
        post_json(&app, "/api/notes", json!({ "title": "A", "content": "<p>x</p>" })).await;

    assert_eq!(status, StatusCode::OK);
    let id = note["id"].as_str().unwrap().to_string();
    assert!(id.parse::<u64>().is_ok(), "id should be numeric: {}", id);
    assert_eq!(note["title"], "A");
    assert_eq!(note["content"], "<p>x</p>");
    assert!(note["date"].as_str().unwrap().ends_with('Z'));

    let doc = data(&app).await;
    assert_eq!(doc["notes"][0]["id"], id.as_str());
    assert_eq!(doc["notes"][0]["title"], "A");
}

#[tokio::test]
async fn test_new_notes_are_prepended() {
    let app = test_app();
    post_json(&app, "/api/notes", json!({ "title": "first", "content": "" })).await;
    post_json(&app, "/api/notes", json!({ "id": null, "title": "second", "content": "" })).await;

    let doc = data(&app).await;
    assert_eq!(doc["notes"][0]["title"], "second");
    assert_eq!(doc["notes"][1]["title"], "first");
}

#[tokio::test]
async fn test_update_note_preserves_id() {
    let app = test_app();
    let (_, created) =
        post_json(&app, "/api/notes", json!({ "title": "draft", "content": "v1" })).await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, updated) = post_json(
        &app,
        "/api/notes",
        json!({ "id": id, "title": "final", "content": "v2" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id.as_str());

    let doc = data(&app).await;
    let notes = doc["notes"].as_array().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["id"], id.as_str());
    assert_eq!(notes[0]["title"], "final");
    assert_eq!(notes[0]["content"], "v2");
}

#[tokio::test]
async fn test_update_unknown_note_leaves_list_unchanged() {
    let app = test_app();
    post_json(&app, "/api/notes", json!({ "title": "keep", "content": "" })).await;
    let before = data(&app).await;

    let (status, _) = post_json(
        &app,
        "/api/notes",
        json!({ "id": "999", "title": "ghost", "content": "" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data(&app).await["notes"], before["notes"]);
}

#[tokio::test]
async fn test_delete_note() {
    let app = test_app();
    let (_, a) = post_json(&app, "/api/notes", json!({ "title": "a", "content": "" })).await;
    post_json(&app, "/api/notes", json!({ "title": "b", "content": "" })).await;

    let (status, body) = post_json(&app, "/api/delete-note", json!({ "id": a["id"] })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let doc = data(&app).await;
    let notes = doc["notes"].as_array().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["title"], "b");

    // Unknown id: still success, nothing removed.
    let (status, body) = post_json(&app, "/api/delete-note", json!({ "id": "nope" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));
    assert_eq!(data(&app).await["notes"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Todos
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_todo_appends_pending() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/api/todos",
        json!({ "content": "first", "startTime": "2024-05-01T09:00", "endTime": "" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));
    create_todo(&app, "second").await;

    let doc = data(&app).await;
    assert_eq!(pending_contents(&doc), vec!["first", "second"]);
    let first = &doc["todos"][0];
    assert_eq!(first["completed"], false);
    assert_eq!(first["startTime"], "2024-05-01T09:00");
    assert_eq!(first["endTime"], "");
    assert!(first["id"].as_str().unwrap().parse::<u64>().is_ok());
}

#[tokio::test]
async fn test_complete_moves_todo_to_completed() {
    let app = test_app();
    create_todo(&app, "a").await;
    create_todo(&app, "b").await;
    let id = pending_id(&data(&app).await, "a");

    let (status, _) = post_json(&app, "/api/todos", json!({ "action": "complete", "id": id })).await;
    assert_eq!(status, StatusCode::OK);

    let doc = data(&app).await;
    assert_eq!(pending_contents(&doc), vec!["b"]);
    assert_eq!(doc["completedTodos"][0]["id"], id.as_str());
    assert_eq!(doc["completedTodos"][0]["completed"], true);
}

#[tokio::test]
async fn test_move_todo_up_and_down() {
    let app = test_app();
    for content in ["a", "b", "c"] {
        create_todo(&app, content).await;
    }
    let doc = data(&app).await;
    let a = pending_id(&doc, "a");
    let c = pending_id(&doc, "c");

    // Boundaries are no-ops.
    post_json(&app, "/api/todos", json!({ "action": "move", "id": a, "direction": "up" })).await;
    post_json(&app, "/api/todos", json!({ "action": "move", "id": c, "direction": "down" })).await;
    assert_eq!(pending_contents(&data(&app).await), vec!["a", "b", "c"]);

    let (status, body) =
        post_json(&app, "/api/todos", json!({ "action": "move", "id": c, "direction": "up" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));
    assert_eq!(pending_contents(&data(&app).await), vec!["a", "c", "b"]);

    post_json(&app, "/api/todos", json!({ "action": "move", "id": a, "direction": "down" })).await;
    assert_eq!(pending_contents(&data(&app).await), vec!["c", "a", "b"]);
}

#[tokio::test]
async fn test_update_todo_merges_fields() {
    let app = test_app();
    create_todo(&app, "draft").await;
    let id = pending_id(&data(&app).await, "draft");

    let (status, _) = post_json(
        &app,
        "/api/todos",
        json!({ "id": id, "content": "final", "endTime": "2024-05-02T10:00", "completed": true }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let doc = data(&app).await;
    let todo = &doc["todos"][0];
    assert_eq!(todo["id"], id.as_str());
    assert_eq!(todo["content"], "final");
    assert_eq!(todo["endTime"], "2024-05-02T10:00");
    assert_eq!(todo["completed"], false);
}

#[tokio::test]
async fn test_todo_commands_on_unknown_id_still_succeed() {
    let app = test_app();
    create_todo(&app, "only").await;
    let before = data(&app).await;

    for body in [
        json!({ "action": "complete", "id": "missing" }),
        json!({ "action": "move", "id": "missing", "direction": "up" }),
        json!({ "id": "missing", "content": "x" }),
    ] {
        let (status, reply) = post_json(&app, "/api/todos", body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(reply, json!({ "success": true }));
    }
    assert_eq!(data(&app).await, before);
}

#[tokio::test]
async fn test_unresolvable_todo_bodies_succeed_without_change() {
    let app = test_app();
    create_todo(&app, "a").await;
    create_todo(&app, "b").await;
    let before = data(&app).await;
    let a = pending_id(&before, "a");

    for body in [
        json!({ "action": "move", "id": a, "direction": "left" }),
        json!({ "action": "move", "id": a }),
        json!({ "action": "move", "direction": "down" }),
        json!({ "action": "complete" }),
    ] {
        let (status, reply) = post_json(&app, "/api/todos", body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(reply, json!({ "success": true }));
    }
    assert_eq!(data(&app).await, before);
}

#[tokio::test]
async fn test_unknown_action_with_id_updates_todo() {
    let app = test_app();
    create_todo(&app, "draft").await;
    let id = pending_id(&data(&app).await, "draft");

    let (status, _) = post_json(
        &app,
        "/api/todos",
        json!({ "action": "archive", "id": id, "content": "renamed" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(pending_contents(&data(&app).await), vec!["renamed"]);
}

#[tokio::test]
async fn test_update_with_null_time_clears_it() {
    let app = test_app();
    post_json(
        &app,
        "/api/todos",
        json!({ "content": "standup", "startTime": "2024-05-01T09:00", "endTime": "2024-05-01T09:15" }),
    )
    .await;
    let id = pending_id(&data(&app).await, "standup");

    let (status, _) = post_json(&app, "/api/todos", json!({ "id": id, "startTime": null })).await;
    assert_eq!(status, StatusCode::OK);

    let todo = data(&app).await["todos"][0].clone();
    assert!(todo["startTime"].is_null());
    assert_eq!(todo["endTime"], "2024-05-01T09:15");
    assert_eq!(todo["content"], "standup");
}

#[tokio::test]
async fn test_document_with_null_fields_accepts_mutations() {
    let app = test_app();
    let (status, _) = post_json(
        &app,
        "/api/data",
        json!({
            "notes": [{ "id": "1", "title": null, "content": null, "date": null }],
            "todos": [{ "id": "2", "content": null, "completed": null, "date": "d" }],
            "completedTodos": null
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    create_todo(&app, "new").await;
    let (status, note) = post_json(
        &app,
        "/api/notes",
        json!({ "title": null, "content": null }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(note["title"], "");

    let doc = data(&app).await;
    assert_eq!(pending_contents(&doc), vec!["", "new"]);
    assert_eq!(doc["notes"].as_array().unwrap().len(), 2);
    assert_eq!(doc["notes"][1]["title"], "");
    assert_eq!(doc["completedTodos"], json!([]));
}

#[tokio::test]
async fn test_mutation_preserves_unknown_fields() {
    let app = test_app();
    post_json(
        &app,
        "/api/data",
        json!({
            "notes": [],
            "todos": [{ "id": "1", "content": "x", "completed": false, "date": "d", "tag": "home" }],
            "completedTodos": [],
            "theme": "dark"
        }),
    )
    .await;

    create_todo(&app, "y").await;

    let doc = data(&app).await;
    assert_eq!(doc["theme"], "dark");
    assert_eq!(doc["todos"][0]["tag"], "home");
    assert_eq!(pending_contents(&doc), vec!["x", "y"]);
}

// ---------------------------------------------------------------------------
// Routing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_unknown_api_path_is_404() {
    let app = test_app();
    let (status, _, bytes) = send(&app, Method::GET, "/api/nothing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(bytes, b"Not Found".to_vec());
}

#[tokio::test]
async fn test_wrong_method_on_api_path_is_404() {
    let app = test_app();
    let (status, _, _) = send(&app, Method::GET, "/api/notes", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _, _) = send(&app, Method::DELETE, "/api/data", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_api_paths_serve_page() {
    let app = test_app();
    for path in ["/", "/notes/123", "/anything.html"] {
        let (status, content_type, bytes) = send(&app, Method::GET, path, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type, "text/html;charset=UTF-8");
        assert!(String::from_utf8(bytes).unwrap().starts_with("<!DOCTYPE html>"));
    }
}

// ---------------------------------------------------------------------------
// Configured state
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_sqlite_backed_state_persists_across_routers() {
    let db_path = std::env::temp_dir()
        .join(format!("remember_it_{}.db", uuid::Uuid::new_v4()))
        .to_string_lossy()
        .to_string();
    let config = ServerConfig {
        db_path: db_path.clone(),
        backend: StoreBackend::Sqlite,
        ..ServerConfig::default()
    };

    let app = build_router(AppState::new(&config).unwrap());
    post_json(&app, "/api/notes", json!({ "title": "persisted", "content": "" })).await;
    drop(app);

    let app = build_router(AppState::new(&config).unwrap());
    assert_eq!(data(&app).await["notes"][0]["title"], "persisted");
    let _ = std::fs::remove_file(&db_path);
}
