//! Integration tests for the HTTP adapter.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tictactoe::SharedEngine;
use tictactoe::server::router;
use tower::util::ServiceExt;

fn app() -> Router {
    router(SharedEngine::new())
}

fn empty_board() -> Value {
    Value::Array(vec![Value::Null; 9])
}

async fn send(app: &Router, method: &str, path: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");
    let request = match body {
        Some(value) => builder
            .body(Body::from(serde_json::to_vec(&value).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

async fn make_move(app: &Router, position: usize) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        "/api/game/moves",
        Some(json!({ "position": position })),
    )
    .await
}

#[tokio::test]
async fn test_health() {
    let app = app();
    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert!(body["timestamp"].is_string());
    assert!(body["uptime_secs"].is_u64());
}

#[tokio::test]
async fn test_new_game_snapshot() {
    let app = app();
    let (status, body) = send(&app, "GET", "/api/game", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["board"], empty_board());
    assert_eq!(body["current_player"], "X");
    assert_eq!(body["status"]["state"], "active");
}

#[tokio::test]
async fn test_move_updates_board_and_turn() {
    let app = app();
    let (status, body) = make_move(&app, 4).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["board"][4], "X");
    assert_eq!(body["current_player"], "O");
}

#[tokio::test]
async fn test_occupied_square_returns_unchanged_snapshot() {
    let app = app();
    make_move(&app, 4).await;
    let (status, body) = make_move(&app, 4).await;

    // Ignored, not an error: repeated clicks are UI noise.
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["board"][4], "X");
    assert_eq!(body["current_player"], "O");
}

#[tokio::test]
async fn test_out_of_range_position_is_rejected() {
    let app = app();
    let (status, body) = make_move(&app, 9).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["error"].as_str().unwrap().contains("out of range"),
        "unexpected error body: {body}"
    );
}

#[tokio::test]
async fn test_win_reported_with_line_and_scored() {
    let app = app();
    for position in [0, 3, 1, 4] {
        make_move(&app, position).await;
    }
    let (_, body) = make_move(&app, 2).await;

    assert_eq!(body["status"]["state"], "won");
    assert_eq!(body["status"]["player"], "X");
    assert_eq!(body["status"]["line"], json!([0, 1, 2]));
    assert_eq!(body["scores"]["x_wins"], 1);

    let (status, stats) = send(&app, "GET", "/api/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["scores"]["x_wins"], 1);
    assert_eq!(stats["games_played"], 1);
    assert_eq!(stats["status"]["state"], "won");
}

#[tokio::test]
async fn test_reset_game_keeps_scores() {
    let app = app();
    for position in [0, 3, 1, 4, 2] {
        make_move(&app, position).await;
    }

    let (status, body) = send(&app, "POST", "/api/game/reset", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["board"], empty_board());
    assert_eq!(body["current_player"], "X");
    assert_eq!(body["status"]["state"], "active");
    assert_eq!(body["scores"]["x_wins"], 1);

    let (_, body) = send(&app, "POST", "/api/scores/reset", None).await;
    assert_eq!(body["scores"]["x_wins"], 0);
    assert_eq!(body["scores"]["o_wins"], 0);
    assert_eq!(body["scores"]["draws"], 0);
}

#[tokio::test]
async fn test_random_move_marks_one_cell() {
    let app = app();
    let (status, body) = send(&app, "POST", "/api/game/random-move", None).await;

    assert_eq!(status, StatusCode::OK);
    let marked = body["board"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|cell| !cell.is_null())
        .count();
    assert_eq!(marked, 1);
    assert_eq!(body["current_player"], "O");
}
