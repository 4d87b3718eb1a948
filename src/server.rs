//! HTTP adapter exposing the engine as a JSON API.
//!
//! The server owns a [`SharedEngine`] and consumes it strictly through
//! the engine's operations and read-only accessors; no game logic lives
//! here. Every handler locks the engine for the duration of one
//! operation, mutates (or not), and returns a fresh snapshot.

use crate::game::{GameEngine, GameStatus, Player, Position, Scores};
use crate::session::SharedEngine;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{info, instrument, warn};

/// Server bind configuration.
#[derive(Debug, Clone, Getters)]
pub struct ServerConfig {
    /// Host to bind.
    host: String,
    /// Port to bind.
    port: u16,
}

impl ServerConfig {
    /// Creates a new server configuration.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

/// Error surfaced to HTTP clients.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ApiError {
    /// Cell index outside the 3x3 board.
    #[display("position {_0} is out of range (expected 0-8)")]
    PositionOutOfRange(usize),
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(error = %self, "rejecting request");
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

/// Wire shape for rejected requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable description of the rejection.
    pub error: String,
}

/// Game status as serialized on the wire, with the winning line as
/// board indices.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum StatusDto {
    /// Game is ongoing.
    Active,
    /// Game ended in a win.
    Won {
        /// The winning player.
        player: Player,
        /// Indices of the winning line, in line order.
        line: [usize; 3],
    },
    /// Game ended in a draw.
    Draw,
}

impl From<GameStatus> for StatusDto {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::Active => StatusDto::Active,
            GameStatus::Won { player, line } => StatusDto::Won {
                player,
                line: line.map(Position::to_index),
            },
            GameStatus::Draw => StatusDto::Draw,
        }
    }
}

/// Full snapshot of the game as seen by a view layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board cells in row-major order; `null` marks an empty cell.
    pub board: Vec<Option<Player>>,
    /// Player to move.
    pub current_player: Player,
    /// Game status.
    pub status: StatusDto,
    /// Session scores.
    pub scores: Scores,
}

impl GameSnapshot {
    fn from_engine(engine: &GameEngine) -> Self {
        Self {
            board: engine.board().squares().iter().map(|sq| sq.player()).collect(),
            current_player: engine.current_player(),
            status: engine.status().into(),
            scores: engine.scores(),
        }
    }
}

/// Body for `POST /api/game/moves`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Board index to mark (0-8, row-major).
    pub position: usize,
}

/// Response for `GET /api/stats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    /// Crate version.
    pub version: String,
    /// Session scores.
    pub scores: Scores,
    /// Total finished games this session.
    pub games_played: u32,
    /// Current game status.
    pub status: StatusDto,
}

/// Response for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "OK" when the server answers at all.
    pub status: String,
    /// RFC 3339 timestamp of the response.
    pub timestamp: String,
    /// Seconds since the server started.
    pub uptime_secs: u64,
}

#[derive(Debug, Clone)]
struct AppState {
    engine: SharedEngine,
    started_at: Instant,
}

/// Builds the API router around a shared engine.
pub fn router(engine: SharedEngine) -> Router {
    let state = AppState {
        engine,
        started_at: Instant::now(),
    };

    Router::new()
        .route("/health", get(health))
        .route("/api/stats", get(stats))
        .route("/api/game", get(get_game))
        .route("/api/game/moves", post(make_move))
        .route("/api/game/random-move", post(random_move))
        .route("/api/game/reset", post(reset_game))
        .route("/api/scores/reset", post(reset_scores))
        .with_state(state)
}

/// Binds and serves the API until shutdown.
#[instrument(skip(config), fields(host = %config.host(), port = *config.port()))]
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let app = router(SharedEngine::new());

    let listener =
        tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    info!(
        "server ready at http://{}:{}/",
        config.host(),
        config.port()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "failed to listen for shutdown signal");
        return;
    }
    info!("shutdown signal received");
}

#[instrument(skip_all)]
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        uptime_secs: state.started_at.elapsed().as_secs(),
    })
}

#[instrument(skip_all)]
async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let (scores, status) = state.engine.with(|e| (e.scores(), e.status()));
    Json(StatsResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        games_played: scores.games_played(),
        scores,
        status: status.into(),
    })
}

#[instrument(skip_all)]
async fn get_game(State(state): State<AppState>) -> Json<GameSnapshot> {
    Json(state.engine.with(|engine| GameSnapshot::from_engine(engine)))
}

#[instrument(skip_all, fields(position = req.position))]
async fn make_move(
    State(state): State<AppState>,
    Json(req): Json<MoveRequest>,
) -> Result<Json<GameSnapshot>, ApiError> {
    // Input filtering happens here, at the adapter seam: the engine
    // treats an out-of-range index as a caller bug.
    let pos = Position::from_index(req.position)
        .ok_or(ApiError::PositionOutOfRange(req.position))?;

    let snapshot = state.engine.with(|engine| {
        engine.apply_move(pos);
        GameSnapshot::from_engine(engine)
    });

    Ok(Json(snapshot))
}

#[instrument(skip_all)]
async fn random_move(State(state): State<AppState>) -> Json<GameSnapshot> {
    Json(state.engine.with(|engine| {
        engine.random_move();
        GameSnapshot::from_engine(engine)
    }))
}

#[instrument(skip_all)]
async fn reset_game(State(state): State<AppState>) -> Json<GameSnapshot> {
    Json(state.engine.with(|engine| {
        engine.reset_game();
        GameSnapshot::from_engine(engine)
    }))
}

#[instrument(skip_all)]
async fn reset_scores(State(state): State<AppState>) -> Json<GameSnapshot> {
    Json(state.engine.with(|engine| {
        engine.reset_score();
        GameSnapshot::from_engine(engine)
    }))
}
