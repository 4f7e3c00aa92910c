//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::RenderError;
use crate::locate::{LocateError, Position};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/map", get(map_view))
        .route("/api/refresh", post(refresh))
        .route("/api/filter/toggle", post(toggle_filter))
        .route("/api/dark-mode/toggle", post(toggle_dark_mode))
        .route("/api/help/toggle", post(toggle_help))
        .route("/api/locate", post(locate))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// The map page.
async fn index_page(State(state): State<AppState>) -> Result<Response, AppError> {
    let map_state = state.app.state().await;
    let html = IndexTemplate::new(&map_state, &state.map)
        .render()
        .map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;
    Ok(Html(html).into_response())
}

/// Current map contents and control labels.
async fn map_view(State(state): State<AppState>) -> Json<MapView> {
    Json(state.app.state().await.into())
}

/// Fetch fresh station data and re-render.
async fn refresh(State(state): State<AppState>) -> Result<Json<MapView>, AppError> {
    state.app.refresh().await?;
    Ok(Json(state.app.state().await.into()))
}

/// Switch between finding bikes and finding docks.
async fn toggle_filter(State(state): State<AppState>) -> Result<Json<MapView>, AppError> {
    state.app.toggle_filter().await?;
    Ok(Json(state.app.state().await.into()))
}

/// Switch between the light and dark base map.
async fn toggle_dark_mode(State(state): State<AppState>) -> Json<MapView> {
    state.app.toggle_appearance().await;
    Json(state.app.state().await.into())
}

/// Show or hide the help panel.
async fn toggle_help(State(state): State<AppState>) -> Json<MapView> {
    state.app.toggle_help().await;
    Json(state.app.state().await.into())
}

/// Mark the user's position from a browser geolocation fix.
async fn locate(
    State(state): State<AppState>,
    Json(position): Json<Position>,
) -> Result<Json<MapView>, AppError> {
    state.app.locate(position).await?;
    Ok(Json(state.app.state().await.into()))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    BadGateway { message: String },
    Unavailable { message: String },
    Internal { message: String },
}

impl From<RenderError> for AppError {
    fn from(e: RenderError) -> Self {
        let message = format!("Stations unavailable: {e}");
        match e {
            RenderError::FeedUnavailable(_) => AppError::Unavailable { message },
            RenderError::JoinMismatch { .. } => AppError::BadGateway { message },
            RenderError::Template { .. } => AppError::Internal { message },
        }
    }
}

impl From<LocateError> for AppError {
    fn from(e: LocateError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Unavailable { message } => (StatusCode::SERVICE_UNAVAILABLE, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "bad request");
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
