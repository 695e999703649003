//! HTTP endpoints
//!
//! REST API for the assistant.

use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use hostel_nexus_core::{ChatMessage, ComplaintStatus};
use hostel_nexus_persistence::{ComplaintStore, StudentDirectory};

use crate::state::AppState;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Session endpoints
        .route("/api/sessions", post(create_session))
        .route("/api/sessions/:id", get(get_session).delete(delete_session))
        .route("/api/sessions/:id/transcript", get(get_transcript))
        .route("/api/sessions", get(list_sessions))

        // Chat endpoints
        .route("/api/chat/:session_id", post(chat))
        .route("/api/chat/:session_id/cancel", post(cancel_capture))

        // Complaint endpoints
        .route("/api/complaints", get(list_complaints))
        .route("/api/complaints/:id/status", put(update_complaint_status))

        // Mess menu
        .route("/api/mess-menu", get(mess_menu))

        // Health check
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))

        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Create-session request
#[derive(Debug, Deserialize, Default)]
struct CreateSessionRequest {
    /// Bind the session to a student by email (identity lookup only)
    #[serde(default)]
    student_email: Option<String>,
}

/// Create-session response
#[derive(Debug, Serialize)]
struct CreateSessionResponse {
    session_id: String,
    student_id: Option<String>,
    greeting: String,
}

/// Create a session
async fn create_session(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<Json<CreateSessionResponse>, StatusCode> {
    let student = match &request.student_email {
        Some(email) => match state.persistence.students.find_by_email(email).await {
            Ok(Some(student)) => Some(student),
            Ok(None) => return Err(StatusCode::UNAUTHORIZED),
            Err(e) => {
                tracing::error!("Student lookup failed: {}", e);
                return Err(StatusCode::INTERNAL_SERVER_ERROR);
            }
        },
        None => None,
    };

    let session = state
        .sessions
        .create(|id| state.new_engine(id))
        .map_err(StatusCode::from)?;
    session.engine.set_student(student.clone());

    let greeting = session
        .engine
        .transcript()
        .first()
        .map(|m| m.text.clone())
        .unwrap_or_default();

    Ok(Json(CreateSessionResponse {
        session_id: session.id.clone(),
        student_id: student.map(|s| s.id),
        greeting,
    }))
}

/// Get session info
async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let session = state.sessions.get(&id).ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(serde_json::json!({
        "session_id": session.id,
        "active": session.is_active(),
        "capture_state": session.engine.capture_state().display_name(),
        "student_id": session.engine.student().map(|s| s.id),
        "message_count": session.engine.transcript().len(),
    })))
}

/// Delete session
async fn delete_session(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    state.sessions.remove(&id);
    StatusCode::NO_CONTENT
}

/// List sessions
async fn list_sessions(State(state): State<AppState>) -> Json<serde_json::Value> {
    let sessions = state.sessions.list();
    Json(serde_json::json!({
        "sessions": sessions,
        "count": sessions.len(),
    }))
}

/// Get the ordered transcript
async fn get_transcript(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ChatMessage>>, StatusCode> {
    let session = state.sessions.get(&id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(session.engine.transcript()))
}

/// Chat request
#[derive(Debug, Deserialize)]
struct ChatRequest {
    message: String,
}

/// Chat response
#[derive(Debug, Serialize)]
struct ChatResponse {
    reply: String,
    message_id: u64,
    capture_step: u8,
    message_count: usize,
}

/// Chat endpoint: one engine turn
async fn chat(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, StatusCode> {
    let session = state.sessions.get(&session_id).ok_or(StatusCode::NOT_FOUND)?;

    // Empty input never dispatches a message
    if request.message.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    session.touch();

    match session.engine.process_message(&request.message).await {
        Ok(Some(reply)) => Ok(Json(ChatResponse {
            reply: reply.text,
            message_id: reply.id,
            capture_step: session.engine.capture_state().step(),
            message_count: session.engine.transcript().len(),
        })),
        // The session closed before the reply was due
        Ok(None) => Err(StatusCode::GONE),
        Err(e) => {
            tracing::error!("Chat error: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Cancel an in-progress complaint draft
async fn cancel_capture(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let session = state.sessions.get(&session_id).ok_or(StatusCode::NOT_FOUND)?;
    session.touch();

    let cancelled = session.engine.cancel_capture();
    Ok(Json(serde_json::json!({ "cancelled": cancelled })))
}

/// Complaint list filter
#[derive(Debug, Deserialize, Default)]
struct ComplaintQuery {
    #[serde(default)]
    student_id: Option<String>,
}

/// List complaints
async fn list_complaints(
    State(state): State<AppState>,
    Query(query): Query<ComplaintQuery>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let result = match &query.student_id {
        Some(student_id) => state.persistence.complaints.list_for_student(student_id).await,
        None => state.persistence.complaints.list().await,
    };

    match result {
        Ok(complaints) => Ok(Json(serde_json::json!({
            "count": complaints.len(),
            "complaints": complaints,
        }))),
        Err(e) => {
            tracing::error!("Complaint listing failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Status update request
#[derive(Debug, Deserialize)]
struct StatusUpdateRequest {
    status: ComplaintStatus,
}

/// Update a complaint's status
async fn update_complaint_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<StatusUpdateRequest>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    match state
        .persistence
        .complaints
        .update_status(&id, request.status)
        .await
    {
        Ok(complaint) => Ok(Json(serde_json::to_value(complaint).map_err(|e| {
            tracing::error!("Serialization failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?)),
        Err(hostel_nexus_persistence::PersistenceError::ComplaintNotFound(_)) => {
            Err(StatusCode::NOT_FOUND)
        }
        Err(e) => {
            tracing::error!("Status update failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Weekly mess menu
async fn mess_menu(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "menu": state.persistence.menu.week(),
    }))
}

/// Health check
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Readiness check
async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ready",
        "sessions": state.sessions.count(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostel_nexus_config::Settings;

    #[test]
    fn test_router_creation() {
        let persistence = hostel_nexus_persistence::init(None).unwrap();
        let state = AppState::new(Settings::default(), persistence);
        let _ = create_router(state);
    }
}
