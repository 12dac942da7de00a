//! HTTP routes.
//!
//! | Method | Path                   | Success                  |
//! |--------|------------------------|--------------------------|
//! | POST   | `/api/rooms`           | 201 room                 |
//! | GET    | `/api/rooms/{code}`    | 200 room                 |
//! | GET    | `/api/questions`       | 200 round or `{rounds}`  |
//! | GET    | anything else          | static file              |

use std::path::Path;
use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use quizbowl_protocol::{
    CreateRoomRequest, QuestionsQuery, QuestionsResponse, Room, RoundList,
};
use quizbowl_questions::QuestionBank;
use quizbowl_room::RegistryHandle;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::QuizError;

/// State shared by every handler. Both fields are cheap to clone.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) rooms: RegistryHandle,
    pub(crate) questions: Arc<QuestionBank>,
}

pub(crate) fn router(state: AppState, static_dir: &Path, cors: CorsLayer) -> Router {
    Router::new()
        .route("/api/rooms", post(create_room))
        .route("/api/rooms/{code}", get(get_room))
        .route("/api/questions", get(get_questions))
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn create_room(
    State(state): State<AppState>,
    body: Result<Json<CreateRoomRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Room>), QuizError> {
    let Json(request) = body?;
    let room = state.rooms.create(&request.team_name).await?;
    Ok((StatusCode::CREATED, Json(room)))
}

async fn get_room(
    State(state): State<AppState>,
    axum::extract::Path(code): axum::extract::Path<String>,
) -> Result<Json<Room>, QuizError> {
    let room = state.rooms.get(&code).await?;
    Ok(Json(room))
}

async fn get_questions(
    State(state): State<AppState>,
    query: Result<Query<QuestionsQuery>, QueryRejection>,
) -> Result<Json<QuestionsResponse>, QuizError> {
    let Query(query) = query?;
    let response = match query.difficulty {
        Some(difficulty) => {
            QuestionsResponse::Single(state.questions.get(&difficulty)?.clone())
        }
        None => QuestionsResponse::All(RoundList {
            rounds: state.questions.all().to_vec(),
        }),
    };
    Ok(Json(response))
}
