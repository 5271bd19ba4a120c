//! Subtopic handlers, nested under `/api/topics/{topic_id}`.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use studyhub_entity::Subtopic;

use crate::dto::request::{CreateSubtopicRequest, SearchQuery};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/topics/{topic_id}/subtopics
pub async fn list_subtopics(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(topic_id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Vec<Subtopic>>>> {
    let subtopics = state.subtopics.list(auth.context(), topic_id).await?;
    Ok(Json(ApiResponse::ok(subtopics)))
}

/// POST /api/topics/{topic_id}/subtopics
pub async fn create_subtopic(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(topic_id): Path<Uuid>,
    Json(req): Json<CreateSubtopicRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Subtopic>>)> {
    let subtopic = state
        .subtopics
        .create(auth.context(), topic_id, &req.name)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(subtopic))))
}

/// GET /api/topics/{topic_id}/subtopics/search?query=
pub async fn search_subtopics(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(topic_id): Path<Uuid>,
    Query(params): Query<SearchQuery>,
) -> ApiResult<Json<ApiResponse<Vec<Subtopic>>>> {
    let subtopics = state
        .subtopics
        .search(auth.context(), topic_id, &params.query)
        .await?;
    Ok(Json(ApiResponse::ok(subtopics)))
}

/// DELETE /api/topics/{topic_id}/subtopics/{subtopic_id}
pub async fn delete_subtopic(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((topic_id, subtopic_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state
        .subtopics
        .delete(auth.context(), topic_id, subtopic_id)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Subtopic and its resources deleted",
    ))))
}
