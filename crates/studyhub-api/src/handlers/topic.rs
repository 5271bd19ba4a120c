//! Topic handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use studyhub_entity::Topic;

use crate::dto::request::{CreateTopicRequest, SearchQuery};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/topics
pub async fn list_topics(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<Vec<Topic>>>> {
    let topics = state.topics.list(auth.context()).await?;
    Ok(Json(ApiResponse::ok(topics)))
}

/// POST /api/topics
pub async fn create_topic(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateTopicRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Topic>>)> {
    let topic = state.topics.create(auth.context(), &req.name).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(topic))))
}

/// GET /api/topics/search?query=
pub async fn search_topics(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<SearchQuery>,
) -> ApiResult<Json<ApiResponse<Vec<Topic>>>> {
    let topics = state.topics.search(auth.context(), &params.query).await?;
    Ok(Json(ApiResponse::ok(topics)))
}

/// DELETE /api/topics/{topic_id}
pub async fn delete_topic(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(topic_id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.topics.delete(auth.context(), topic_id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Topic and all nested content deleted",
    ))))
}
