//! Tag listing handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, TagsResponse};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/tags
///
/// Returns every distinct tag in the system, across all users. Callers
/// must be authenticated but the listing itself is not owner-scoped.
pub async fn list_tags(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<ApiResponse<TagsResponse>>> {
    let tags = state.resources.tags().await?;
    Ok(Json(ApiResponse::ok(TagsResponse { tags })))
}
