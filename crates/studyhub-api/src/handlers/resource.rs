//! Resource handlers, nested under `/api/subtopics/{subtopic_id}`.

use axum::Json;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use bytes::Bytes;
use uuid::Uuid;

use studyhub_core::error::AppError;
use studyhub_entity::Resource;
use studyhub_service::resource::ResourceUpload;

use crate::dto::request::{CreateResourceRequest, TagFilterQuery};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/subtopics/{subtopic_id}/resources?tag=
pub async fn list_resources(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(subtopic_id): Path<Uuid>,
    Query(params): Query<TagFilterQuery>,
) -> ApiResult<Json<ApiResponse<Vec<Resource>>>> {
    let resources = state
        .resources
        .list(auth.context(), subtopic_id, params.tag.as_deref())
        .await?;
    Ok(Json(ApiResponse::ok(resources)))
}

/// POST /api/subtopics/{subtopic_id}/resources
pub async fn create_resource(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(subtopic_id): Path<Uuid>,
    Json(req): Json<CreateResourceRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Resource>>)> {
    let resource = state
        .resources
        .create(
            auth.context(),
            subtopic_id,
            &req.title,
            &req.url,
            req.tag.as_deref(),
        )
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(resource))))
}

/// POST /api/subtopics/{subtopic_id}/resources/upload
///
/// Multipart body with a required `file` part and optional `title` and
/// `tag` parts.
pub async fn upload_resource(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(subtopic_id): Path<Uuid>,
    mut multipart: Multipart,
) -> ApiResult<(StatusCode, Json<ApiResponse<Resource>>)> {
    let mut title = String::new();
    let mut tag: Option<String> = None;
    let mut file: Option<(String, String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or("file").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field.bytes().await.map_err(bad_multipart)?;
                file = Some((file_name, content_type, data));
            }
            "title" => title = field.text().await.map_err(bad_multipart)?,
            "tag" => tag = Some(field.text().await.map_err(bad_multipart)?),
            _ => {}
        }
    }

    let (file_name, content_type, data) =
        file.ok_or_else(|| AppError::validation("File is required"))?;

    let resource = state
        .resources
        .upload(
            auth.context(),
            subtopic_id,
            ResourceUpload {
                title,
                tag,
                file_name,
                content_type,
                data,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(resource))))
}

/// DELETE /api/subtopics/{subtopic_id}/resources/{resource_id}
pub async fn delete_resource(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((subtopic_id, resource_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state
        .resources
        .delete(auth.context(), subtopic_id, resource_id)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Resource deleted",
    ))))
}

fn bad_multipart(err: axum::extract::multipart::MultipartError) -> AppError {
    AppError::validation(format!("Invalid multipart body: {err}"))
}
