//! Auth handlers — register and login.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, LoginResponse, RegisterResponse, UserResponse};
use crate::error::ApiResult;
use crate::state::AppState;

/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<RegisterResponse>>)> {
    let user = state
        .accounts
        .register(&req.username, &req.gmail, &req.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(RegisterResponse { user_id: user.id })),
    ))
}

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<ApiResponse<LoginResponse>>> {
    let session = state.accounts.login(&req.username, &req.password).await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        access_token: session.access_token,
        expires_at: session.expires_at,
        user: UserResponse::from(session.user),
    })))
}
