//! Login handler

use crate::{ApiResult, AppState, LoginRequestBody, LoginResponse};

use axum::{Json, extract::State, extract::rejection::JsonRejection};

/// POST /api/auth/login
///
/// Resolve the email across the central and tenant databases, verify the
/// password, apply the status gate and issue a session token.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequestBody>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(body) = payload?;

    let outcome = state.login.login(body.into()).await?;

    Ok(Json(LoginResponse {
        token: outcome.token,
        user: outcome.user.into(),
    }))
}
