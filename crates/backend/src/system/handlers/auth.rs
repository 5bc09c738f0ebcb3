use axum::{extract::Json, http::StatusCode};
use contracts::system::auth::{
    AdminInfo, LoginRequest, LoginResponse, PasswordResetConfirm, PasswordResetRequest,
};

use crate::shared::data::db::get_connection;
use crate::shared::error::{AppError, AppResult};
use crate::system::admins::service as admin_service;
use crate::system::auth::extractor::CurrentAdmin;
use crate::system::auth::{jwt, reset_notifier};

/// Login handler
pub async fn login(Json(request): Json<LoginRequest>) -> AppResult<Json<LoginResponse>> {
    let admin =
        admin_service::verify_credentials(get_connection()?, &request.email, &request.password)
            .await?;
    let access_token = jwt::generate_access_token(&admin)?;

    Ok(Json(LoginResponse {
        access_token,
        admin,
    }))
}

/// Always answers 200 so callers cannot learn which emails exist
pub async fn request_password_reset(Json(request): Json<PasswordResetRequest>) -> StatusCode {
    let result = match get_connection() {
        Ok(db) => {
            admin_service::request_password_reset(db, &request.email, reset_notifier::notifier())
                .await
        }
        Err(e) => Err(e),
    };
    if let Err(e) = result {
        tracing::error!("Password reset request failed: {}", e);
    }
    StatusCode::OK
}

pub async fn confirm_password_reset(
    Json(request): Json<PasswordResetConfirm>,
) -> AppResult<StatusCode> {
    admin_service::confirm_password_reset(get_connection()?, &request.token, &request.new_password)
        .await?;
    Ok(StatusCode::OK)
}

/// Get current admin handler (protected by middleware)
pub async fn current_admin(CurrentAdmin(claims): CurrentAdmin) -> AppResult<Json<AdminInfo>> {
    let id: i64 = claims.sub.parse().map_err(|_| AppError::Unauthorized)?;
    let admin = admin_service::get_info(get_connection()?, id).await?;
    Ok(Json(admin))
}
