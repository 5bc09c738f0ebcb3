use axum::{body::Body, extract::Request, middleware::Next, response::Response};

use crate::shared::data::db::get_connection;
use crate::shared::error::{AppError, AppResult};
use crate::system::admins::repository as admin_repository;

fn bearer_token(req: &Request<Body>) -> AppResult<&str> {
    req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or(AppError::Unauthorized)
}

/// Middleware that requires a valid admin token whose account still exists
pub async fn require_admin(mut req: Request<Body>, next: Next) -> AppResult<Response> {
    let claims = super::jwt::validate_token(bearer_token(&req)?)?;

    let admin_id: i64 = claims.sub.parse().map_err(|_| AppError::Unauthorized)?;
    if admin_repository::get_by_id(get_connection()?, admin_id)
        .await?
        .is_none()
    {
        return Err(AppError::Forbidden);
    }

    // Add claims to request extensions for use in handlers
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
