use contracts::shared::gateway::GatewayError;
use contracts::system::auth::{
    AdminInfo, LoginRequest, LoginResponse, PasswordResetConfirm, PasswordResetRequest,
};
use gloo_net::http::Method;

use crate::shared::gateway;

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<LoginResponse, GatewayError> {
    let request = LoginRequest { email, password };
    gateway::send_json(Method::POST, "/api/system/auth/login", &request, None).await
}

/// Asks for a reset link. The server answers the same for unknown emails.
pub async fn request_password_reset(email: String) -> Result<(), GatewayError> {
    let request = PasswordResetRequest { email };
    gateway::send(Method::POST, "/api/system/auth/password-reset", &request, None).await
}

pub async fn confirm_password_reset(token: String, new_password: String) -> Result<(), GatewayError> {
    let request = PasswordResetConfirm { token, new_password };
    gateway::send(Method::POST, "/api/system/auth/password-reset/confirm", &request, None).await
}

/// Get current admin info
pub async fn current_admin(access_token: &str) -> Result<AdminInfo, GatewayError> {
    gateway::get_json("/api/system/auth/me", Some(access_token)).await
}
