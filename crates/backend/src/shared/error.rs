use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a004_order::aggregate::OrderStatus;
use contracts::shared::api_error::{ApiErrorBody, ApiErrorCode};
use sea_orm::DbErr;

/// Error of a request handler, rendered as `{"code", "message"}`
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("collection `{table}` is not provisioned")]
    NotProvisioned { table: String },
    #[error("no admin account uses this email")]
    EmailNotFound,
    #[error("password does not match")]
    PasswordMismatch,
    #[error("authentication required")]
    Unauthorized,
    #[error("access denied")]
    Forbidden,
    #[error("order cannot move from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },
    #[error("database error: {0}")]
    Database(#[from] DbErr),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn code(&self) -> ApiErrorCode {
        match self {
            AppError::Validation(_) => ApiErrorCode::Validation,
            AppError::NotFound(_) => ApiErrorCode::NotFound,
            AppError::NotProvisioned { .. } => ApiErrorCode::NotProvisioned,
            AppError::EmailNotFound => ApiErrorCode::EmailNotFound,
            AppError::PasswordMismatch => ApiErrorCode::PasswordMismatch,
            AppError::Unauthorized => ApiErrorCode::Unauthorized,
            AppError::Forbidden => ApiErrorCode::Forbidden,
            AppError::InvalidTransition { .. } => ApiErrorCode::InvalidTransition,
            AppError::Database(_) | AppError::Internal(_) => ApiErrorCode::Internal,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::NotProvisioned { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::EmailNotFound | AppError::PasswordMismatch | AppError::Unauthorized => {
                StatusCode::UNAUTHORIZED
            }
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::InvalidTransition { .. } => StatusCode::CONFLICT,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> ApiErrorBody {
        let message = match self {
            // internals stay in the log
            AppError::Database(_) | AppError::Internal(_) => "internal server error".to_string(),
            other => other.to_string(),
        };
        let mut body = ApiErrorBody::new(self.code(), message);
        if let AppError::NotProvisioned { table } = self {
            body.table = Some(table.clone());
        }
        body
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() && status != StatusCode::SERVICE_UNAVAILABLE {
            tracing::error!("request failed: {}", self);
        } else {
            tracing::debug!("request rejected ({}): {}", status.as_u16(), self);
        }
        (status, Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_provisioned_is_503_with_table() {
        let err = AppError::NotProvisioned { table: "pricing".into() };
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = err.body();
        assert_eq!(body.code, ApiErrorCode::NotProvisioned);
        assert_eq!(body.table.as_deref(), Some("pricing"));
    }

    #[test]
    fn credential_errors_are_distinct_401s() {
        assert_eq!(AppError::EmailNotFound.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::PasswordMismatch.status(), StatusCode::UNAUTHORIZED);
        assert_ne!(AppError::EmailNotFound.code(), AppError::PasswordMismatch.code());
    }

    #[test]
    fn database_details_are_not_leaked() {
        let err = AppError::Database(DbErr::Custom("secret path /var/db".into()));
        assert_eq!(err.body().message, "internal server error");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
