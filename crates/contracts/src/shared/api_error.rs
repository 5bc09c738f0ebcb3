use serde::{Deserialize, Serialize};

/// Machine-readable error category of an API response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorCode {
    Validation,
    NotFound,
    NotProvisioned,
    EmailNotFound,
    PasswordMismatch,
    Unauthorized,
    Forbidden,
    InvalidTransition,
    Internal,
}

impl ApiErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ApiErrorCode::Validation => "validation",
            ApiErrorCode::NotFound => "not_found",
            ApiErrorCode::NotProvisioned => "not_provisioned",
            ApiErrorCode::EmailNotFound => "email_not_found",
            ApiErrorCode::PasswordMismatch => "password_mismatch",
            ApiErrorCode::Unauthorized => "unauthorized",
            ApiErrorCode::Forbidden => "forbidden",
            ApiErrorCode::InvalidTransition => "invalid_transition",
            ApiErrorCode::Internal => "internal",
        }
    }
}

/// JSON body of every non-2xx API response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub code: ApiErrorCode,
    pub message: String,
    /// Collection name, present for `not_provisioned`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
}

impl ApiErrorBody {
    pub fn new(code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            table: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_serializes_snake_case() {
        let body = ApiErrorBody::new(ApiErrorCode::EmailNotFound, "no admin with this email");
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"code":"email_not_found","message":"no admin with this email"}"#);
    }

    #[test]
    fn table_is_read_back() {
        let body: ApiErrorBody = serde_json::from_str(
            r#"{"code":"not_provisioned","message":"missing","table":"orders"}"#,
        )
        .unwrap();
        assert_eq!(body.code.as_str(), "not_provisioned");
        assert_eq!(body.table.as_deref(), Some("orders"));
    }
}
