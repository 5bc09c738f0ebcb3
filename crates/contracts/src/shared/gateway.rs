use thiserror::Error;

use super::api_error::{ApiErrorBody, ApiErrorCode};

/// Client-side outcome of a failed persistence call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The backing collection does not exist yet
    #[error("collection `{table}` is not provisioned")]
    NotProvisioned { table: String },
    #[error("{}: {message}", code.as_str())]
    Api { code: ApiErrorCode, message: String },
    #[error("network error: {0}")]
    Network(String),
}

impl GatewayError {
    pub fn from_body(body: ApiErrorBody) -> Self {
        match body.code {
            ApiErrorCode::NotProvisioned => GatewayError::NotProvisioned {
                table: body.table.unwrap_or(body.message),
            },
            code => GatewayError::Api {
                code,
                message: body.message,
            },
        }
    }

    pub fn is_not_provisioned(&self) -> bool {
        matches!(self, GatewayError::NotProvisioned { .. })
    }

    pub fn code(&self) -> Option<ApiErrorCode> {
        match self {
            GatewayError::NotProvisioned { .. } => Some(ApiErrorCode::NotProvisioned),
            GatewayError::Api { code, .. } => Some(*code),
            GatewayError::Network(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_provisioned_body_becomes_typed_variant() {
        let mut body = ApiErrorBody::new(ApiErrorCode::NotProvisioned, "collection missing");
        body.table = Some("pricing".into());

        let err = GatewayError::from_body(body);
        assert!(err.is_not_provisioned());
        assert_eq!(err, GatewayError::NotProvisioned { table: "pricing".into() });
    }

    #[test]
    fn other_codes_stay_api_errors() {
        let err = GatewayError::from_body(ApiErrorBody::new(ApiErrorCode::PasswordMismatch, "bad"));
        assert!(!err.is_not_provisioned());
        assert_eq!(err.code(), Some(ApiErrorCode::PasswordMismatch));
        assert_eq!(err.to_string(), "password_mismatch: bad");
    }
}
