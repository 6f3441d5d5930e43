//! JSON envelope shared by every endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
    pub timestamp: DateTime<Utc>,
}

/// Machine-readable `code` plus a message safe to show the client.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: Utc::now(),
        }
    }
}

impl ApiResponse<()> {
    /// Success without a payload (logout).
    pub fn empty() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
            timestamp: Utc::now(),
        }
    }

    pub fn failure(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorBody {
                code,
                message: message.into(),
            }),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_omits_error() {
        let body = serde_json::to_value(ApiResponse::success(json!({"id": 3}))).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], 3);
        assert!(body.get("error").is_none());
        assert!(body["timestamp"].is_string());
    }

    #[test]
    fn test_failure_carries_code_and_message() {
        let body = serde_json::to_value(ApiResponse::failure("CONFLICT", "Username is already taken")).unwrap();
        assert_eq!(body["success"], false);
        assert!(body.get("data").is_none());
        assert_eq!(body["error"], json!({"code": "CONFLICT", "message": "Username is already taken"}));
    }

    #[test]
    fn test_empty_has_neither_data_nor_error() {
        let body = serde_json::to_value(ApiResponse::empty()).unwrap();
        assert_eq!(body["success"], true);
        assert!(body.get("data").is_none());
        assert!(body.get("error").is_none());
    }
}
