use crate::core::errors::TeamCowboyError;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Error section of a failed response: `{errorCode, httpResponse, message}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub error_code: String,
    pub http_response: u16,
    pub message: String,
}

impl ApiError {
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.http_response)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {}",
            self.error_code, self.http_response, self.message
        )
    }
}

/// Outcome of one call that did not fail fatally
#[derive(Debug, Clone, PartialEq)]
pub enum CallOutcome {
    /// `success: true`, carrying the response's `body` section
    Success(Value),
    /// A 4xx condition, either declared in the body or by the transport status.
    /// No payload; the error is kept for inspection.
    ClientError(ApiError),
}

impl CallOutcome {
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub const fn payload(&self) -> Option<&Value> {
        match self {
            Self::Success(payload) => Some(payload),
            Self::ClientError(_) => None,
        }
    }

    pub fn into_payload(self) -> Option<Value> {
        match self {
            Self::Success(payload) => Some(payload),
            Self::ClientError(_) => None,
        }
    }

    pub const fn client_error(&self) -> Option<&ApiError> {
        match self {
            Self::Success(_) => None,
            Self::ClientError(err) => Some(err),
        }
    }

    /// Label used in completion logs
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Success(_) => "success",
            Self::ClientError(_) => "client_error",
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireEnvelope {
    success: bool,
    #[serde(default)]
    body: Value,
}

fn reason_phrase(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("Unknown Status")
        .to_string()
}

/// Turn a raw HTTP status and body into a [`CallOutcome`] or a fatal error.
///
/// In the 2xx range the body's `success` flag decides; a declared 4xx in the
/// error section is a client error, anything else declared there is fatal.
/// A transport 4xx is a client error as long as its body is JSON. A transport
/// 5xx, or any status outside 2xx/4xx, is fatal whatever the body holds.
pub fn classify_response(status: StatusCode, body: &str) -> Result<CallOutcome, TeamCowboyError> {
    let code = status.as_u16();

    if status.is_success() {
        let envelope: WireEnvelope = serde_json::from_str(body).map_err(|e| {
            TeamCowboyError::DecodeError(format!("Failed to parse response envelope: {}", e))
        })?;

        if envelope.success {
            return Ok(CallOutcome::Success(envelope.body));
        }

        let error: ApiError = serde_json::from_value(envelope.body).map_err(|e| {
            TeamCowboyError::DecodeError(format!("Failed to parse error section: {}", e))
        })?;

        return if error.is_client_error() {
            Ok(CallOutcome::ClientError(error))
        } else {
            Err(TeamCowboyError::ServerError {
                status: error.http_response,
                message: error.message,
            })
        };
    }

    if status.is_client_error() {
        let value: Value = serde_json::from_str(body).map_err(|e| {
            TeamCowboyError::DecodeError(format!("Bad JSON in {} response: {}", code, e))
        })?;

        // Declared details are kept when present; the transport status wins
        let error = serde_json::from_value::<WireEnvelope>(value)
            .ok()
            .filter(|envelope| !envelope.success)
            .and_then(|envelope| serde_json::from_value::<ApiError>(envelope.body).ok())
            .map_or_else(
                || ApiError {
                    error_code: format!("HTTP_{}", code),
                    http_response: code,
                    message: reason_phrase(status),
                },
                |declared| ApiError {
                    http_response: code,
                    ..declared
                },
            );
        return Ok(CallOutcome::ClientError(error));
    }

    Err(TeamCowboyError::ServerError {
        status: code,
        message: reason_phrase(status),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_returns_body_section() {
        let outcome = classify_response(
            StatusCode::OK,
            r#"{"success": true, "body": {"helloWorld": "test"}}"#,
        )
        .unwrap();
        assert_eq!(outcome, CallOutcome::Success(json!({"helloWorld": "test"})));
    }

    #[test]
    fn test_success_without_body_is_null_payload() {
        let outcome = classify_response(StatusCode::OK, r#"{"success": true}"#).unwrap();
        assert_eq!(outcome.payload(), Some(&Value::Null));
    }

    #[test]
    fn test_declared_4xx_is_client_error() {
        let outcome = classify_response(
            StatusCode::OK,
            r#"{"success": false, "body": {"errorCode": "E1", "httpResponse": 404, "message": "not found"}}"#,
        )
        .unwrap();
        assert!(outcome.payload().is_none());
        assert_eq!(
            outcome.client_error(),
            Some(&ApiError {
                error_code: "E1".to_string(),
                http_response: 404,
                message: "not found".to_string(),
            })
        );
    }

    #[test]
    fn test_declared_5xx_is_fatal() {
        let err = classify_response(
            StatusCode::OK,
            r#"{"success": false, "body": {"errorCode": "E2", "httpResponse": 503, "message": "down"}}"#,
        )
        .unwrap_err();
        let text = err.to_string();
        assert!(text.contains("503"));
        assert!(text.contains("down"));
        assert!(err.is_server_error());
    }

    #[test]
    fn test_declared_unrecognized_status_is_fatal() {
        let err = classify_response(
            StatusCode::OK,
            r#"{"success": false, "body": {"errorCode": "E3", "httpResponse": 302, "message": "moved"}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, TeamCowboyError::ServerError { status: 302, .. }));
    }

    #[test]
    fn test_transport_4xx_with_non_json_body_is_decode_error() {
        let err = classify_response(StatusCode::NOT_FOUND, "<html>not json</html>").unwrap_err();
        assert!(matches!(err, TeamCowboyError::DecodeError(_)));

        let err = classify_response(StatusCode::FORBIDDEN, "").unwrap_err();
        assert!(matches!(err, TeamCowboyError::DecodeError(_)));
    }

    #[test]
    fn test_transport_4xx_without_error_section_uses_reason() {
        let outcome = classify_response(StatusCode::FORBIDDEN, r#"{"detail": "nope"}"#).unwrap();
        let error = outcome.client_error().unwrap();
        assert_eq!(error.error_code, "HTTP_403");
        assert_eq!(error.http_response, 403);
        assert_eq!(error.message, "Forbidden");
    }

    #[test]
    fn test_transport_4xx_keeps_declared_details() {
        let outcome = classify_response(
            StatusCode::UNAUTHORIZED,
            r#"{"success": false, "body": {"errorCode": "authFailed", "httpResponse": 401, "message": "Bad signature"}}"#,
        )
        .unwrap();
        let error = outcome.client_error().unwrap();
        assert_eq!(error.error_code, "authFailed");
        assert_eq!(error.http_response, 401);
        assert_eq!(error.message, "Bad signature");
    }

    #[test]
    fn test_transport_4xx_status_overrides_declared_status() {
        let outcome = classify_response(
            StatusCode::NOT_FOUND,
            r#"{"success": false, "body": {"errorCode": "gone", "httpResponse": 500, "message": "Missing"}}"#,
        )
        .unwrap();
        let error = outcome.client_error().unwrap();
        assert_eq!(error.http_response, 404);
        assert_eq!(error.error_code, "gone");
    }

    #[test]
    fn test_transport_5xx_is_fatal_regardless_of_body() {
        let err = classify_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"success": true, "body": {"helloWorld": "test"}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, TeamCowboyError::ServerError { status: 500, .. }));
        assert!(err.to_string().contains("Internal Server Error"));
    }

    #[test]
    fn test_transport_3xx_is_fatal() {
        let err = classify_response(StatusCode::MOVED_PERMANENTLY, "").unwrap_err();
        assert!(matches!(err, TeamCowboyError::ServerError { status: 301, .. }));
    }

    #[test]
    fn test_malformed_json_is_decode_error() {
        let err = classify_response(StatusCode::OK, "not json").unwrap_err();
        assert!(matches!(err, TeamCowboyError::DecodeError(_)));
    }

    #[test]
    fn test_missing_success_flag_is_decode_error() {
        let err = classify_response(StatusCode::OK, r#"{"body": {}}"#).unwrap_err();
        assert!(matches!(err, TeamCowboyError::DecodeError(_)));
    }

    #[test]
    fn test_failure_without_error_section_is_decode_error() {
        let err = classify_response(StatusCode::OK, r#"{"success": false}"#).unwrap_err();
        assert!(matches!(err, TeamCowboyError::DecodeError(_)));
    }
}
