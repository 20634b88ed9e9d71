//! Request and Response message types.
//!
//! Defines the envelope for command requests and responses between the
//! local end and the remote end. The transport decides how the envelope
//! travels; this module only fixes its shape.

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::identifiers::RequestId;

use super::Command;

// ============================================================================
// Request
// ============================================================================

/// A command request from local end to remote end.
///
/// # Format
///
/// ```json
/// {
///   "id": 1,
///   "method": "element.click",
///   "params": { ... }
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Request {
    /// Unique identifier for request/response correlation.
    pub id: RequestId,

    /// Command with method and params.
    #[serde(flatten)]
    pub command: Command,
}

impl Request {
    /// Creates a new request with an auto-generated ID.
    #[inline]
    #[must_use]
    pub fn new(command: Command) -> Self {
        Self {
            id: RequestId::next(),
            command,
        }
    }
}

// ============================================================================
// Response
// ============================================================================

/// A response from remote end to local end.
///
/// # Format
///
/// Success:
/// ```json
/// { "id": 1, "type": "success", "result": { ... } }
/// ```
///
/// Error:
/// ```json
/// { "id": 1, "type": "error", "error": "code", "message": "description" }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Response {
    /// Matches the request `id`.
    pub id: RequestId,

    /// Response type.
    #[serde(rename = "type")]
    pub response_type: ResponseType,

    /// Result data (if success).
    #[serde(default)]
    pub result: Option<Value>,

    /// Error code (if error).
    #[serde(default)]
    pub error: Option<String>,

    /// Error message (if error).
    #[serde(default)]
    pub message: Option<String>,
}

impl Response {
    /// Returns `true` if this is a success response.
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.response_type == ResponseType::Success
    }

    /// Returns `true` if this is an error response.
    #[inline]
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.response_type == ResponseType::Error
    }

    /// Extracts the result value, surfacing a remote failure verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Remote`] with the remote message if the response was
    /// an error.
    pub fn into_result(self) -> Result<Value> {
        match self.response_type {
            ResponseType::Success => Ok(self.result.unwrap_or(Value::Null)),
            ResponseType::Error => {
                let code = self.error.unwrap_or_else(|| "unknown error".to_string());
                let message = self.message.unwrap_or(code);
                Err(Error::remote(message))
            }
        }
    }
}

// ============================================================================
// ResponseType
// ============================================================================

/// Response type discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    /// Successful response.
    Success,
    /// Error response.
    Error,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifiers::ElementId;
    use crate::protocol::ElementCommand;

    #[test]
    fn test_request_serialization() {
        let command = Command::Element(ElementCommand::Click {
            element_id: ElementId::new("element-1"),
        });

        let request = Request::new(command);
        let json = serde_json::to_string(&request).expect("serialize");

        assert!(json.contains("element.click"));
        assert!(json.contains("elementId"));
        assert!(json.contains("\"id\""));
    }

    #[test]
    fn test_success_response() {
        let json_str = r#"{
            "id": 7,
            "type": "success",
            "result": {"value": "input"}
        }"#;

        let response: Response = serde_json::from_str(json_str).expect("parse");
        assert!(response.is_success());
        assert!(!response.is_error());

        let result = response.into_result().expect("success has a result");
        assert_eq!(result["value"], "input");
    }

    #[test]
    fn test_error_response_surfaces_message_verbatim() {
        let json_str = r#"{
            "id": 7,
            "type": "error",
            "error": "no such element",
            "message": "some error"
        }"#;

        let response: Response = serde_json::from_str(json_str).expect("parse");
        assert!(response.is_error());

        let err = response.into_result().expect_err("error response fails");
        assert_eq!(err.to_string(), "some error");
    }

    #[test]
    fn test_error_response_falls_back_to_code() {
        let json_str = r#"{
            "id": 7,
            "type": "error",
            "error": "timeout"
        }"#;

        let response: Response = serde_json::from_str(json_str).expect("parse");
        let err = response.into_result().expect_err("error response fails");
        assert_eq!(err.to_string(), "timeout");
    }

    #[test]
    fn test_success_without_result_is_null() {
        let json_str = r#"{"id": 7, "type": "success"}"#;

        let response: Response = serde_json::from_str(json_str).expect("parse");
        let result = response.into_result().expect("success without result");
        assert!(result.is_null());
    }
}
