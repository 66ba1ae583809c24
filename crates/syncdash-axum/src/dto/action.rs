//! Response envelope for POST actions.

use serde::Serialize;

/// JSON envelope returned by `/clear` and `/run`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionResponse {
    /// `success`, `started` or `error`.
    pub status: &'static str,
    /// Process id of a started job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<u32>,
    /// Operator-facing failure message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl ActionResponse {
    pub const fn success() -> Self {
        Self {
            status: "success",
            pid: None,
            message: None,
        }
    }

    pub const fn started(pid: u32) -> Self {
        Self {
            status: "started",
            pid: Some(pid),
            message: None,
        }
    }

    pub const fn error(message: &'static str) -> Self {
        Self {
            status: "error",
            pid: None,
            message: Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelopes_serialize_minimal_fields() {
        assert_eq!(
            serde_json::to_string(&ActionResponse::success()).unwrap(),
            r#"{"status":"success"}"#
        );
        assert_eq!(
            serde_json::to_string(&ActionResponse::started(4242)).unwrap(),
            r#"{"status":"started","pid":4242}"#
        );
        assert_eq!(
            serde_json::to_string(&ActionResponse::error("nope")).unwrap(),
            r#"{"status":"error","message":"nope"}"#
        );
    }
}
