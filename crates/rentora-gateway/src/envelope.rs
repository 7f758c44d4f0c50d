// SPDX-FileCopyrightText: 2026 Rentora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Response envelope shared by every REST endpoint under `/v1`.
//!
//! Every API response carries the same shape: a `success` flag, a
//! human-readable `message`, and the payload in `data` (`null` on
//! failure).

use serde::{Deserialize, Serialize};

/// Uniform wrapper around REST payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was handled successfully.
    pub success: bool,
    /// Human-readable outcome description.
    pub message: String,
    /// Payload on success, `null` on failure.
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Envelope for a successful response carrying `data`.
    pub fn ok(message: String, data: T) -> Self {
        Self {
            success: true,
            message,
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Envelope for a failed response. `data` serializes as `null`.
    pub fn error(message: String) -> Self {
        Self {
            success: false,
            message,
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_envelope_serializes_with_data() {
        let resp = ApiResponse::ok("done".to_string(), 7u32);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"success\":true"));
        assert!(json.contains("\"message\":\"done\""));
        assert!(json.contains("\"data\":7"));
    }

    #[test]
    fn error_envelope_serializes_null_data() {
        let resp = ApiResponse::error("nope".to_string());
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"success\":false"));
        assert!(json.contains("\"message\":\"nope\""));
        assert!(json.contains("\"data\":null"));
    }

    #[test]
    fn envelope_round_trips() {
        let resp = ApiResponse::ok("ready".to_string(), vec![1u32, 2, 3]);
        let json = serde_json::to_string(&resp).unwrap();
        let back: ApiResponse<Vec<u32>> = serde_json::from_str(&json).unwrap();
        assert!(back.success);
        assert_eq!(back.data.as_deref(), Some(&[1, 2, 3][..]));
    }
}
