//! Store Service Wire Protocol
//!
//! Defines the endpoints and Data Transfer Objects (DTOs) used between the
//! HTTP gateway and the store service.
//!
//! These structures are serialized as JSON and sent over the internal HTTP
//! transport. Error outcomes travel as an [`RpcStatus`] body alongside a
//! transport status code derived from [`RpcCode`].

use serde::{Deserialize, Serialize};
use std::fmt;

// --- API Endpoints ---

/// Endpoint for key retrieval; the key travels as a path segment.
pub const ENDPOINT_GET: &str = "/get";
/// Endpoint for writes; the pair travels as a JSON body.
pub const ENDPOINT_SET: &str = "/set";
/// Endpoint for deletion; the key travels as a path segment.
pub const ENDPOINT_DELETE: &str = "/delete";

// --- Status Codes ---

/// Status codes reported by the store service.
///
/// The service translates engine outcomes into exactly one of these; the
/// gateway owns the independent mapping from these codes to public HTTP
/// statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RpcCode {
    /// The requested key is absent.
    NotFound,
    /// The request was malformed (empty key).
    InvalidArgument,
    /// Any other failure, carrying the underlying message.
    Internal,
}

/// An error outcome of an RPC call: a code plus a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcStatus {
    pub code: RpcCode,
    pub message: String,
}

impl RpcStatus {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: RpcCode::NotFound,
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self {
            code: RpcCode::InvalidArgument,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: RpcCode::Internal,
            message: message.into(),
        }
    }
}

impl fmt::Display for RpcStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

// --- Data Transfer Objects ---

/// Payload for a write request.
#[derive(Debug, Serialize, Deserialize)]
pub struct SetRequest {
    /// The data key.
    pub key: String,
    /// The value to store; may be empty.
    pub value: String,
}

/// Response for a successful retrieval.
#[derive(Debug, Serialize, Deserialize)]
pub struct GetResponse {
    /// The stored value.
    pub value: String,
    pub success: bool,
}

/// Acknowledgment for a write.
#[derive(Debug, Serialize, Deserialize)]
pub struct SetResponse {
    pub success: bool,
}

/// Acknowledgment for a deletion.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}
