//! Response envelope.
//!
//! The upstream API does not use HTTP status codes consistently: success and
//! failure alike come back as JSON bodies, and the only reliable signal is a
//! top-level `data` key. The envelope is discriminated here once so callers
//! never probe raw JSON for it.

use serde_json::Value;

/// Outcome of an API call that produced a JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse {
    /// The response carried a `data` payload.
    Success(Value),
    /// Anything else; wraps the entire decoded body.
    Failure(Value),
}

impl ApiResponse {
    /// Discriminate a decoded body into success or failure.
    pub fn from_body(body: Value) -> Self {
        match body {
            Value::Object(mut map) => match map.remove("data") {
                Some(data) => Self::Success(data),
                None => Self::Failure(Value::Object(map)),
            },
            other => Self::Failure(other),
        }
    }

    /// Whether the call logically succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The `data` payload, if any.
    pub fn data(&self) -> Option<&Value> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// The error body, if any.
    pub fn error(&self) -> Option<&Value> {
        match self {
            Self::Success(_) => None,
            Self::Failure(raw) => Some(raw),
        }
    }

    /// Convert into a `Result`, surfacing the error body on failure.
    pub fn into_result(self) -> Result<Value, Value> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Failure(raw) => Err(raw),
        }
    }
}
