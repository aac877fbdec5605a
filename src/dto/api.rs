use serde::{Deserialize, Serialize};

/// Uniform wire contract for all JSON endpoints.
///
/// The `status` field mirrors the HTTP status of the response so that
/// clients reading the body alone see a consistent picture.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub message: String,
    pub status: u16,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying a payload.
    pub fn success(results: T, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: 200,
            success: true,
            errors: None,
            results: Some(results),
        }
    }

    /// Successful response for a freshly created resource.
    pub fn created(results: T, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: 201,
            success: true,
            errors: None,
            results: Some(results),
        }
    }

    /// Successful response with no payload.
    pub fn ok_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: 200,
            success: true,
            errors: None,
            results: None,
        }
    }

    /// Validation or business-rule failure.
    pub fn client_error(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            message: message.into(),
            status: 400,
            success: false,
            errors: Some(errors),
            results: None,
        }
    }

    /// The requested resource does not exist.
    pub fn not_found(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            message: message.into(),
            status: 404,
            success: false,
            errors: Some(errors),
            results: None,
        }
    }

    /// An optimistic-lock comparison failed.
    pub fn conflict(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            message: message.into(),
            status: 409,
            success: false,
            errors: Some(errors),
            results: None,
        }
    }

    /// Unexpected failure; the message stays generic so internals do not
    /// leak to clients.
    pub fn server_error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: 500,
            success: false,
            errors: None,
            results: None,
        }
    }
}
