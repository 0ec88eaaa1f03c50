use crate::errors::PanelwatchError;

/// Longest response body excerpt kept on a status error.
const BODY_EXCERPT_LIMIT: usize = 512;

/// Failure reaching the panel or getting a usable answer from it.
///
/// Every variant names the endpoint so a failed cycle can be traced to the
/// specific call that broke it.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("Request to '{endpoint}' failed: {message}")]
    Request { endpoint: String, message: String },

    #[error("Panel returned HTTP {status} for '{endpoint}': {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("Could not decode response from '{endpoint}': {message}")]
    Decode { endpoint: String, message: String },

    #[error("Detail lookup for server {requested} returned server {returned}")]
    JoinMismatch { requested: u64, returned: u64 },

    #[error("Panel API key contains characters that cannot be sent in a header")]
    InvalidCredential,

    #[error("Could not build HTTP client: {message}")]
    ClientBuild { message: String },
}

impl InventoryError {
    pub(crate) fn status(endpoint: &str, status: u16, body: &str) -> Self {
        let body = if body.len() > BODY_EXCERPT_LIMIT {
            let mut end = BODY_EXCERPT_LIMIT;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}...", &body[..end])
        } else {
            body.to_string()
        };

        InventoryError::Status {
            endpoint: endpoint.to_string(),
            status,
            body,
        }
    }

    /// Endpoint the failing call targeted, when there is one.
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            InventoryError::Request { endpoint, .. }
            | InventoryError::Status { endpoint, .. }
            | InventoryError::Decode { endpoint, .. } => Some(endpoint),
            _ => None,
        }
    }
}

impl PanelwatchError for InventoryError {
    fn error_code(&self) -> &'static str {
        match self {
            InventoryError::Request { .. } => "INVENTORY_REQUEST_FAILED",
            InventoryError::Status { .. } => "INVENTORY_HTTP_STATUS",
            InventoryError::Decode { .. } => "INVENTORY_DECODE_FAILED",
            InventoryError::JoinMismatch { .. } => "INVENTORY_JOIN_MISMATCH",
            InventoryError::InvalidCredential => "INVENTORY_INVALID_CREDENTIAL",
            InventoryError::ClientBuild { .. } => "INVENTORY_CLIENT_BUILD_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            InventoryError::InvalidCredential
                | InventoryError::Status {
                    status: 401 | 403,
                    ..
                }
        )
    }
}
