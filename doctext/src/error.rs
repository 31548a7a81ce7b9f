use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::SupportedKind;

/// Generic message sent with every 500 response; the specific failure goes in `details`.
pub const PROCESSING_FAILED: &str = "Failed to process document";

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("No file uploaded")]
    NoFile,

    #[error("Unsupported file type: {0}")]
    UnsupportedKind(String),

    #[error("Decode error: {0}")]
    Decode(String),

    /// The PDF/DOCX backend rejected the document. The message is the backend's own.
    #[error("{message}")]
    UpstreamParse {
        kind: SupportedKind,
        message: String,
    },

    #[error("Failed to open archive: {0}")]
    ContainerOpen(String),

    #[error("File too large (max {limit} bytes)")]
    SizeLimitExceeded { limit: u64 },

    #[error("Archive entry too large: {size} bytes (max {limit} bytes)")]
    EntryTooLarge { size: u64, limit: u64 },

    #[error("Invalid file type: {0}")]
    InvalidContentType(String),

    #[error("Malformed upload: {0}")]
    Multipart(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ExtractError {
    /// Boundary rejections are the client's fault; everything else is an extraction failure.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NoFile
            | Self::SizeLimitExceeded { .. }
            | Self::InvalidContentType(_)
            | Self::Multipart(_) => StatusCode::BAD_REQUEST,
            Self::UnsupportedKind(_)
            | Self::Decode(_)
            | Self::UpstreamParse { .. }
            | Self::ContainerOpen(_)
            | Self::EntryTooLarge { .. }
            | Self::Io(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error payload. `details` is only present on extraction failures (HTTP 500).
///
/// ```json
/// { "error": "Failed to process document", "details": "Unsupported file type: image.png" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&ExtractError> for ErrorBody {
    fn from(err: &ExtractError) -> Self {
        if err.status() == StatusCode::BAD_REQUEST {
            Self {
                error: err.to_string(),
                details: None,
            }
        } else {
            Self {
                error: PROCESSING_FAILED.to_string(),
                details: Some(err.to_string()),
            }
        }
    }
}

impl IntoResponse for ExtractError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody::from(&self))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
