use serde::{Deserialize, Serialize};

use crate::error::ExtractError;

/// A staged upload: the original filename, the declared content type and the raw bytes.
///
/// The bytes live in memory for the duration of one request and are dropped once the
/// pipeline has consumed the upload.
#[derive(Debug, Clone)]
pub struct Upload {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            content_type: None,
            bytes: bytes.into(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Outcome of extracting one document.
///
/// Serialized as `{"content": "..."}` or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionResult {
    Content(String),
    Error(String),
}

impl ExtractionResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Content(_))
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Content(text) => Some(text),
            Self::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Content(_) => None,
            Self::Error(message) => Some(message),
        }
    }
}

impl From<Result<String, ExtractError>> for ExtractionResult {
    fn from(result: Result<String, ExtractError>) -> Self {
        match result {
            Ok(text) => Self::Content(text),
            Err(e) => Self::Error(e.to_string()),
        }
    }
}

/// One qualifying archive entry and its extraction outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ArchiveMemberResult {
    pub name: String,
    #[serde(flatten)]
    pub result: ExtractionResult,
}

impl ArchiveMemberResult {
    pub fn new(name: impl Into<String>, result: impl Into<ExtractionResult>) -> Self {
        Self {
            name: name.into(),
            result: result.into(),
        }
    }
}

/// Payload of a successful upload: text for a single document, member results for a ZIP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UploadBody {
    Content(String),
    Files(Vec<ArchiveMemberResult>),
}

/// Response to `POST /upload`.
///
/// ```json
/// { "success": true, "filename": "report.txt", "content": "hello world" }
/// { "success": true, "filename": "bundle.zip", "files": [{ "name": "a.txt", "content": "hi" }] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UploadResponse {
    pub success: bool,
    pub filename: String,
    #[serde(flatten)]
    pub body: UploadBody,
}

impl UploadResponse {
    pub fn document(filename: impl Into<String>, text: String) -> Self {
        Self {
            success: true,
            filename: filename.into(),
            body: UploadBody::Content(text),
        }
    }

    pub fn archive(filename: impl Into<String>, files: Vec<ArchiveMemberResult>) -> Self {
        Self {
            success: true,
            filename: filename.into(),
            body: UploadBody::Files(files),
        }
    }

    pub fn content(&self) -> Option<&str> {
        match &self.body {
            UploadBody::Content(text) => Some(text),
            UploadBody::Files(_) => None,
        }
    }

    pub fn files(&self) -> Option<&[ArchiveMemberResult]> {
        match &self.body {
            UploadBody::Content(_) => None,
            UploadBody::Files(files) => Some(files),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_response_wire_shape() {
        let response = UploadResponse::document("report.txt", "hello world".to_string());
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({ "success": true, "filename": "report.txt", "content": "hello world" })
        );
        assert!(value.get("files").is_none());
    }

    #[test]
    fn test_archive_response_wire_shape() {
        let response = UploadResponse::archive(
            "bundle.zip",
            vec![
                ArchiveMemberResult::new("a.txt", ExtractionResult::Content("hi".to_string())),
                ArchiveMemberResult::new("b.pdf", ExtractionResult::Error("bad".to_string())),
            ],
        );
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "success": true,
                "filename": "bundle.zip",
                "files": [
                    { "name": "a.txt", "content": "hi" },
                    { "name": "b.pdf", "error": "bad" }
                ]
            })
        );
        assert!(value.get("content").is_none());
    }

    #[test]
    fn test_extraction_result_from_error_keeps_message() {
        let result: ExtractionResult =
            Err::<String, _>(ExtractError::Decode("not utf-8".to_string())).into();
        assert!(!result.is_ok());
        assert_eq!(result.error(), Some("Decode error: not utf-8"));
        assert!(result.text().is_none());
    }
}
