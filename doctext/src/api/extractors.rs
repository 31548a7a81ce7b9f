//! Upload boundary: pulls the `document` file out of a multipart request and applies the
//! content-type and size checks before anything reaches the extraction pipeline.

use axum::extract::multipart::MultipartError;
use axum::extract::multipart::MultipartRejection;
use axum::extract::Multipart;
use axum::http::StatusCode;

use crate::error::{ExtractError, Result};
use crate::models::Upload;

/// Multipart field that carries the uploaded file.
pub const DOCUMENT_FIELD: &str = "document";

/// Declared content types accepted at the boundary.
pub const ACCEPTED_CONTENT_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/plain",
    "application/zip",
    "application/x-zip-compressed",
    "application/x-zip",
    "multipart/x-zip",
];

/// Compares the media type only, ignoring parameters such as `charset`.
pub fn is_accepted_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    ACCEPTED_CONTENT_TYPES.contains(&essence.as_str())
}

impl From<MultipartRejection> for ExtractError {
    fn from(rejection: MultipartRejection) -> Self {
        ExtractError::Multipart(rejection.body_text())
    }
}

fn map_multipart_error(err: MultipartError, max_bytes: u64) -> ExtractError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ExtractError::SizeLimitExceeded { limit: max_bytes }
    } else {
        ExtractError::Multipart(err.body_text())
    }
}

/// Reads the single `document` file from the form.
///
/// Returns `Ok(None)` when the form has no such file. Other fields are ignored. The file is
/// streamed chunk by chunk so an oversized upload is rejected as soon as it crosses
/// `max_bytes`; a file of exactly `max_bytes` is accepted.
pub async fn read_document(multipart: &mut Multipart, max_bytes: u64) -> Result<Option<Upload>> {
    let mut upload: Option<Upload> = None;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| map_multipart_error(e, max_bytes))?
    {
        if field.name() != Some(DOCUMENT_FIELD) {
            continue;
        }
        // A plain form value under the file field name is not a file.
        let Some(filename) = field.file_name().map(str::to_owned) else {
            continue;
        };
        if upload.is_some() {
            return Err(ExtractError::Multipart(format!(
                "only one `{DOCUMENT_FIELD}` file may be uploaded"
            )));
        }

        let content_type = field
            .content_type()
            .map(str::to_owned)
            .or_else(|| mime_guess::from_path(&filename).first_raw().map(str::to_owned));
        match content_type.as_deref() {
            Some(ct) if is_accepted_content_type(ct) => {}
            other => {
                return Err(ExtractError::InvalidContentType(
                    other.unwrap_or("unknown").to_string(),
                ))
            }
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| map_multipart_error(e, max_bytes))?
        {
            if (bytes.len() + chunk.len()) as u64 > max_bytes {
                return Err(ExtractError::SizeLimitExceeded { limit: max_bytes });
            }
            bytes.extend_from_slice(&chunk);
        }

        upload = Some(Upload {
            filename,
            content_type,
            bytes,
        });
    }

    Ok(upload)
}
