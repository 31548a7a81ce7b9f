//! `POST /upload`: multipart file in, extracted text out.

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::Json;
use tracing::Instrument;
use uuid::Uuid;

use crate::api::extractors::read_document;
use crate::api::AppState;
use crate::error::{ErrorBody, ExtractError, Result};
use crate::models::UploadResponse;

/// `POST /upload`
///
/// Accepts a multipart form with a `document` file field (PDF, DOCX, TXT or ZIP, up to the
/// configured size limit). Single documents come back as `content`; ZIP archives come back as
/// `files`, one entry per PDF/DOCX/TXT member, each with either `content` or `error`.
#[utoipa::path(
    post,
    path = "/upload",
    tag = "extraction",
    request_body(content_type = "multipart/form-data", content = String, description = "Multipart form with a `document` file field"),
    responses(
        (status = 200, description = "Text extracted", body = UploadResponse),
        (status = 400, description = "No file, file too large, or file type not accepted", body = ErrorBody),
        (status = 500, description = "Extraction failed", body = ErrorBody),
    )
)]
pub async fn upload_document(
    State(state): State<AppState>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!(
        "upload",
        %request_id,
        filename = tracing::field::Empty
    );

    async move {
        let result = receive(&state, multipart).await;
        if let Err(e) = &result {
            tracing::warn!(status = %e.status(), "Upload failed: {}", e);
        }
        result.map(Json)
    }
    .instrument(span)
    .await
}

async fn receive(
    state: &AppState,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<UploadResponse> {
    let mut multipart = multipart.map_err(ExtractError::from)?;
    let upload = read_document(&mut multipart, state.config.limits.max_upload_bytes).await?;

    if let Some(upload) = &upload {
        tracing::Span::current().record("filename", upload.filename.as_str());
        tracing::info!(
            size = upload.bytes.len(),
            content_type = upload.content_type.as_deref().unwrap_or("unknown"),
            "Received {}",
            upload.filename
        );
    }

    state.pipeline.handle_upload(upload).await
}
