use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::handlers;
use crate::error;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "doctext API",
        version = "1.0.0",
        description = "Extracts plain text from uploaded PDF, DOCX, TXT and ZIP files.",
    ),
    paths(handlers::health::health_check, handlers::upload::upload_document,),
    components(schemas(
        models::SupportedKind,
        models::ExtractionResult,
        models::ArchiveMemberResult,
        models::UploadBody,
        models::UploadResponse,
        error::ErrorBody,
        handlers::health::HealthData,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "extraction", description = "Document upload and text extraction"),
    ),
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
