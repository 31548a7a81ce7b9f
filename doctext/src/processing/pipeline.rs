use crate::config::LimitsConfig;
use crate::error::{ExtractError, Result};
use crate::models::{SupportedKind, Upload, UploadResponse};
use crate::processing::{ArchiveExtractor, DocumentExtractor};

/// Turns one staged upload into an [`UploadResponse`].
///
/// Classifies by the original filename, sends ZIPs through the [`ArchiveExtractor`] and
/// everything else through the [`DocumentExtractor`]. The upload is consumed, so its bytes
/// are released exactly once on every exit path.
#[derive(Clone)]
pub struct UploadPipeline {
    documents: DocumentExtractor,
    archives: ArchiveExtractor,
}

impl UploadPipeline {
    pub fn new(limits: &LimitsConfig) -> Self {
        Self::with_extractor(DocumentExtractor::new(), limits)
    }

    pub fn with_extractor(documents: DocumentExtractor, limits: &LimitsConfig) -> Self {
        let archives = ArchiveExtractor::new(documents.clone(), limits.max_entry_bytes);
        Self {
            documents,
            archives,
        }
    }

    /// Runs the extraction on the blocking pool. `None` means the request carried no file.
    pub async fn handle_upload(&self, upload: Option<Upload>) -> Result<UploadResponse> {
        let upload = upload.ok_or(ExtractError::NoFile)?;
        let pipeline = self.clone();
        let span = tracing::Span::current();

        tokio::task::spawn_blocking(move || span.in_scope(|| pipeline.process(upload)))
            .await
            .map_err(|e| ExtractError::Internal(format!("extraction task failed: {e}")))?
    }

    pub fn process(&self, upload: Upload) -> Result<UploadResponse> {
        let Upload {
            filename, bytes, ..
        } = upload;

        let kind = SupportedKind::from_name(&filename)
            .ok_or_else(|| ExtractError::UnsupportedKind(filename.clone()))?;

        tracing::debug!(kind = %kind, size = bytes.len(), "Classified upload");

        match kind {
            SupportedKind::Zip => {
                let files = self.archives.extract(&bytes)?;
                let failed = files.iter().filter(|f| !f.result.is_ok()).count();
                tracing::info!(
                    members = files.len(),
                    failed,
                    "Extracted archive {}",
                    filename
                );
                Ok(UploadResponse::archive(filename, files))
            }
            _ => {
                let text = self.documents.extract(&bytes, kind)?;
                tracing::info!(chars = text.len(), "Extracted {} document {}", kind, filename);
                Ok(UploadResponse::document(filename, text))
            }
        }
    }
}
