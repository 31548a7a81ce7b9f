use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::error::{ExtractError, Result};
use crate::models::SupportedKind;
use crate::processing::extractors::{DocxExtractor, PdfExtractor, TextExtractor, TextParser};

/// Single-document extraction: bytes of a known kind in, plain text out.
///
/// PDF and DOCX parsing is delegated to pluggable [`TextParser`] backends. TXT is decoded
/// in place. ZIP is never handled here; archives go through
/// [`ArchiveExtractor`](crate::processing::ArchiveExtractor).
#[derive(Clone)]
pub struct DocumentExtractor {
    pdf: Arc<dyn TextParser>,
    docx: Arc<dyn TextParser>,
}

impl DocumentExtractor {
    pub fn new() -> Self {
        Self::with_parsers(Arc::new(PdfExtractor), Arc::new(DocxExtractor))
    }

    pub fn with_parsers(pdf: Arc<dyn TextParser>, docx: Arc<dyn TextParser>) -> Self {
        Self { pdf, docx }
    }

    pub fn extract(&self, bytes: &[u8], kind: SupportedKind) -> Result<String> {
        match kind {
            SupportedKind::Txt => TextExtractor::extract(bytes),
            SupportedKind::Pdf => Self::run_guarded(self.pdf.as_ref(), bytes),
            SupportedKind::Docx => Self::run_guarded(self.docx.as_ref(), bytes),
            SupportedKind::Zip => Err(ExtractError::UnsupportedKind(
                "zip archives cannot be extracted as a single document".to_string(),
            )),
        }
    }

    /// Parser backends can panic on malformed input; that must surface as a parse error
    /// for this document only.
    fn run_guarded(parser: &dyn TextParser, bytes: &[u8]) -> Result<String> {
        match panic::catch_unwind(AssertUnwindSafe(|| parser.extract_text(bytes))) {
            Ok(result) => result,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                tracing::warn!(kind = %parser.kind(), "Parser panicked: {}", message);
                Err(ExtractError::UpstreamParse {
                    kind: parser.kind(),
                    message: format!("{} parser failed: {message}", parser.kind()),
                })
            }
        }
    }
}

impl Default for DocumentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
