use super::TextParser;
use crate::error::{ExtractError, Result};
use crate::models::SupportedKind;

pub struct PdfExtractor;

impl PdfExtractor {
    pub fn extract(bytes: &[u8]) -> Result<String> {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::UpstreamParse {
            kind: SupportedKind::Pdf,
            message: e.to_string(),
        })
    }
}

impl TextParser for PdfExtractor {
    fn kind(&self) -> SupportedKind {
        SupportedKind::Pdf
    }

    fn extract_text(&self, bytes: &[u8]) -> Result<String> {
        Self::extract(bytes)
    }
}
