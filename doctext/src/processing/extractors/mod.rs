use crate::error::Result;
use crate::models::SupportedKind;

/// A byte-level text extraction backend for one document format.
///
/// Implementations may fail with any [`ExtractError`](crate::error::ExtractError); panics are
/// caught by the caller and reported as upstream parse failures.
pub trait TextParser: Send + Sync {
    fn kind(&self) -> SupportedKind;
    fn extract_text(&self, bytes: &[u8]) -> Result<String>;
}

pub mod docx;
pub mod pdf;
pub mod text;

pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;
pub use text::TextExtractor;
