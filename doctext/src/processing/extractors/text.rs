use crate::error::{ExtractError, Result};

pub struct TextExtractor;

impl TextExtractor {
    /// Strict UTF-8 decode. Content is returned verbatim, including any byte order mark.
    pub fn extract(bytes: &[u8]) -> Result<String> {
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|e| ExtractError::Decode(format!("file is not valid UTF-8 text: {e}")))
    }
}
