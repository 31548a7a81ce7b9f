//! ZIP fan-out over the single-document extractor.

use std::io::{Cursor, Read};

use zip::ZipArchive;

use crate::error::{ExtractError, Result};
use crate::models::{ArchiveMemberResult, SupportedKind};
use crate::processing::DocumentExtractor;

/// Extracts every PDF, DOCX and TXT entry of a ZIP archive.
///
/// Directories and entries of any other kind (nested archives included) are skipped without
/// a trace in the output. A failing entry yields an `error` result for that entry and never
/// stops the remaining ones. Only a container that cannot be opened fails the whole call.
#[derive(Clone)]
pub struct ArchiveExtractor {
    documents: DocumentExtractor,
    max_entry_bytes: u64,
}

impl ArchiveExtractor {
    pub fn new(documents: DocumentExtractor, max_entry_bytes: u64) -> Self {
        Self {
            documents,
            max_entry_bytes,
        }
    }

    /// Results come back in central directory order.
    pub fn extract(&self, bytes: &[u8]) -> Result<Vec<ArchiveMemberResult>> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| ExtractError::ContainerOpen(e.to_string()))?;

        let mut results = Vec::new();

        for index in 0..archive.len() {
            let Some(name) = archive.name_for_index(index).map(str::to_owned) else {
                continue;
            };

            if is_directory(&name) {
                continue;
            }
            let Some(kind) = SupportedKind::from_name(&name).filter(|k| k.is_archive_member())
            else {
                tracing::debug!(entry = index, name = %name, "Skipping unsupported archive entry");
                continue;
            };

            let result = self.extract_member(&mut archive, index, kind);
            match &result {
                Ok(text) => tracing::debug!(
                    entry = index,
                    name = %name,
                    chars = text.len(),
                    "Extracted archive entry"
                ),
                Err(e) => tracing::warn!(entry = index, name = %name, "Archive entry failed: {}", e),
            }
            results.push(ArchiveMemberResult::new(name, result));
        }

        Ok(results)
    }

    /// The entry buffer is dropped before this returns, so at most one member is held in
    /// memory at a time.
    fn extract_member(
        &self,
        archive: &mut ZipArchive<Cursor<&[u8]>>,
        index: usize,
        kind: SupportedKind,
    ) -> Result<String> {
        let buffer = {
            let entry = archive
                .by_index(index)
                .map_err(|e| ExtractError::Decode(format!("unreadable archive entry: {e}")))?;
            let declared = entry.size();
            read_bounded(entry, declared, self.max_entry_bytes)?
        };
        self.documents.extract(&buffer, kind)
    }
}

fn is_directory(name: &str) -> bool {
    name.ends_with('/') || name.ends_with('\\')
}

/// Reads at most `limit` bytes. Both the declared size and the actual decompressed length
/// are checked, since the former comes from the archive and may be wrong.
fn read_bounded(reader: impl Read, declared: u64, limit: u64) -> Result<Vec<u8>> {
    if declared > limit {
        return Err(ExtractError::EntryTooLarge {
            size: declared,
            limit,
        });
    }

    let mut buffer = Vec::with_capacity(declared as usize);
    reader
        .take(limit.saturating_add(1))
        .read_to_end(&mut buffer)?;

    let actual = buffer.len() as u64;
    if actual > limit {
        return Err(ExtractError::EntryTooLarge {
            size: actual,
            limit,
        });
    }
    Ok(buffer)
}
