use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Document format, derived from the lowercased filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SupportedKind {
    Pdf,
    Docx,
    Txt,
    Zip,
}

impl SupportedKind {
    /// Classify a file or archive entry name. `None` means unsupported.
    ///
    /// Only the extension of the final path component counts, so `docs/a.TXT` is
    /// [`SupportedKind::Txt`] while `.pdf` (no stem) and `pdf` are unsupported.
    pub fn from_name(name: &str) -> Option<Self> {
        let extension = Path::new(name).extension()?.to_str()?;
        Self::from_extension(extension)
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "txt" => Some(Self::Txt),
            "zip" => Some(Self::Zip),
            _ => None,
        }
    }

    /// Kinds that are extracted when found inside an archive. Nested archives are not.
    pub fn is_archive_member(self) -> bool {
        !matches!(self, Self::Zip)
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Txt => "txt",
            Self::Zip => "zip",
        }
    }
}

impl fmt::Display for SupportedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_supported_extensions() {
        assert_eq!(SupportedKind::from_name("report.pdf"), Some(SupportedKind::Pdf));
        assert_eq!(SupportedKind::from_name("letter.docx"), Some(SupportedKind::Docx));
        assert_eq!(SupportedKind::from_name("notes.txt"), Some(SupportedKind::Txt));
        assert_eq!(SupportedKind::from_name("bundle.zip"), Some(SupportedKind::Zip));
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(SupportedKind::from_name("REPORT.PDF"), Some(SupportedKind::Pdf));
        assert_eq!(SupportedKind::from_name("Letter.DocX"), Some(SupportedKind::Docx));
        assert_eq!(SupportedKind::from_name("bundle.Zip"), Some(SupportedKind::Zip));
    }

    #[test]
    fn test_classify_uses_last_extension_of_last_component() {
        assert_eq!(SupportedKind::from_name("docs/a.txt"), Some(SupportedKind::Txt));
        assert_eq!(SupportedKind::from_name("backup.tar.zip"), Some(SupportedKind::Zip));
        assert_eq!(SupportedKind::from_name("report.pdf.exe"), None);
        assert_eq!(SupportedKind::from_name("folder.pdf/readme"), None);
    }

    #[test]
    fn test_classify_rejects_unknown_or_missing_extensions() {
        assert_eq!(SupportedKind::from_name("image.png"), None);
        assert_eq!(SupportedKind::from_name("legacy.doc"), None);
        assert_eq!(SupportedKind::from_name("pdf"), None);
        assert_eq!(SupportedKind::from_name(".pdf"), None);
        assert_eq!(SupportedKind::from_name("trailing."), None);
        assert_eq!(SupportedKind::from_name(""), None);
    }

    #[test]
    fn test_archive_member_kinds() {
        assert!(SupportedKind::Pdf.is_archive_member());
        assert!(SupportedKind::Docx.is_archive_member());
        assert!(SupportedKind::Txt.is_archive_member());
        assert!(!SupportedKind::Zip.is_archive_member());
    }
}
