//! Core domain types for the document viewer utilities.

use serde::{Deserialize, Serialize};

/// Source format of a document, determines whether the render backend
/// (and its worker script) is involved in text extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Pdf,
    PlainText,
    Markdown,
    Html,
    Unknown,
}

impl SourceFormat {
    /// Detect source format from file extension.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => Self::Pdf,
            "txt" => Self::PlainText,
            "md" | "markdown" => Self::Markdown,
            "html" | "htm" => Self::Html,
            _ => Self::Unknown,
        }
    }

    /// Detect source format from file path.
    pub fn from_path(path: &str) -> Self {
        path.rsplit('.')
            .next()
            .map(Self::from_extension)
            .unwrap_or(Self::Unknown)
    }

    /// Check if this format requires the render worker for text extraction.
    pub fn needs_worker(&self) -> bool {
        matches!(self, Self::Pdf)
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pdf => "PDF",
            Self::PlainText => "Plain Text",
            Self::Markdown => "Markdown",
            Self::Html => "HTML",
            Self::Unknown => "Unknown",
        };
        write!(f, "{}", s)
    }
}

/// One contiguous, sentence-aligned slice of a larger document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentChunk {
    /// Chunk text content, trimmed of leading/trailing whitespace.
    pub content: String,

    /// Zero-based ordinal position within the sequence produced from
    /// one input document.
    pub index: u32,
}

impl DocumentChunk {
    /// Create a new chunk. Content is trimmed on construction.
    pub fn new(index: u32, content: &str) -> Self {
        Self {
            content: content.trim().to_string(),
            index,
        }
    }

    /// Character length of the chunk content.
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_format_from_extension() {
        assert_eq!(SourceFormat::from_extension("pdf"), SourceFormat::Pdf);
        assert_eq!(SourceFormat::from_extension("PDF"), SourceFormat::Pdf);
        assert_eq!(SourceFormat::from_extension("md"), SourceFormat::Markdown);
        assert_eq!(SourceFormat::from_extension("docx"), SourceFormat::Unknown);
    }

    #[test]
    fn test_source_format_from_path() {
        assert_eq!(SourceFormat::from_path("contracts/lease.pdf"), SourceFormat::Pdf);
        assert_eq!(SourceFormat::from_path("README.md"), SourceFormat::Markdown);
        assert_eq!(SourceFormat::from_path("no_extension"), SourceFormat::Unknown);
    }

    #[test]
    fn test_needs_worker() {
        assert!(SourceFormat::Pdf.needs_worker());
        assert!(!SourceFormat::PlainText.needs_worker());
        assert!(!SourceFormat::Html.needs_worker());
    }

    #[test]
    fn test_chunk_trims_content() {
        let chunk = DocumentChunk::new(0, "  Hello world.  ");
        assert_eq!(chunk.content, "Hello world.");
        assert_eq!(chunk.index, 0);
        assert_eq!(chunk.char_len(), 12);
    }
}
