//! Sentence-accumulating chunker.
//!
//! Splits text on sentence terminators and packs whole sentences into
//! chunks up to a character target. A sentence is never split: one that
//! exceeds the target on its own becomes an oversized chunk.

use tracing::debug;

use docview_core::{ChunkOptions, Chunker, DocumentChunk, Result};

/// Characters treated as sentence terminators. Runs of consecutive
/// terminators act as a single split point.
const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Split `text` into sentence-aligned chunks of roughly `chunk_size`
/// characters.
///
/// Each recognized sentence is trimmed and normalized to end in a single
/// `.`, whatever terminator it originally carried. Sentences accumulate
/// in input order; when appending the next one would push the accumulator
/// past `chunk_size`, the accumulator is emitted and a new one starts.
/// Indices are contiguous from 0 and no chunk is ever empty.
///
/// Total over all inputs: an empty string yields an empty vector, a
/// `chunk_size` of 0 yields one chunk per sentence, and text with no
/// terminator at all is treated as a single sentence.
pub fn chunk_document(text: &str, chunk_size: usize) -> Vec<DocumentChunk> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut index: u32 = 0;

    for candidate in text.split(SENTENCE_TERMINATORS) {
        let candidate = candidate.trim();
        if candidate.is_empty() {
            continue;
        }

        // Lossy normalization: `!` and `?` become `.`.
        let sentence_len = candidate.chars().count() + 1;

        // Lengths are in characters, not bytes.
        if !current.is_empty() && current.chars().count() + sentence_len > chunk_size {
            chunks.push(DocumentChunk::new(index, &current));
            index += 1;
            current.clear();
        }

        current.push_str(candidate);
        current.push('.');
        current.push(' ');
    }

    if !current.trim().is_empty() {
        chunks.push(DocumentChunk::new(index, &current));
    }

    debug!(
        chunk_size,
        chunks = chunks.len(),
        input_chars = text.chars().count(),
        "chunked document"
    );

    chunks
}

/// Sentence-aligned chunker.
///
/// Trait-object form of [`chunk_document`] for callers that take a
/// `dyn Chunker`.
#[derive(Debug, Default)]
pub struct SentenceChunker;

impl SentenceChunker {
    /// Create a new sentence chunker.
    pub fn new() -> Self {
        Self
    }
}

impl Chunker for SentenceChunker {
    fn chunk(&self, text: &str, options: &ChunkOptions) -> Result<Vec<DocumentChunk>> {
        Ok(chunk_document(text, options.chunk_size))
    }
}
