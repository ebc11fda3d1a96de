//! docview-chunk - Sentence-aligned text chunking
//!
//! This crate splits a document's full text into an ordered sequence of
//! bounded-size chunks without ever breaking inside a sentence. Chunks
//! are sized to approximate a character target and are intended for a
//! downstream indexing or embedding process.
//!
//! # Example
//!
//! ```rust
//! use docview_chunk::chunk_document;
//!
//! let chunks = chunk_document("Hello world. This is a test.", 500);
//! assert_eq!(chunks.len(), 1);
//! assert_eq!(chunks[0].content, "Hello world. This is a test.");
//! ```

mod sentence;

pub use sentence::{chunk_document, SentenceChunker};

// Re-export types for convenience
pub use docview_core::{ChunkOptions, Chunker, DocumentChunk};
