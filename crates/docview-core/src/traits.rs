//! Core traits defining the interfaces between components.
//!
//! The viewer's host-environment dependencies (render worker, viewport
//! observation, media queries, global capability probes) are all modeled
//! as narrow traits so that callers inject implementations and tests
//! inject doubles.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::DocumentChunk;

/// Chunking options.
#[derive(Debug, Clone)]
pub struct ChunkOptions {
    /// Target maximum character length per chunk. A single sentence
    /// longer than this is kept whole and allowed to overflow.
    pub chunk_size: usize,
}

impl Default for ChunkOptions {
    fn default() -> Self {
        Self { chunk_size: 500 }
    }
}

/// Chunking strategy trait.
pub trait Chunker: Send + Sync {
    /// Chunk document text into ordered, sentence-aligned pieces.
    fn chunk(&self, text: &str, options: &ChunkOptions) -> Result<Vec<DocumentChunk>>;
}

/// The external rendering engine, injected as a collaborator configured
/// with an explicit worker endpoint.
pub trait RenderBackend: Send + Sync {
    /// Engine version string (keys the CDN worker URLs).
    fn version(&self) -> &str;

    /// The worker-script endpoint this backend was configured with.
    fn worker_url(&self) -> &str;
}

/// Reachability check for a candidate worker-script URL.
#[async_trait]
pub trait WorkerProbe: Send + Sync {
    /// Check whether the worker script exists at the given URL.
    async fn exists(&self, url: &str) -> bool;
}

/// Host-environment global lookup, probed once during capability detection.
pub trait Environment: Send + Sync {
    /// Check whether a named global is present in the host environment.
    fn has_global(&self, name: &str) -> bool;
}

/// Viewport element observation (resize/intersection in the original host).
pub trait ViewportObserver: Send + Sync {
    /// Start observing a target element.
    fn observe(&self, target: &str);

    /// Stop observing a target element.
    fn unobserve(&self, target: &str);

    /// Stop observing all targets.
    fn disconnect(&self);
}

/// Media query evaluation.
pub trait MediaQueryService: Send + Sync {
    /// Evaluate a media query string.
    fn matches(&self, query: &str) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chunk_options() {
        let options = ChunkOptions::default();
        assert_eq!(options.chunk_size, 500);
    }
}
