//! docview-render - Render backend integration
//!
//! This crate wires the viewer to its external PDF rendering engine and
//! host environment without touching any globals:
//!
//! - [`PdfBackend`]: the rendering engine as an injected collaborator,
//!   configured with an explicit worker-script endpoint resolved once at
//!   construction (local paths first, version-keyed CDN fallbacks last).
//!
//! - [`Capabilities`]: one-time feature detection over host globals,
//!   exposed as immutable boolean flags.
//!
//! - [`MockViewportObserver`] / [`MockMediaQuery`]: injectable test
//!   doubles behind the core viewport interfaces.
//!
//! # Example
//!
//! ```rust,ignore
//! use docview_core::RenderConfig;
//! use docview_render::{MockProbe, PdfBackend};
//!
//! let backend = PdfBackend::connect(&RenderConfig::default(), &MockProbe::unreachable()).await;
//! println!("worker endpoint: {}", backend.worker_url());
//! ```

mod capability;
mod viewport;
mod worker;

pub use capability::{Capabilities, MockEnvironment};
pub use viewport::{MockMediaQuery, MockViewportObserver};
pub use worker::{candidate_worker_urls, cdn_fallback_url, resolve_worker_url, MockProbe, PdfBackend};

// Re-export traits for convenience
pub use docview_core::{Environment, MediaQueryService, RenderBackend, ViewportObserver, WorkerProbe};
