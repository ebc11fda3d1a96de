//! Worker-script endpoint resolution for the rendering engine.
//!
//! The engine renders in a worker whose script must be fetched from
//! somewhere. Candidates are tried in order of preference: same-origin
//! paths first, then version-keyed CDN fallbacks. Resolution never
//! fails; when nothing is reachable the primary CDN fallback is used.

use async_trait::async_trait;
use tracing::{debug, info, warn};

use docview_core::{RenderBackend, RenderConfig, WorkerProbe};

/// Worker script path served alongside the application.
const LOCAL_WORKER_PATH: &str = "/js/pdf.worker.min.mjs";

/// Primary CDN fallback, always assumed available.
pub fn cdn_fallback_url(version: &str) -> String {
    format!("https://unpkg.com/pdfjs-dist@{}/build/pdf.worker.min.js", version)
}

/// Secondary CDN fallback.
fn cdn_secondary_url(version: &str) -> String {
    format!(
        "https://cdn.jsdelivr.net/npm/pdfjs-dist@{}/build/pdf.worker.min.js",
        version
    )
}

/// Ordered candidate URLs for the worker script.
///
/// Same-origin locations come first so deployments that bundle the
/// worker are preferred over the CDNs.
pub fn candidate_worker_urls(version: &str, origin: Option<&str>) -> Vec<String> {
    let mut urls = Vec::new();

    if let Some(origin) = origin {
        urls.push(format!("{}{}", origin.trim_end_matches('/'), LOCAL_WORKER_PATH));
    }
    urls.push(LOCAL_WORKER_PATH.to_string());
    urls.push(format!(".{}", LOCAL_WORKER_PATH));
    urls.push(cdn_fallback_url(version));
    urls.push(cdn_secondary_url(version));

    urls
}

/// Resolve the worker endpoint: first reachable candidate, else the
/// primary CDN fallback.
pub async fn resolve_worker_url(
    version: &str,
    origin: Option<&str>,
    probe: &dyn WorkerProbe,
) -> String {
    for url in candidate_worker_urls(version, origin) {
        debug!(%url, "probing worker candidate");
        if probe.exists(&url).await {
            info!(%url, "worker script resolved");
            return url;
        }
    }

    let fallback = cdn_fallback_url(version);
    warn!(%fallback, "no worker candidate reachable, using CDN fallback");
    fallback
}

/// The PDF rendering engine as an injected collaborator.
///
/// Carries the engine version and the worker endpoint it was configured
/// with. The endpoint is resolved once, at construction.
#[derive(Debug, Clone)]
pub struct PdfBackend {
    version: String,
    worker_url: String,
}

impl PdfBackend {
    /// Connect a backend, resolving its worker endpoint.
    ///
    /// An explicit `worker_url` in the config short-circuits probing.
    pub async fn connect(config: &RenderConfig, probe: &dyn WorkerProbe) -> Self {
        let worker_url = match &config.worker_url {
            Some(url) => {
                info!(%url, "using configured worker endpoint");
                url.clone()
            }
            None => resolve_worker_url(&config.version, config.origin.as_deref(), probe).await,
        };

        Self {
            version: config.version.clone(),
            worker_url,
        }
    }
}

impl RenderBackend for PdfBackend {
    fn version(&self) -> &str {
        &self.version
    }

    fn worker_url(&self) -> &str {
        &self.worker_url
    }
}

/// A mock probe for testing that doesn't perform real reachability checks.
pub struct MockProbe {
    available: Vec<String>,
}

impl MockProbe {
    /// A probe for which the given URLs are reachable.
    pub fn with_available(urls: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            available: urls.into_iter().map(Into::into).collect(),
        }
    }

    /// A probe for which nothing is reachable.
    pub fn unreachable() -> Self {
        Self { available: Vec::new() }
    }
}

#[async_trait]
impl WorkerProbe for MockProbe {
    async fn exists(&self, url: &str) -> bool {
        self.available.iter().any(|u| u == url)
    }
}
