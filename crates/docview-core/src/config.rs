//! Configuration types for the docview utilities.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the viewer utilities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Chunking configuration.
    #[serde(default)]
    pub chunking: ChunkingConfig,

    /// Render backend configuration.
    #[serde(default)]
    pub render: RenderConfig,
}

/// Chunking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Target maximum characters per chunk.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self { chunk_size: 500 }
    }
}

/// Render backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Rendering engine version, keys the CDN worker URLs.
    #[serde(default = "default_engine_version")]
    pub version: String,

    /// Origin for origin-scoped worker candidates (e.g. "https://app.example.com").
    #[serde(default)]
    pub origin: Option<String>,

    /// Explicit worker endpoint override. When set, no probing happens.
    #[serde(default)]
    pub worker_url: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            version: default_engine_version(),
            origin: None,
            worker_url: None,
        }
    }
}

// Default value functions

fn default_chunk_size() -> usize {
    500
}

fn default_engine_version() -> String {
    "3.11.174".to_string()
}

impl ViewerConfig {
    /// Load configuration from file.
    pub fn load(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| {
            crate::error::DocviewError::Config {
                message: format!("Failed to parse config: {}", e),
            }
        })?;
        Ok(config)
    }

    /// Load configuration from default paths.
    pub fn load_default() -> crate::error::Result<Self> {
        // Try user config first
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("docview").join("config.toml");
            if user_config.exists() {
                return Self::load(&user_config);
            }
        }

        // Try local config
        let local_config = PathBuf::from("docview.toml");
        if local_config.exists() {
            return Self::load(&local_config);
        }

        // Return defaults
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ViewerConfig::default();
        assert_eq!(config.chunking.chunk_size, 500);
        assert_eq!(config.render.version, "3.11.174");
        assert!(config.render.worker_url.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[chunking]
chunk_size = 800

[render]
version = "4.0.379"
worker_url = "https://cdn.example.com/pdf.worker.min.js"
"#
        )
        .unwrap();

        let config = ViewerConfig::load(file.path()).unwrap();
        assert_eq!(config.chunking.chunk_size, 800);
        assert_eq!(config.render.version, "4.0.379");
        assert_eq!(
            config.render.worker_url.as_deref(),
            Some("https://cdn.example.com/pdf.worker.min.js")
        );
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[chunking]\nchunk_size = 200").unwrap();

        let config = ViewerConfig::load(file.path()).unwrap();
        assert_eq!(config.chunking.chunk_size, 200);
        assert_eq!(config.render.version, "3.11.174");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [").unwrap();

        let err = ViewerConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, crate::error::DocviewError::Config { .. }));
    }
}
