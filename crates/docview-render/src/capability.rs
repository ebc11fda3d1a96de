//! Host-environment capability detection.
//!
//! Presence checks against host globals run exactly once, at
//! initialization, and the results are carried as immutable flags. This
//! replaces conditional patching of globals at load time.

use tracing::debug;

use docview_core::Environment;

/// Globals probed during detection.
const GLOBAL_REACT: &str = "React";
const GLOBAL_REACT_IS: &str = "ReactIs";
const GLOBAL_STYLED: &str = "styled";

/// Immutable capability flags for the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// The React global is present.
    pub react: bool,

    /// The ReactIs global is present.
    pub react_is: bool,

    /// The styled-components global is present.
    pub styled_components: bool,
}

impl Capabilities {
    /// Probe the environment once and record the results.
    pub fn detect(env: &dyn Environment) -> Self {
        let caps = Self {
            react: env.has_global(GLOBAL_REACT),
            react_is: env.has_global(GLOBAL_REACT_IS),
            styled_components: env.has_global(GLOBAL_STYLED),
        };
        debug!(?caps, "detected host capabilities");
        caps
    }

    /// The styling library is loaded but its ReactIs dependency is
    /// missing, so the interop shim must be installed.
    pub fn needs_react_is_shim(&self) -> bool {
        !self.react_is && self.styled_components
    }
}

/// A mock environment for testing with a settable list of globals.
#[derive(Debug, Default)]
pub struct MockEnvironment {
    globals: Vec<String>,
}

impl MockEnvironment {
    /// An environment exposing the given globals.
    pub fn with_globals(globals: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            globals: globals.into_iter().map(Into::into).collect(),
        }
    }

    /// An environment exposing no globals at all.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl Environment for MockEnvironment {
    fn has_global(&self, name: &str) -> bool {
        self.globals.iter().any(|g| g == name)
    }
}
