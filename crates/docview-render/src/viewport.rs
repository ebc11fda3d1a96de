//! Test doubles for the viewport interfaces.
//!
//! The real observers and media query lists live in the host
//! environment; tests inject these doubles through the narrow core
//! traits instead of patching anything process-wide.

use std::collections::HashMap;
use std::sync::Mutex;

use docview_core::{MediaQueryService, ViewportObserver};

/// A mock viewport observer that records observed targets for inspection.
#[derive(Debug, Default)]
pub struct MockViewportObserver {
    targets: Mutex<Vec<String>>,
}

impl MockViewportObserver {
    /// Create a new mock observer with no observed targets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Targets currently under observation, in observe order.
    pub fn observed(&self) -> Vec<String> {
        self.targets.lock().unwrap().clone()
    }
}

impl ViewportObserver for MockViewportObserver {
    fn observe(&self, target: &str) {
        self.targets.lock().unwrap().push(target.to_string());
    }

    fn unobserve(&self, target: &str) {
        self.targets.lock().unwrap().retain(|t| t != target);
    }

    fn disconnect(&self) {
        self.targets.lock().unwrap().clear();
    }
}

/// A mock media query service with per-query answers and a default.
#[derive(Debug, Default)]
pub struct MockMediaQuery {
    answers: HashMap<String, bool>,
    default: bool,
}

impl MockMediaQuery {
    /// A service answering `default` for every query.
    pub fn with_default(default: bool) -> Self {
        Self {
            answers: HashMap::new(),
            default,
        }
    }

    /// Set the answer for one query.
    pub fn set(mut self, query: impl Into<String>, matches: bool) -> Self {
        self.answers.insert(query.into(), matches);
        self
    }
}

impl MediaQueryService for MockMediaQuery {
    fn matches(&self, query: &str) -> bool {
        self.answers.get(query).copied().unwrap_or(self.default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observer_records_targets() {
        let observer = MockViewportObserver::new();
        observer.observe("#page-1");
        observer.observe("#page-2");

        assert_eq!(observer.observed(), vec!["#page-1", "#page-2"]);
    }

    #[test]
    fn test_unobserve_removes_target() {
        let observer = MockViewportObserver::new();
        observer.observe("#page-1");
        observer.observe("#page-2");
        observer.unobserve("#page-1");

        assert_eq!(observer.observed(), vec!["#page-2"]);
    }

    #[test]
    fn test_disconnect_clears_all() {
        let observer = MockViewportObserver::new();
        observer.observe("#page-1");
        observer.disconnect();

        assert!(observer.observed().is_empty());
    }

    #[test]
    fn test_media_query_default_and_overrides() {
        let service = MockMediaQuery::with_default(false).set("(max-width: 768px)", true);

        assert!(service.matches("(max-width: 768px)"));
        assert!(!service.matches("(prefers-color-scheme: dark)"));
    }
}
