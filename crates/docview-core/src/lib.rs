//! docview-core - Core types and traits for the document viewer utilities
//!
//! This crate provides the foundational types, traits, configuration, and
//! error handling used throughout the docview workspace.

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::*;
pub use error::{DocviewError, Result};
pub use traits::*;
pub use types::*;
