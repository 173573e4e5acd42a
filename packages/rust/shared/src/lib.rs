//! Shared types, error model, and configuration for fixgen.
//!
//! This crate is the foundation depended on by all other fixgen crates.
//! It provides:
//! - [`FixgenError`] — the unified error type
//! - Domain types ([`Fixture`], [`FixtureGroup`], [`DocumentVersion`])
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{AppConfig, OutputConfig, SourceConfig, load_config_from};
pub use error::{FixgenError, Result};
pub use types::{
    DocumentVersion, ExpectedValue, Fixture, FixtureGroup, static_ident, test_fn_ident,
};
