//! Settings loading and layering.
//!
//! Handles `docconf.toml` loading, global display defaults, and
//! environment variable overrides with proper priority ordering.

pub mod loader;

pub use loader::{ConfigError, ExtensionOptions, GlobalDefaults, ProjectSettings};
