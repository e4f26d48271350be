//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and built-in defaults so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "docconf";

/// Crate version, shown by `docconf version` and `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project-local settings filename (expected at the project root).
pub const CONFIG_FILENAME: &str = "docconf.toml";

/// Directory name under `~/.config/` for global display defaults.
pub const CONFIG_DIR: &str = "docconf";


// ── Built-in defaults for omitted optional fields ───────────────────

pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_THEME: &str = "default";
pub const DEFAULT_SHOW_COPYRIGHT: bool = true;


// ── Environment variable names ──────────────────────────────────────

pub const ENV_LANGUAGE: &str = "DOCCONF_LANGUAGE";
pub const ENV_THEME: &str = "DOCCONF_THEME";
pub const ENV_SHOW_COPYRIGHT: &str = "DOCCONF_SHOW_COPYRIGHT";
