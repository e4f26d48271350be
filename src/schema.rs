//! JSON Schema for the `docconf.toml` declaration file.
//!
//! Printed by `docconf schema`, mainly for editor integration. The doc
//! comments on [`Declaration`] become the schema's field descriptions.

use schemars::{JsonSchema, schema_for};
use std::collections::BTreeMap;

/// A documentation project's settings declaration (`docconf.toml`).
#[derive(JsonSchema)]
#[schemars(rename = "docconf.toml")]
pub struct Declaration {
    /// Display name of the documented project.
    pub project: String,
    /// Display name of the author.
    pub author: String,
    /// Whether to render a copyright line (default: true).
    pub show_copyright: Option<bool>,
    /// Output language for generated text, as a locale code (default: "en").
    pub language: Option<String>,
    /// Glob patterns for files and directories excluded from processing.
    pub exclude_patterns: Option<Vec<String>>,
    /// Name of the visual theme to apply (default: "default").
    pub theme: Option<String>,
    /// Extension modules to activate, in activation order.
    pub extensions: Option<Vec<String>>,
    /// Per-extension configuration, keyed by extension identifier.
    pub extension_options: Option<BTreeMap<String, BTreeMap<String, serde_json::Value>>>,
}

/// Render the declaration-file schema as pretty-printed JSON.
pub fn declaration_schema() -> String {
    let schema = schema_for!(Declaration);
    serde_json::to_string_pretty(&schema).unwrap_or_else(|_| "{}".to_string())
}
