//! JSON output renderer.
//!
//! Outputs the resolved settings object as pretty-printed JSON, suitable
//! for piping into other tools.

use crate::config::ProjectSettings;
use crate::output::SettingsRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl SettingsRenderer for JsonRenderer {
    fn render(&self, settings: &ProjectSettings) -> String {
        serde_json::to_string_pretty(settings).unwrap_or_else(|_| "{}".to_string())
    }
}
