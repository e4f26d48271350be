//! Output renderers for resolved settings: terminal, JSON.

pub mod json;
pub mod terminal;

use crate::config::ProjectSettings;

/// Trait for rendering resolved settings to an output format.
pub trait SettingsRenderer {
    /// Render settings to a string.
    fn render(&self, settings: &ProjectSettings) -> String;
}
