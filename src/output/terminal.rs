//! Terminal renderer: styled key-value listing.
//!
//! Labels are coloured, values are printed verbatim so that multibyte
//! project names and locale codes stay copy-pastable.

use colored::Colorize;

use crate::config::ProjectSettings;
use crate::output::SettingsRenderer;

/// Terminal output renderer with coloured labels.
pub struct TerminalRenderer;

impl SettingsRenderer for TerminalRenderer {
    fn render(&self, settings: &ProjectSettings) -> String {
        let mut output = String::new();

        output.push_str(&format!("  {}          {}\n", "project:".cyan(), settings.project));
        output.push_str(&format!("  {}           {}\n", "author:".cyan(), settings.author));
        output.push_str(&format!(
            "  {}   {}\n",
            "show copyright:".cyan(),
            settings.show_copyright
        ));
        output.push_str(&format!("  {}         {}\n", "language:".cyan(), settings.language));
        output.push_str(&format!("  {}            {}\n", "theme:".cyan(), settings.theme));

        if settings.exclude_patterns.is_empty() {
            output.push_str(&format!("  {} {}\n", "exclude patterns:".cyan(), "(none)".dimmed()));
        } else {
            output.push_str(&format!(
                "  {} {}\n",
                "exclude patterns:".cyan(),
                settings.exclude_patterns.join(", ")
            ));
        }

        if settings.extensions.is_empty() {
            output.push_str(&format!("  {}       {}\n", "extensions:".cyan(), "(none)".dimmed()));
        } else {
            output.push_str(&format!(
                "  {}       {}\n",
                "extensions:".cyan(),
                settings.extensions.join(", ")
            ));
            for (extension, options) in &settings.extension_options {
                output.push_str(&format!("    {}\n", format!("[{extension}]").bold()));
                for (name, value) in options {
                    output.push_str(&format!("      {name} = {value}\n"));
                }
            }
        }

        output
    }
}
