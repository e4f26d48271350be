//! Clap argument types for the docconf binary.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use docconf::config::ProjectSettings;
use docconf::output::{SettingsRenderer, json::JsonRenderer, terminal::TerminalRenderer};

/// Settings loader for documentation projects.
#[derive(Parser, Debug)]
#[command(
    name = "docconf",
    version = docconf::constants::VERSION,
    about = "Settings loader for documentation projects",
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Load and validate the project's settings declaration.
    Check(CheckArgs),

    /// Print the fully resolved settings.
    Show(ShowArgs),

    /// Write a starter docconf.toml.
    Init(InitArgs),

    /// Print the JSON Schema of the declaration file.
    Schema,

    /// Print version information.
    Version,
}

/// Arguments for the `check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the project root (default: current directory).
    #[arg(long, default_value = ".")]
    pub path: PathBuf,
}

/// Arguments for the `show` subcommand.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Path to the project root (default: current directory).
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,
}

/// Arguments for the `init` subcommand.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Path to the project root (default: current directory).
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing docconf.toml.
    #[arg(long, default_value_t = false)]
    pub force: bool,
}

/// Supported output formats for `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Coloured key-value listing.
    Terminal,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Render settings with the renderer matching this format.
    pub fn render(self, settings: &ProjectSettings) -> String {
        match self {
            OutputFormat::Terminal => TerminalRenderer.render(settings),
            OutputFormat::Json => JsonRenderer.render(settings),
        }
    }
}
