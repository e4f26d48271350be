//! Settings struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. Environment variables (`DOCCONF_LANGUAGE`, `DOCCONF_THEME`, ...)
//! 2. `docconf.toml` in the project root
//! 3. `~/.config/docconf/config.toml` (global display defaults)
//! 4. Built-in defaults
//!
//! The resolved [`ProjectSettings`] is an owned, immutable value: it is
//! constructed once at startup and passed explicitly to whatever consumes
//! it. No ambient global exists.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants;
use crate::env::Env;

/// Options of a single extension: option name to opaque value.
///
/// Values are passed through untouched; their semantics belong to the
/// renderer extension they configure, not to this loader.
pub type ExtensionOptions = IndexMap<String, toml::Value>;

/// Errors during settings loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read settings file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {origin}: {source}")]
    ParseFile {
        origin: String,
        source: toml::de::Error,
    },

    #[error("missing required field `{field}` in {origin}")]
    MissingField { field: &'static str, origin: String },

    #[error("required field `{field}` in {origin} must not be empty")]
    EmptyField { field: &'static str, origin: String },
}

/// Fully resolved project settings handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectSettings {
    /// Display name of the documented project.
    pub project: String,
    /// Display name of the author.
    pub author: String,
    /// Whether the renderer should emit a copyright line.
    pub show_copyright: bool,
    /// Output language for generated text (locale code, untransformed).
    pub language: String,
    /// Glob patterns excluded from processing, in declaration order.
    pub exclude_patterns: Vec<String>,
    /// Name of the visual theme to apply.
    pub theme: String,
    /// Extension identifiers, in activation order.
    pub extensions: Vec<String>,
    /// Per-extension options, keyed by extension identifier.
    pub extension_options: IndexMap<String, ExtensionOptions>,
}

/// The on-disk declaration shape.
///
/// Every field is optional here so that resolution can layer global
/// defaults underneath and report precise missing-field errors for the
/// required ones, instead of whatever serde would say.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawSettings {
    project: Option<String>,
    author: Option<String>,
    show_copyright: Option<bool>,
    language: Option<String>,
    exclude_patterns: Option<Vec<String>>,
    theme: Option<String>,
    extensions: Option<Vec<String>>,
    extension_options: IndexMap<String, ExtensionOptions>,
}

/// Global display defaults from `~/.config/docconf/config.toml`.
///
/// Deliberately narrower than the project declaration: a global file can
/// set display preferences but never `project` or `author`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GlobalDefaults {
    pub show_copyright: Option<bool>,
    pub language: Option<String>,
    pub theme: Option<String>,
}

impl GlobalDefaults {
    /// Load global defaults, or an empty set if no global config exists.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::global_config_path() {
            Some(path) if path.exists() => {
                let content = read_file(&path)?;
                toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
                    origin: path.display().to_string(),
                    source: e,
                })
            }
            _ => Ok(Self::default()),
        }
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }
}

impl ProjectSettings {
    /// Parse a settings declaration from a TOML string.
    ///
    /// This is a pure read: defaults are applied for omitted optional
    /// fields, required fields are checked, and nothing else is
    /// validated. `origin` names the source in error messages.
    pub fn from_toml_str(toml_str: &str, origin: &str) -> Result<Self, ConfigError> {
        let raw: RawSettings = toml::from_str(toml_str).map_err(|e| ConfigError::ParseFile {
            origin: origin.to_string(),
            source: e,
        })?;
        Self::resolve(raw, &GlobalDefaults::default(), origin)
    }

    /// Load a settings declaration from a specific file, without global
    /// defaults or environment overrides.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = read_file(path)?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    /// Load the project's settings with full layering.
    ///
    /// Reads global display defaults, then `docconf.toml` under
    /// `project_root`, then applies environment variable overrides.
    pub fn load(project_root: &Path, env: &Env) -> Result<Self, ConfigError> {
        let globals = GlobalDefaults::load()?;
        Self::load_with_globals(project_root, &globals, env)
    }

    /// Load with explicit global defaults (separated out for tests).
    pub fn load_with_globals(
        project_root: &Path,
        globals: &GlobalDefaults,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let path = project_root.join(constants::CONFIG_FILENAME);
        let content = read_file(&path)?;
        let origin = path.display().to_string();
        let raw: RawSettings = toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            origin: origin.clone(),
            source: e,
        })?;

        let mut settings = Self::resolve(raw, globals, &origin)?;
        settings.apply_env_vars(env);
        Ok(settings)
    }

    /// Options declared for the given extension, if any.
    pub fn options_for(&self, extension: &str) -> Option<&ExtensionOptions> {
        self.extension_options.get(extension)
    }

    /// Resolve a raw declaration against global defaults and built-ins.
    fn resolve(
        raw: RawSettings,
        globals: &GlobalDefaults,
        origin: &str,
    ) -> Result<Self, ConfigError> {
        let project = required(raw.project, "project", origin)?;
        let author = required(raw.author, "author", origin)?;

        Ok(Self {
            project,
            author,
            show_copyright: raw
                .show_copyright
                .or(globals.show_copyright)
                .unwrap_or(constants::DEFAULT_SHOW_COPYRIGHT),
            language: raw
                .language
                .or_else(|| globals.language.clone())
                .unwrap_or_else(|| constants::DEFAULT_LANGUAGE.to_string()),
            exclude_patterns: raw.exclude_patterns.unwrap_or_default(),
            theme: raw
                .theme
                .or_else(|| globals.theme.clone())
                .unwrap_or_else(|| constants::DEFAULT_THEME.to_string()),
            extensions: raw.extensions.unwrap_or_default(),
            extension_options: raw.extension_options,
        })
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Ok(val) = env.var(constants::ENV_LANGUAGE) {
            self.language = val;
        }
        if let Ok(val) = env.var(constants::ENV_THEME) {
            self.theme = val;
        }
        if let Ok(val) = env.var(constants::ENV_SHOW_COPYRIGHT) {
            match val.to_lowercase().as_str() {
                "false" | "0" | "no" | "off" => self.show_copyright = false,
                "true" | "1" | "yes" | "on" => self.show_copyright = true,
                _ => eprintln!(
                    "Warning: ignoring invalid {} value: {val}",
                    constants::ENV_SHOW_COPYRIGHT
                ),
            }
        }
    }
}

/// Check a required string field: present and non-blank.
fn required(
    value: Option<String>,
    field: &'static str,
    origin: &str,
) -> Result<String, ConfigError> {
    match value {
        None => Err(ConfigError::MissingField {
            field,
            origin: origin.to_string(),
        }),
        Some(s) if s.trim().is_empty() => Err(ConfigError::EmptyField {
            field,
            origin: origin.to_string(),
        }),
        Some(s) => Ok(s),
    }
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })
}
