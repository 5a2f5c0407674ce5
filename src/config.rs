//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/pov/pov.toml`
//! 3. Environment variables: `POV_*` prefix

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::ValueEnum;
use config::{Config, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("environment: {0}")]
    Environment(#[from] config::ConfigError),

    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("no home directory, global config location unknown")]
    NoConfigDir,

    #[error("serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// How trees are printed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Compact parenthesized notation, e.g. `(a b (c d))`
    #[default]
    Sexp,
    /// Box-drawing tree
    Tree,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Sexp => write!(f, "sexp"),
            OutputFormat::Tree => write!(f, "tree"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sexp" => Ok(OutputFormat::Sexp),
            "tree" => Ok(OutputFormat::Tree),
            _ => Err(ConfigError::InvalidValue {
                key: "format".into(),
                value: s.into(),
            }),
        }
    }
}

/// Effective settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Output format for trees
    pub format: OutputFormat,
    /// Separator placed between labels when printing a path
    pub path_separator: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Sexp,
            path_separator: " -> ".into(),
        }
    }
}

/// Raw settings for intermediate parsing, `None` means "not specified".
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub format: Option<OutputFormat>,
    pub path_separator: Option<String>,
}

/// Get the XDG config directory for pov.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "pov").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("pov.toml"))
}

fn load_raw_settings(path: &Path) -> Result<RawSettings, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            format: overlay.format.unwrap_or(self.format),
            path_separator: overlay
                .path_separator
                .clone()
                .unwrap_or_else(|| self.path_separator.clone()),
        }
    }

    /// Load settings from defaults, the global config file and `POV_*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Like [`Settings::load`] with an explicit config file location.
    ///
    /// A missing file is not an error; a malformed one is.
    #[instrument(level = "debug")]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut current = Self::default();

        if let Some(path) = config_path {
            if path.exists() {
                debug!("loading config file");
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        Self::apply_env_overrides(current, Environment::with_prefix("POV"))
    }

    /// Apply environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self, env: Environment) -> Result<Self, ConfigError> {
        let config = Config::builder().add_source(env).build()?;

        if let Ok(val) = config.get_string("format") {
            settings.format = val.parse()?;
        }
        if let Ok(val) = config.get_string("path_separator") {
            settings.path_separator = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# pov configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/pov/pov.toml
#   Env:    POV_* environment variables (e.g. POV_FORMAT=tree)

# Tree output: "sexp" for (a b (c d)), "tree" for box drawing
# format = "sexp"

# Separator between labels of a path
# path_separator = " -> "
"#
        .to_string()
    }
}
