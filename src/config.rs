//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Settings file (TOML), when one is given
//! 3. Environment variables: `RSHIER_*` prefix

use std::path::Path;

use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::errors::{HierarchyError, HierarchyResult};
use crate::util::path::DEFAULT_DELIMITER;

const ENV_PREFIX: &str = "RSHIER";

/// Settings shared by the tree builder, the path join and the hierarchy walker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Separator between path components (default: `.`)
    pub delimiter: char,
    /// Deepest level a hierarchy walk may reach before failing (default: unbounded)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            max_depth: None,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    delimiter: Option<char>,
    max_depth: Option<usize>,
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> HierarchyResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| HierarchyError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| HierarchyError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `settings_file` - Optional TOML file; a missing file is an error
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. `settings_file`
    /// 3. Environment variables: `RSHIER_DELIMITER`, `RSHIER_MAX_DEPTH`
    #[instrument(level = "debug")]
    pub fn load(settings_file: Option<&Path>) -> HierarchyResult<Self> {
        let mut current = Self::default();

        if let Some(path) = settings_file {
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        current = Self::apply_env_overrides(current, ENV_PREFIX)?;
        current.validate()?;

        debug!(?current, "Settings loaded");
        Ok(current)
    }

    /// Parse settings from a TOML document on top of the defaults.
    pub fn from_toml_str(content: &str) -> HierarchyResult<Self> {
        let raw: RawSettings = toml::from_str(content).map_err(|e| HierarchyError::Config {
            message: format!("parse settings: {e}"),
        })?;
        let settings = Self::default().merge_with(&raw);
        settings.validate()?;
        Ok(settings)
    }

    /// Scalar options: overlay wins if Some, otherwise keep base.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            delimiter: overlay.delimiter.unwrap_or(self.delimiter),
            max_depth: overlay.max_depth.or(self.max_depth),
        }
    }

    /// Apply `<prefix>_*` environment variables as explicit overrides.
    ///
    /// `RSHIER_MAX_DEPTH` maps to `max_depth`; `__` separates nested keys.
    fn apply_env_overrides(mut settings: Self, prefix: &str) -> HierarchyResult<Self> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        match config.get_string("delimiter") {
            Ok(val) => settings.delimiter = parse_delimiter(&val)?,
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }
        match config.get_int("max_depth") {
            Ok(val) => {
                let depth = usize::try_from(val).map_err(|_| {
                    HierarchyError::InvalidArgument(format!("max_depth must not be negative: {val}"))
                })?;
                settings.max_depth = Some(depth);
            }
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }

        Ok(settings)
    }

    /// Reject values no operation can work with.
    pub fn validate(&self) -> HierarchyResult<()> {
        if self.delimiter.is_whitespace() || self.delimiter.is_control() {
            return Err(HierarchyError::InvalidArgument(format!(
                "delimiter must be a visible character, got {:?}",
                self.delimiter
            )));
        }
        if self.max_depth == Some(0) {
            return Err(HierarchyError::InvalidArgument(
                "max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> HierarchyResult<String> {
        toml::to_string_pretty(self).map_err(|e| HierarchyError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# rshier configuration
#
# Environment variables override file values:
#   RSHIER_DELIMITER, RSHIER_MAX_DEPTH

# Separator between path components
# delimiter = "."

# Deepest ancestor/descendant level a walk may reach (unbounded when unset)
# max_depth = 64
"#
        .to_string()
    }
}

fn parse_delimiter(val: &str) -> HierarchyResult<char> {
    let mut chars = val.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(HierarchyError::InvalidArgument(format!(
            "delimiter must be a single character, got {val:?}"
        ))),
    }
}

fn config_err(e: ConfigError) -> HierarchyError {
    HierarchyError::Config {
        message: e.to_string(),
    }
}
