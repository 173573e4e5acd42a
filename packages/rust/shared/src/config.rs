//! Application configuration for fixgen.
//!
//! Built-in defaults reproduce the pinned reference-page snapshot exactly;
//! an optional TOML file (passed via `--config`) overrides them, and CLI
//! flags override the file. The positional section-drop rule and the
//! version→engine table are deliberately configuration data, not code, so a
//! new document revision or format version is a data change.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FixgenError, Result};

// ---------------------------------------------------------------------------
// Config structs (matching fixgen.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Source document settings.
    #[serde(default)]
    pub source: SourceConfig,

    /// Output artifact settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Version identifier → engine type name in the downstream prelude.
    #[serde(default = "default_engines")]
    pub engines: BTreeMap<String, String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            output: OutputConfig::default(),
            engines: default_engines(),
        }
    }
}

/// `[source]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// URL of the serialization reference page, pinned to one revision.
    #[serde(default = "default_source_url")]
    pub url: String,

    /// Prefix stripped from each top-level section's id attribute.
    #[serde(default = "default_version_id_prefix")]
    pub version_id_prefix: String,

    /// Version identifiers to skip entirely (the legacy revision).
    #[serde(default = "default_excluded_versions")]
    pub excluded_versions: Vec<String>,

    /// Trailing top-level sections to drop unconditionally. The pinned
    /// revision ends with one non-version appendix section.
    #[serde(default = "default_drop_trailing_sections")]
    pub drop_trailing_sections: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_source_url(),
            version_id_prefix: default_version_id_prefix(),
            excluded_versions: default_excluded_versions(),
            drop_trailing_sections: default_drop_trailing_sections(),
        }
    }
}

fn default_source_url() -> String {
    "https://tinkerpop.apache.org/docs/3.4.1/dev/io/".into()
}
fn default_version_id_prefix() -> String {
    "graphson-".into()
}
fn default_excluded_versions() -> Vec<String> {
    vec!["1d0".into()]
}
fn default_drop_trailing_sections() -> usize {
    1
}

/// `[output]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Path of the generated artifact.
    #[serde(default = "default_output_path")]
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

fn default_output_path() -> String {
    "generated_tests.rs".into()
}

fn default_engines() -> BTreeMap<String, String> {
    BTreeMap::from([("2d0".into(), "V2".into()), ("3d0".into(), "V3".into())])
}

// ---------------------------------------------------------------------------
// Engine lookup
// ---------------------------------------------------------------------------

impl AppConfig {
    /// Resolve the engine name for a version identifier.
    ///
    /// An unmapped identifier is a fatal configuration error: the table must
    /// be kept in sync with the source document, and a silent default would
    /// register fixtures against the wrong engine.
    pub fn engine_for(&self, identifier: &str) -> Result<&str> {
        self.engines
            .get(identifier)
            .map(String::as_str)
            .ok_or_else(|| {
                FixgenError::config(format!(
                    "no engine mapped for version '{identifier}' — add it to [engines]"
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| FixgenError::io(path, e))?;

    let config = toml::from_str(&content)
        .map_err(|e| FixgenError::config(format!("failed to parse {}: {e}", path.display())))?;

    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("tinkerpop.apache.org"));
        assert!(toml_str.contains("generated_tests.rs"));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.source.version_id_prefix, "graphson-");
        assert_eq!(parsed.source.excluded_versions, vec!["1d0".to_string()]);
        assert_eq!(parsed.source.drop_trailing_sections, 1);
    }

    #[test]
    fn engine_map_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.engine_for("2d0").unwrap(), "V2");
        assert_eq!(config.engine_for("3d0").unwrap(), "V3");
    }

    #[test]
    fn engine_for_unmapped_version_is_fatal() {
        let config = AppConfig::default();
        let err = config.engine_for("4d0").unwrap_err();
        assert!(err.to_string().contains("no engine mapped for version '4d0'"));
    }

    #[test]
    fn partial_config_overrides_defaults() {
        let toml_str = r#"
[output]
path = "tests/generated.rs"

[engines]
"2d0" = "V2"
"3d0" = "V3"
"4d0" = "V4"
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.output.path, "tests/generated.rs");
        assert_eq!(config.engine_for("4d0").unwrap(), "V4");
        // Untouched sections keep their defaults
        assert_eq!(config.source.version_id_prefix, "graphson-");
    }
}
