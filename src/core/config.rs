//! # Configuration
//!
//! Centralizes settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `<user config dir>/.opsdeckrc.toml`. If missing on
//! first run, a commented-out default is generated so users can discover
//! the options. Environment overrides use the `OPSDECK_` prefix with
//! dots mapped to underscores: `log.file` becomes `OPSDECK_LOG_FILE`.
//!
//! The screens never read configuration; resolved settings feed the
//! process entry point and dispatcher selection only.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OpsdeckConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_screen: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LogConfig {
    pub file: Option<String>,
    pub level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SCREEN: &str = "login";
pub const DEFAULT_LOG_FILE: &str = "opsdeck.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";

const CONFIG_FILE_NAME: &str = ".opsdeckrc.toml";

const ENV_PREFIX: &str = "OPSDECK";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub screen: String,
    pub log_file: String,
    pub log_level: String,
}

impl ResolvedConfig {
    /// Parsed log level; unknown names fall back to the default.
    pub fn level_filter(&self) -> log::LevelFilter {
        match self.log_level.as_str() {
            "off" => log::LevelFilter::Off,
            "error" => log::LevelFilter::Error,
            "warn" => log::LevelFilter::Warn,
            "info" => log::LevelFilter::Info,
            "debug" => log::LevelFilter::Debug,
            "trace" => log::LevelFilter::Trace,
            other => {
                warn!("unknown log level {other:?}, using {DEFAULT_LOG_LEVEL}");
                log::LevelFilter::Info
            }
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `.opsdeckrc.toml` in the user config directory.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// Load config from `.opsdeckrc.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `OpsdeckConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<OpsdeckConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("could not determine a config directory, using defaults");
            return Ok(OpsdeckConfig::default());
        }
    };

    if !path.exists() {
        info!("no config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(OpsdeckConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: OpsdeckConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("loaded config from {}", path.display());
    debug!("config: {config:?}");
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# opsdeck configuration
# All settings are optional; defaults fill in anything not specified.
# Override hierarchy: defaults, this file, OPSDECK_* env vars, CLI flags.

# [general]
# default_screen = "login"       # "login" or "overview"

# [log]
# file = "opsdeck.log"
# level = "info"                 # "off", "error", "warn", "info", "debug", "trace"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("failed to create config directory: {e}");
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("failed to write default config: {e}");
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Maps a dotted config key to its environment override name:
/// `log.file` → `OPSDECK_LOG_FILE`.
pub fn env_key(key: &str) -> String {
    format!("{ENV_PREFIX}_{}", key.replace('.', "_").to_uppercase())
}

fn env_override(key: &str) -> Option<String> {
    std::env::var(env_key(key)).ok()
}

/// Resolve the final config by collapsing: defaults → config file →
/// env vars → CLI.
///
/// `cli_screen` is the `--screen` flag (None = not specified).
pub fn resolve(config: &OpsdeckConfig, cli_screen: Option<&str>) -> ResolvedConfig {
    let screen = cli_screen
        .map(str::to_string)
        .or_else(|| env_override("general.default_screen"))
        .or_else(|| config.general.default_screen.clone())
        .unwrap_or_else(|| DEFAULT_SCREEN.to_string());

    let log_file = env_override("log.file")
        .or_else(|| config.log.file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    let log_level = env_override("log.level")
        .or_else(|| config.log.level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    ResolvedConfig {
        screen,
        log_file,
        log_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_empty() {
        let config = OpsdeckConfig::default();
        assert!(config.general.default_screen.is_none());
        assert!(config.log.file.is_none());
        assert!(config.log.level.is_none());
    }

    #[test]
    fn resolve_uses_defaults_when_empty() {
        let resolved = resolve(&OpsdeckConfig::default(), None);
        assert_eq!(resolved.screen, DEFAULT_SCREEN);
        assert_eq!(resolved.log_file, DEFAULT_LOG_FILE);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn resolve_config_values_override_defaults() {
        let config = OpsdeckConfig {
            general: GeneralConfig {
                default_screen: Some("overview".to_string()),
            },
            log: LogConfig {
                file: Some("/tmp/deck.log".to_string()),
                level: Some("debug".to_string()),
            },
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.screen, "overview");
        assert_eq!(resolved.log_file, "/tmp/deck.log");
        assert_eq!(resolved.log_level, "debug");
    }

    #[test]
    fn resolve_cli_screen_wins() {
        let config = OpsdeckConfig {
            general: GeneralConfig {
                default_screen: Some("overview".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some("login"));
        assert_eq!(resolved.screen, "login");
    }

    #[test]
    fn sparse_toml_parses() {
        // Only override one thing; everything else stays default.
        let toml_str = r#"
[log]
level = "trace"
"#;
        let config: OpsdeckConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log.level.as_deref(), Some("trace"));
        assert!(config.log.file.is_none());
        assert!(config.general.default_screen.is_none());
    }

    #[test]
    fn full_toml_parses() {
        let toml_str = r#"
[general]
default_screen = "overview"

[log]
file = "deck.log"
level = "warn"
"#;
        let config: OpsdeckConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_screen.as_deref(), Some("overview"));
        assert_eq!(config.log.file.as_deref(), Some("deck.log"));
        assert_eq!(config.log.level.as_deref(), Some("warn"));
    }

    #[test]
    fn generated_default_round_trips() {
        // The commented-out template must stay parseable when uncommented
        // keys are absent.
        let config: OpsdeckConfig = toml::from_str("").unwrap();
        assert!(config.general.default_screen.is_none());
    }

    #[test]
    fn env_key_maps_dots_to_underscores() {
        assert_eq!(env_key("log.file"), "OPSDECK_LOG_FILE");
        assert_eq!(env_key("general.default_screen"), "OPSDECK_GENERAL_DEFAULT_SCREEN");
    }

    #[test]
    fn level_filter_parses_known_names() {
        let mut resolved = resolve(&OpsdeckConfig::default(), None);
        resolved.log_level = "trace".to_string();
        assert_eq!(resolved.level_filter(), log::LevelFilter::Trace);
        resolved.log_level = "off".to_string();
        assert_eq!(resolved.level_filter(), log::LevelFilter::Off);
    }

    #[test]
    fn level_filter_falls_back_on_unknown_names() {
        let mut resolved = resolve(&OpsdeckConfig::default(), None);
        resolved.log_level = "shouting".to_string();
        assert_eq!(resolved.level_filter(), log::LevelFilter::Info);
    }
}
