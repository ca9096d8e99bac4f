//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.firmdex/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! Only settings live here — filter state is never persisted.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::state::{ROWS_PER_PAGE_CHOICES, SortKey};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FirmdexConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub rows_per_page: Option<usize>,
    pub default_sort: Option<SortKey>,
    pub search_debounce_ms: Option<u64>,
    pub min_loading_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DirectoryConfig {
    pub base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_ROWS_PER_PAGE: usize = 10;
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_MIN_LOADING_MS: u64 = 500;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub rows_per_page: usize,
    pub default_sort: SortKey,
    /// Quiet period before buffered search input is committed to the core.
    pub search_debounce_ms: u64,
    /// Floor on how long the loading indicator stays visible.
    pub min_loading_ms: u64,
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

/// Returns the path to `~/.firmdex/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".firmdex").join("config.toml"))
}

/// Load config from `~/.firmdex/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FirmdexConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FirmdexConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FirmdexConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(FirmdexConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: FirmdexConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# firmdex Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# rows_per_page = 10                 # 10, 20, or 50
# default_sort = "name_asc"          # "name_asc", "name_desc", "founded_asc", "founded_desc"
# search_debounce_ms = 300
# min_loading_ms = 500

# [directory]
# base_url = "http://localhost:5000" # Or set FIRMDEX_BASE_URL env var
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env → CLI.
///
/// `cli_base_url` and `cli_rows` are from CLI flags (None = not specified).
pub fn resolve(
    config: &FirmdexConfig,
    cli_base_url: Option<&str>,
    cli_rows: Option<usize>,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli_base_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("FIRMDEX_BASE_URL").ok())
        .or_else(|| config.directory.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Rows per page: CLI → config → default, restricted to the allowed set
    let rows_per_page = cli_rows
        .or(config.general.rows_per_page)
        .unwrap_or(DEFAULT_ROWS_PER_PAGE);
    let rows_per_page = if ROWS_PER_PAGE_CHOICES.contains(&rows_per_page) {
        rows_per_page
    } else {
        warn!(
            "rows_per_page {} not in {:?}, falling back to {}",
            rows_per_page, ROWS_PER_PAGE_CHOICES, DEFAULT_ROWS_PER_PAGE
        );
        DEFAULT_ROWS_PER_PAGE
    };

    ResolvedConfig {
        base_url,
        rows_per_page,
        default_sort: config.general.default_sort.unwrap_or_default(),
        search_debounce_ms: config
            .general
            .search_debounce_ms
            .unwrap_or(DEFAULT_SEARCH_DEBOUNCE_MS),
        min_loading_ms: config
            .general
            .min_loading_ms
            .unwrap_or(DEFAULT_MIN_LOADING_MS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = FirmdexConfig::default();
        assert!(config.general.rows_per_page.is_none());
        assert!(config.directory.base_url.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = FirmdexConfig::default();
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.rows_per_page, DEFAULT_ROWS_PER_PAGE);
        assert_eq!(resolved.default_sort, SortKey::default());
        assert_eq!(resolved.search_debounce_ms, DEFAULT_SEARCH_DEBOUNCE_MS);
        assert_eq!(resolved.min_loading_ms, DEFAULT_MIN_LOADING_MS);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = FirmdexConfig {
            general: GeneralConfig {
                rows_per_page: Some(50),
                default_sort: Some(SortKey::FoundedDesc),
                search_debounce_ms: Some(150),
                min_loading_ms: Some(0),
            },
            directory: DirectoryConfig {
                base_url: Some("http://directory.internal:8080".to_string()),
            },
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.base_url, "http://directory.internal:8080");
        assert_eq!(resolved.rows_per_page, 50);
        assert_eq!(resolved.default_sort, SortKey::FoundedDesc);
        assert_eq!(resolved.search_debounce_ms, 150);
        assert_eq!(resolved.min_loading_ms, 0);
    }

    #[test]
    fn test_resolve_cli_flags_win() {
        let config = FirmdexConfig {
            general: GeneralConfig {
                rows_per_page: Some(50),
                ..Default::default()
            },
            directory: DirectoryConfig {
                base_url: Some("http://from-config".to_string()),
            },
        };
        let resolved = resolve(&config, Some("http://from-cli"), Some(20));
        assert_eq!(resolved.base_url, "http://from-cli");
        assert_eq!(resolved.rows_per_page, 20);
    }

    #[test]
    fn test_resolve_rejects_disallowed_rows_per_page() {
        let config = FirmdexConfig::default();
        let resolved = resolve(&config, None, Some(7));
        assert_eq!(resolved.rows_per_page, DEFAULT_ROWS_PER_PAGE);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
rows_per_page = 20
default_sort = "founded_asc"
search_debounce_ms = 250

[directory]
base_url = "http://192.168.1.50:5000"
"#;
        let config: FirmdexConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.rows_per_page, Some(20));
        assert_eq!(config.general.default_sort, Some(SortKey::FoundedAsc));
        assert_eq!(config.general.search_debounce_ms, Some(250));
        assert_eq!(
            config.directory.base_url.as_deref(),
            Some("http://192.168.1.50:5000")
        );
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[general]
rows_per_page = 50
"#;
        let config: FirmdexConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.rows_per_page, Some(50));
        assert!(config.general.default_sort.is_none());
        assert!(config.directory.base_url.is_none());
    }
}
