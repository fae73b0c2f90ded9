//! Configuration for Resolva.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::ResolvaResult;

/// Main configuration for Resolva.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Cache backend settings.
    #[serde(default)]
    pub cache: CacheConfig,

    /// Freshness tracking settings.
    #[serde(default)]
    pub freshness: FreshnessConfig,
}

/// Memory cache backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum cache capacity (number of entries).
    #[serde(default = "default_cache_capacity")]
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: default_cache_capacity(),
        }
    }
}

fn default_cache_capacity() -> usize {
    1000
}

/// Freshness tracking settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreshnessConfig {
    /// Freshness mode applied on cache hits.
    #[serde(default)]
    pub mode: FreshnessMode,
}

impl Default for FreshnessConfig {
    fn default() -> Self {
        Self {
            mode: FreshnessMode::default(),
        }
    }
}

/// Freshness mode applied on cache hits.
///
/// `TrackFreshness` is a development-time convenience: it re-validates
/// every hit against the mtime of the file that defines the name, which
/// costs one stat per lookup. Production deployments should use
/// `TrustCache`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FreshnessMode {
    /// Cached entries are trusted unconditionally.
    #[default]
    TrustCache,
    /// Cached entries are re-validated against the source file mtime.
    TrackFreshness,
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> ResolvaResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ResolvaResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Creates default configuration.
    pub fn default_config() -> Self {
        Self {
            cache: CacheConfig::default(),
            freshness: FreshnessConfig::default(),
        }
    }

    /// Tries to load configuration from current directory or uses default.
    pub fn load_or_default() -> Self {
        Self::load("resolva.toml").unwrap_or_else(|_| Self::default_config())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}
