//! # Storefront Configuration
//!
//! Where products come from and how prices are displayed.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STOREFRONT_SOURCE=http                                             │
//! │     STOREFRONT_API_URL=https://dummyjson.com/products                  │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/storefront/storefront.toml (Linux)                       │
//! │     ~/Library/Application Support/com.storefront.demo/... (macOS)      │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     embedded fixture, "R" currency, 3s notifications                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [source]
//! kind = "http"          # http | fixture
//! api_url = "https://dummyjson.com/products"
//! timeout_secs = 10
//!
//! [display]
//! currency_symbol = "R"
//! notification_ttl_ms = 3000
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::error::{CatalogError, CatalogResult};

// =============================================================================
// Source Kind
// =============================================================================

/// Which product source to fetch from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Remote product API over HTTP.
    Http,

    /// Static JSON fixture, embedded or read from `fixture_path`.
    #[default]
    Fixture,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Http => write!(f, "http"),
            SourceKind::Fixture => write!(f, "fixture"),
        }
    }
}

impl std::str::FromStr for SourceKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "http" | "api" | "remote" => Ok(SourceKind::Http),
            "fixture" | "static" | "local" => Ok(SourceKind::Fixture),
            other => Err(CatalogError::InvalidConfig(format!(
                "Unknown product source: '{}'. Valid options: http, fixture",
                other
            ))),
        }
    }
}

// =============================================================================
// Source Settings
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSettings {
    #[serde(default)]
    pub kind: SourceKind,

    /// Product list endpoint (used when `kind = "http"`).
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Fixture file; the embedded fixture is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixture_path: Option<PathBuf>,

    /// Request timeout (seconds).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    "https://dummyjson.com/products".to_string()
}

fn default_timeout() -> u64 {
    10
}

impl Default for SourceSettings {
    fn default() -> Self {
        SourceSettings {
            kind: SourceKind::default(),
            api_url: default_api_url(),
            fixture_path: None,
            timeout_secs: default_timeout(),
        }
    }
}

// =============================================================================
// Display Settings
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Prefix for formatted prices.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// How long a notification stays visible (milliseconds).
    #[serde(default = "default_notification_ttl")]
    pub notification_ttl_ms: u64,
}

fn default_currency_symbol() -> String {
    storefront_core::DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_notification_ttl() -> u64 {
    3000
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            currency_symbol: default_currency_symbol(),
            notification_ttl_ms: default_notification_ttl(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub source: SourceSettings,

    #[serde(default)]
    pub display: DisplaySettings,
}

impl StorefrontConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (storefront.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> CatalogResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                let contents = std::fs::read_to_string(&path)
                    .map_err(|e| CatalogError::ConfigLoadFailed(e.to_string()))?;
                config = Self::from_toml(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load storefront config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML document. Missing sections fall back to defaults.
    pub fn from_toml(contents: &str) -> CatalogResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> CatalogResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| CatalogError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| CatalogError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| CatalogError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Storefront config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CatalogResult<()> {
        if self.source.kind == SourceKind::Http {
            let url = url::Url::parse(&self.source.api_url)?;
            if url.scheme() != "http" && url.scheme() != "https" {
                return Err(CatalogError::InvalidUrl(format!(
                    "Product API URL must use http:// or https://, got: {}",
                    self.source.api_url
                )));
            }
        }

        if self.source.timeout_secs == 0 {
            return Err(CatalogError::InvalidConfig(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Applies `STOREFRONT_*` overrides read through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(kind) = lookup("STOREFRONT_SOURCE") {
            match kind.parse() {
                Ok(parsed) => {
                    debug!(source = %kind, "Overriding product source from environment");
                    self.source.kind = parsed;
                }
                Err(e) => warn!(error = %e, "Ignoring STOREFRONT_SOURCE"),
            }
        }

        if let Some(url) = lookup("STOREFRONT_API_URL") {
            debug!(url = %url, "Overriding product API URL from environment");
            self.source.api_url = url;
        }

        if let Some(path) = lookup("STOREFRONT_FIXTURE_PATH") {
            self.source.fixture_path = Some(PathBuf::from(path));
        }

        if let Some(timeout) = lookup("STOREFRONT_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse::<u64>() {
                self.source.timeout_secs = secs;
            }
        }

        if let Some(symbol) = lookup("STOREFRONT_CURRENCY") {
            self.display.currency_symbol = symbol;
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "storefront", "demo")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }
}
