//! TOML-based configuration for the K-House 71 site server
//!
//! This module provides declarative configuration for the HTTP server, the
//! AI bridge, the site features and visitor sessions via a TOML file
//! (`khouse.toml`).
//!
//! # Hot Reloading
//!
//! Configuration changes are automatically detected and applied at runtime.
//! Use `KHouseConfigManager` for thread-safe access to the current configuration.
//! Only the `[site]` section is read per request; `[server]`, `[ai]` and
//! `[session]` are applied at startup.

use arc_swap::ArcSwap;
use khouse_content::LanguageCode;
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Root configuration structure loaded from khouse.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KHouseConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// External text-generation endpoint used by the room matcher and chatbot
    #[serde(default)]
    pub ai: AiConfig,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub session: SessionConfig,
}

// ============= Server Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,
}

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

// ============= AI Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// When false every question gets the fixed failure message
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_api_base")]
    pub api_base: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Request timeout; unset means no timeout
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_true() -> bool {
    true
}

fn default_api_base() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash-preview-09-2025".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_base: default_api_base(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: None,
        }
    }
}

// ============= Site Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Language of a visitor who has not picked one
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Delay before the promotion toast slides in
    #[serde(default = "default_promo_delay_ms")]
    pub promo_delay_ms: u64,

    /// Simulated submission time of the reservation form
    #[serde(default = "default_reservation_delay_ms")]
    pub reservation_delay_ms: u64,

    #[serde(default)]
    pub features: FeatureConfig,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_promo_delay_ms() -> u64 {
    2000
}

fn default_reservation_delay_ms() -> u64 {
    1500
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            promo_delay_ms: default_promo_delay_ms(),
            reservation_delay_ms: default_reservation_delay_ms(),
            features: FeatureConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parsed default language. Validation guarantees the code is known.
    pub fn default_language(&self) -> LanguageCode {
        LanguageCode::parse_or_fallback(&self.default_language)
    }
}

/// Optional widgets of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureConfig {
    #[serde(default = "default_true")]
    pub room_matcher: bool,

    #[serde(default = "default_true")]
    pub chatbot: bool,

    #[serde(default = "default_true")]
    pub reservation: bool,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            room_matcher: true,
            chatbot: true,
            reservation: true,
        }
    }
}

// ============= Session Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Session lifetime after the last request
    #[serde(default = "default_idle_minutes")]
    pub idle_minutes: i64,

    /// Mark the cookie `Secure` (HTTPS only)
    #[serde(default)]
    pub secure: bool,

    /// Visitors kept in memory; the least recently seen is dropped first
    #[serde(default = "default_max_visitors")]
    pub max_visitors: usize,
}

fn default_cookie_name() -> String {
    "khouse_session".to_string()
}

fn default_idle_minutes() -> i64 {
    60
}

fn default_max_visitors() -> usize {
    10_000
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            idle_minutes: default_idle_minutes(),
            secure: false,
            max_visitors: default_max_visitors(),
        }
    }
}

impl SessionConfig {
    /// Time without a request after which a visitor is forgotten
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_minutes.max(1).unsigned_abs() * 60)
    }
}

// ============= Configuration Loading & Validation =============

/// Configuration warnings that don't prevent operation but may indicate issues
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub kind: ConfigWarningKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarningKind {
    MissingApiKey,
    AiFeatureWithoutAi,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Errors that can occur during configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unknown language '{0}' in site.default_language")]
    UnknownLanguage(String),

    #[error("Watch error: {0}")]
    WatchError(#[from] notify::Error),
}

impl KHouseConfig {
    /// Load and validate configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config: KHouseConfig = toml::from_str(&content)?;

        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration for internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.default_language.parse::<LanguageCode>().is_err() {
            return Err(ConfigError::UnknownLanguage(
                self.site.default_language.clone(),
            ));
        }

        if self.server.host.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "server.host must not be empty".to_string(),
            ));
        }

        if !self.ai.api_base.starts_with("http://") && !self.ai.api_base.starts_with("https://") {
            return Err(ConfigError::ValidationError(format!(
                "ai.api_base must be an http(s) URL, got '{}'",
                self.ai.api_base
            )));
        }

        if self.ai.model.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "ai.model must not be empty".to_string(),
            ));
        }

        if self.ai.timeout_secs == Some(0) {
            return Err(ConfigError::ValidationError(
                "ai.timeout_secs must be greater than 0 (omit it for no timeout)".to_string(),
            ));
        }

        if self.session.cookie_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "session.cookie_name must not be empty".to_string(),
            ));
        }

        if self.session.max_visitors == 0 {
            return Err(ConfigError::ValidationError(
                "session.max_visitors must be greater than 0".to_string(),
            ));
        }

        if self.session.idle_minutes <= 0 {
            return Err(ConfigError::ValidationError(format!(
                "session.idle_minutes must be positive, got {}",
                self.session.idle_minutes
            )));
        }

        Ok(())
    }

    /// Validate configuration and collect non-fatal warnings
    ///
    /// Returns Ok with warnings, or Err if validation fails
    pub fn validate_with_warnings(&self) -> Result<Vec<ConfigWarning>, ConfigError> {
        self.validate()?;

        let mut warnings = Vec::new();
        let features = self.site.features;
        let ai_features = features.room_matcher || features.chatbot;

        if !self.ai.enabled && ai_features {
            warnings.push(ConfigWarning {
                kind: ConfigWarningKind::AiFeatureWithoutAi,
                message: "Room matcher or chatbot is enabled but ai.enabled = false; \
                          every question will get the failure message"
                    .to_string(),
            });
        }

        if self.ai.enabled && ai_features && self.api_key().is_none() {
            warnings.push(ConfigWarning {
                kind: ConfigWarningKind::MissingApiKey,
                message: format!(
                    "Environment variable '{}' is not set; the AI bridge runs offline",
                    self.ai.api_key_env
                ),
            });
        }

        Ok(warnings)
    }

    /// Get a resolved value from an env var reference
    pub fn resolve_env(&self, env_name: &str) -> Option<String> {
        std::env::var(env_name).ok()
    }

    /// API key of the AI endpoint, if set and non-empty
    pub fn api_key(&self) -> Option<String> {
        self.resolve_env(&self.ai.api_key_env)
            .filter(|key| !key.trim().is_empty())
    }

    /// Socket address string the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

// ============= Hot Reloading Configuration Manager =============

/// Thread-safe configuration manager with hot reloading support
pub struct KHouseConfigManager {
    config: Arc<ArcSwap<KHouseConfig>>,
    config_path: PathBuf,
    watcher: RwLock<Option<RecommendedWatcher>>,
    reload_tx: Option<mpsc::UnboundedSender<()>>,
}

impl KHouseConfigManager {
    /// Create a new configuration manager and load the initial config
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        // Absolute path for reliable file watching
        let path = path.as_ref();
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .map_err(ConfigError::ReadError)?
                .join(path)
        };

        let config = KHouseConfig::load(&path)?;

        Ok(Self {
            config: Arc::new(ArcSwap::from_pointee(config)),
            config_path: path,
            watcher: RwLock::new(None),
            reload_tx: None,
        })
    }

    /// Get the current configuration (lockless read)
    pub fn config(&self) -> Arc<KHouseConfig> {
        self.config.load_full()
    }

    /// Path of the watched file
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Manually reload the configuration from disk
    pub fn reload(&self) -> Result<(), ConfigError> {
        info!("Reloading configuration from {:?}", self.config_path);

        let new_config = KHouseConfig::load(&self.config_path)?;
        self.config.store(Arc::new(new_config));

        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Start watching for configuration file changes
    pub fn start_watching(&mut self) -> Result<(), ConfigError> {
        let (tx, mut rx) = mpsc::unbounded_channel::<()>();
        self.reload_tx = Some(tx.clone());

        let config_path = self.config_path.clone();
        let config_arc = Arc::clone(&self.config);

        let watched_file = config_path.clone();
        let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
            match res {
                Ok(event) => {
                    let touches_config = event.paths.iter().any(|p| p == &watched_file);
                    if touches_config && (event.kind.is_modify() || event.kind.is_create()) {
                        // Debounced in the receiver
                        let _ = tx.send(());
                    }
                }
                Err(e) => {
                    error!("Config watcher error: {:?}", e);
                }
            }
        })?;

        // Watch the parent directory so editors that replace the file are seen
        if let Some(parent) = self.config_path.parent() {
            watcher.watch(parent, RecursiveMode::NonRecursive)?;
        }

        *self.watcher.write() = Some(watcher);

        tokio::spawn(async move {
            let mut last_reload: Option<std::time::Instant> = None;
            let debounce_duration = Duration::from_millis(500);

            while rx.recv().await.is_some() {
                if last_reload.is_some_and(|at| at.elapsed() < debounce_duration) {
                    continue;
                }

                // Let the write complete
                tokio::time::sleep(Duration::from_millis(100)).await;

                match KHouseConfig::load(&config_path) {
                    Ok(new_config) => {
                        config_arc.store(Arc::new(new_config));
                        info!("Configuration hot-reloaded successfully");
                        last_reload = Some(std::time::Instant::now());
                    }
                    Err(e) => {
                        warn!(
                            "Failed to hot-reload config: {}. Keeping previous config.",
                            e
                        );
                    }
                }
            }
        });

        info!("Configuration hot-reload watcher started");
        Ok(())
    }

    /// Stop watching for configuration changes
    pub fn stop_watching(&self) {
        *self.watcher.write() = None;
        info!("Configuration hot-reload watcher stopped");
    }
}

impl Clone for KHouseConfigManager {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            config_path: self.config_path.clone(),
            watcher: RwLock::new(None), // Watcher is not cloned
            reload_tx: self.reload_tx.clone(),
        }
    }
}

impl KHouseConfigManager {
    /// Create a config manager directly from a config (useful for testing)
    /// This won't have file watching capabilities.
    pub fn from_config(config: KHouseConfig) -> Self {
        Self {
            config: Arc::new(ArcSwap::from_pointee(config)),
            config_path: PathBuf::from("test-config.toml"),
            watcher: RwLock::new(None),
            reload_tx: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> String {
        r#"
[server]
host = "0.0.0.0"
port = 8080
log_level = "debug"
log_format = "json"

[ai]
enabled = true
model = "gemini-test"
api_key_env = "KHOUSE_TEST_UNSET_KEY"
timeout_secs = 20

[site]
default_language = "th"
promo_delay_ms = 500

[site.features]
chatbot = false

[session]
cookie_name = "kh"
idle_minutes = 15
"#
        .to_string()
    }

    #[test]
    fn test_parse_config() {
        let config: KHouseConfig =
            toml::from_str(&create_test_config()).expect("Failed to parse config");

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.log_format, LogFormat::Json);
        assert_eq!(config.ai.model, "gemini-test");
        assert_eq!(config.ai.timeout_secs, Some(20));
        assert_eq!(config.site.default_language(), LanguageCode::Th);
        assert_eq!(config.site.promo_delay_ms, 500);
        assert!(!config.site.features.chatbot);
        assert!(config.site.features.room_matcher);
        assert_eq!(config.session.cookie_name, "kh");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults() {
        let config: KHouseConfig = toml::from_str("").unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.log_level, "info");
        assert_eq!(config.server.log_format, LogFormat::Plain);

        assert!(config.ai.enabled);
        assert_eq!(
            config.ai.api_base,
            "https://generativelanguage.googleapis.com/v1beta"
        );
        assert_eq!(config.ai.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.ai.timeout_secs, None);

        assert_eq!(config.site.default_language, "en");
        assert_eq!(config.site.promo_delay_ms, 2000);
        assert_eq!(config.site.reservation_delay_ms, 1500);
        assert_eq!(config.site.features, FeatureConfig::default());

        assert_eq!(config.session.cookie_name, "khouse_session");
        assert_eq!(config.session.idle_minutes, 60);
        assert!(!config.session.secure);
        assert_eq!(config.session.max_visitors, 10_000);
        assert_eq!(config.session.idle_timeout(), Duration::from_secs(3600));
    }

    #[test]
    fn test_validation_unknown_language() {
        let config: KHouseConfig = toml::from_str(
            r#"
[site]
default_language = "fr"
"#,
        )
        .unwrap();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnknownLanguage(code)) if code == "fr"
        ));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let cases = [
            "[ai]\napi_base = \"ftp://example.com\"",
            "[ai]\nmodel = \"  \"",
            "[ai]\ntimeout_secs = 0",
            "[session]\nidle_minutes = 0",
            "[session]\ncookie_name = \"\"",
            "[session]\nmax_visitors = 0",
        ];

        for case in cases {
            let config: KHouseConfig = toml::from_str(case).unwrap();
            assert!(
                matches!(config.validate(), Err(ConfigError::ValidationError(_))),
                "expected validation error for {case:?}"
            );
        }
    }

    #[test]
    fn test_warnings_missing_api_key() {
        let config: KHouseConfig = toml::from_str(&create_test_config()).unwrap();
        let warnings = config.validate_with_warnings().unwrap();

        assert!(warnings
            .iter()
            .any(|w| w.kind == ConfigWarningKind::MissingApiKey));
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_warnings_ai_disabled() {
        let config: KHouseConfig = toml::from_str("[ai]\nenabled = false").unwrap();
        let warnings = config.validate_with_warnings().unwrap();

        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, ConfigWarningKind::AiFeatureWithoutAi);
    }

    #[test]
    fn test_no_warnings_without_ai_features() {
        let config: KHouseConfig = toml::from_str(
            r#"
[ai]
api_key_env = "KHOUSE_TEST_UNSET_KEY"

[site.features]
room_matcher = false
chatbot = false
"#,
        )
        .unwrap();

        assert!(config.validate_with_warnings().unwrap().is_empty());
    }

    #[test]
    fn test_bind_addr() {
        let config: KHouseConfig = toml::from_str(&create_test_config()).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_config_manager_from_config() {
        let config: KHouseConfig = toml::from_str(&create_test_config()).unwrap();

        let manager = KHouseConfigManager::from_config(config.clone());
        let loaded = manager.config();

        assert_eq!(loaded.server.host, config.server.host);
        assert_eq!(loaded.server.port, config.server.port);
    }

    #[test]
    fn test_load_missing_file() {
        let result = KHouseConfig::load("/nonexistent/khouse.toml");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
