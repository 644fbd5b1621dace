//! Configuration management
//!
//! This module handles loading and parsing configuration for the church website.
//! Configuration can be loaded from:
//! - config.yml file
//! - Environment variables (override file settings)
//!
//! Missing optional values are filled with sensible defaults, so the site
//! runs against the production dataset with no configuration at all.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Content store configuration
    #[serde(default)]
    pub content: ContentConfig,
    /// Fetch-once cache configuration
    #[serde(default)]
    pub cache: CacheConfig,
    /// Site presentation configuration
    #[serde(default)]
    pub site: SiteConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Content store (Sanity) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Project identifier
    #[serde(default = "default_project_id")]
    pub project_id: String,
    /// Dataset name
    #[serde(default = "default_dataset")]
    pub dataset: String,
    /// API version, a UTC date string
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Query the CDN edge instead of the live API
    #[serde(default = "default_use_cdn")]
    pub use_cdn: bool,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            project_id: default_project_id(),
            dataset: default_dataset(),
            api_version: default_api_version(),
            use_cdn: default_use_cdn(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ContentConfig {
    /// Base URL of the query endpoint, without the query string
    pub fn query_url(&self) -> String {
        let host = if self.use_cdn { "apicdn" } else { "api" };
        format!(
            "https://{}.{}.sanity.io/v{}/data/query/{}",
            self.project_id, host, self.api_version, self.dataset
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_project_id() -> String {
    "8u8f8r8d".to_string()
}

fn default_dataset() -> String {
    "production".to_string()
}

fn default_api_version() -> String {
    "2024-06-05".to_string()
}

fn default_use_cdn() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    15
}

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// How long a fetched query result is reused, in seconds
    #[serde(default = "default_ttl")]
    pub ttl_seconds: u64,
    /// Maximum number of memoized query results
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_ttl(),
            max_capacity: default_max_capacity(),
        }
    }
}

fn default_ttl() -> u64 {
    300
}

fn default_max_capacity() -> u64 {
    1_000
}

/// Site presentation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Church name shown in the header, footer and page titles
    #[serde(default = "default_site_name")]
    pub name: String,
    /// Short tagline shown under the name
    #[serde(default = "default_tagline")]
    pub tagline: String,
    /// Third-party endpoint the contact form posts to
    #[serde(default = "default_contact_form_endpoint")]
    pub contact_form_endpoint: String,
    /// How long a page waits for content before rendering the loading state
    #[serde(default = "default_render_deadline_ms")]
    pub render_deadline_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            tagline: default_tagline(),
            contact_form_endpoint: default_contact_form_endpoint(),
            render_deadline_ms: default_render_deadline_ms(),
        }
    }
}

impl SiteConfig {
    pub fn render_deadline(&self) -> Duration {
        Duration::from_millis(self.render_deadline_ms)
    }
}

fn default_site_name() -> String {
    "1ª Igreja Unida de Inácio Monteiro".to_string()
}

fn default_tagline() -> String {
    "Levando o amor de Cristo a todos".to_string()
}

fn default_contact_form_endpoint() -> String {
    "https://formspree.io/f/mvgrzbpw".to_string()
}

fn default_render_deadline_ms() -> u64 {
    2_500
}

/// Error type for configuration parsing
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {message}")]
    ParseError {
        path: String,
        message: String,
    },
}

impl Config {
    /// Load configuration from file
    ///
    /// If the file doesn't exist or is empty, returns default configuration.
    /// If the file exists but is invalid YAML, returns an error with details.
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            source: e,
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: format_yaml_error(&e),
        })?;

        Ok(config)
    }

    /// Load configuration from file with environment variable overrides
    ///
    /// Environment variables follow the pattern `IGREJA_<SECTION>_<FIELD>`:
    /// - IGREJA_SERVER_HOST, IGREJA_SERVER_PORT
    /// - IGREJA_CONTENT_PROJECT_ID, IGREJA_CONTENT_DATASET,
    ///   IGREJA_CONTENT_API_VERSION, IGREJA_CONTENT_USE_CDN,
    ///   IGREJA_CONTENT_TIMEOUT_SECS
    /// - IGREJA_CACHE_TTL_SECONDS, IGREJA_CACHE_MAX_CAPACITY
    /// - IGREJA_SITE_NAME, IGREJA_SITE_CONTACT_FORM_ENDPOINT,
    ///   IGREJA_SITE_RENDER_DEADLINE_MS
    ///
    /// Values that fail to parse are ignored.
    pub fn load_with_env(path: &std::path::Path) -> anyhow::Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        // Server configuration
        if let Ok(host) = std::env::var("IGREJA_SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = parsed_env("IGREJA_SERVER_PORT") {
            self.server.port = port;
        }

        // Content store configuration
        if let Ok(project_id) = std::env::var("IGREJA_CONTENT_PROJECT_ID") {
            self.content.project_id = project_id;
        }
        if let Ok(dataset) = std::env::var("IGREJA_CONTENT_DATASET") {
            self.content.dataset = dataset;
        }
        if let Ok(api_version) = std::env::var("IGREJA_CONTENT_API_VERSION") {
            self.content.api_version = api_version;
        }
        if let Some(use_cdn) = parsed_env("IGREJA_CONTENT_USE_CDN") {
            self.content.use_cdn = use_cdn;
        }
        if let Some(timeout) = parsed_env("IGREJA_CONTENT_TIMEOUT_SECS") {
            self.content.timeout_secs = timeout;
        }

        // Cache configuration
        if let Some(ttl) = parsed_env("IGREJA_CACHE_TTL_SECONDS") {
            self.cache.ttl_seconds = ttl;
        }
        if let Some(capacity) = parsed_env("IGREJA_CACHE_MAX_CAPACITY") {
            self.cache.max_capacity = capacity;
        }

        // Site configuration
        if let Ok(name) = std::env::var("IGREJA_SITE_NAME") {
            self.site.name = name;
        }
        if let Ok(endpoint) = std::env::var("IGREJA_SITE_CONTACT_FORM_ENDPOINT") {
            self.site.contact_form_endpoint = endpoint;
        }
        if let Some(deadline) = parsed_env("IGREJA_SITE_RENDER_DEADLINE_MS") {
            self.site.render_deadline_ms = deadline;
        }
    }
}

fn parsed_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Format YAML parsing error with location and context
fn format_yaml_error(e: &serde_yaml::Error) -> String {
    if let Some(location) = e.location() {
        format!(
            "at line {}, column {}: {}",
            location.line(),
            location.column(),
            e
        )
    } else {
        e.to_string()
    }
}

// Shared mutex for all config tests that modify environment variables.
#[cfg(test)]
static CONFIG_ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
const ENV_KEYS: &[&str] = &[
    "IGREJA_SERVER_HOST",
    "IGREJA_SERVER_PORT",
    "IGREJA_CONTENT_PROJECT_ID",
    "IGREJA_CONTENT_DATASET",
    "IGREJA_CONTENT_API_VERSION",
    "IGREJA_CONTENT_USE_CDN",
    "IGREJA_CONTENT_TIMEOUT_SECS",
    "IGREJA_CACHE_TTL_SECONDS",
    "IGREJA_CACHE_MAX_CAPACITY",
    "IGREJA_SITE_NAME",
    "IGREJA_SITE_CONTACT_FORM_ENDPOINT",
    "IGREJA_SITE_RENDER_DEADLINE_MS",
];

#[cfg(test)]
fn clear_env() {
    for key in ENV_KEYS {
        std::env::remove_var(key);
    }
}
