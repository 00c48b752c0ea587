use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable consulted when no API key is configured.
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Configuration for vitrine.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (VITRINE_* prefix)
/// 3. Config file (~/.config/vitrine/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the product catalog CSV.
    ///
    /// Can be set via:
    /// - CLI: --catalog-dir /path/to/data
    /// - ENV: VITRINE_CATALOG_DIR
    /// - Config: catalog_dir = "/path/to/data"
    /// - Default: ./data
    pub catalog_dir: PathBuf,

    /// Similarity a product must strictly exceed to count as relevant.
    pub threshold: f64,

    /// How many of the best matches are shown to the language model.
    pub top_n: usize,

    /// Address the HTTP server binds to.
    pub bind: String,

    /// Origins allowed by the CORS policy; `*` allows any origin.
    pub allowed_origins: Vec<String>,

    /// OpenAI API key.
    ///
    /// Can be set via:
    /// - ENV: VITRINE_OPENAI_API_KEY or OPENAI_API_KEY
    /// - Config: openai_api_key = "..."
    pub openai_api_key: Option<String>,

    /// Base URL of the OpenAI-compatible API.
    pub openai_base_url: String,

    /// Chat completion model.
    pub model: String,

    pub temperature: f32,

    pub max_tokens: u32,

    /// Timeout for a single completion request, in seconds.
    pub request_timeout_secs: u64,

    /// Retries for transient completion failures.
    pub max_retries: usize,

    /// Log filter used when RUST_LOG is not set.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_dir: PathBuf::from("data"),
            threshold: vitrine_search::DEFAULT_THRESHOLD,
            top_n: 3,
            bind: String::from("0.0.0.0:8000"),
            allowed_origins: vec![String::from("*")],
            openai_api_key: None,
            openai_base_url: String::from("https://api.openai.com/v1"),
            model: String::from("gpt-3.5-turbo"),
            temperature: 0.7,
            max_tokens: 150,
            request_timeout_secs: 30,
            max_retries: 2,
            log_level: String::from("info"),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/vitrine/config.toml
    /// Reads environment variables with VITRINE_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("vitrine");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// The API key from configuration, falling back to `OPENAI_API_KEY`.
    pub fn api_key(&self) -> Option<String> {
        self.api_key_or_else(|| std::env::var(OPENAI_API_KEY_ENV).ok())
    }

    /// The configured key, else whatever `fallback` yields. Blank keys count
    /// as absent on both sides.
    fn api_key_or_else(&self, fallback: impl FnOnce() -> Option<String>) -> Option<String> {
        self.openai_api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(fallback)
            .filter(|key| !key.trim().is_empty())
    }

    /// Check that tunables are within range.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.threshold) {
            anyhow::bail!("threshold must be in [0, 1), got {}", self.threshold);
        }
        if self.top_n == 0 {
            anyhow::bail!("top_n must be at least 1");
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            anyhow::bail!("temperature must be in [0, 2], got {}", self.temperature);
        }
        if self.allowed_origins.is_empty() {
            anyhow::bail!("allowed_origins must list at least one origin (or \"*\")");
        }
        Ok(())
    }
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/vitrine/config.toml
/// - macOS: ~/Library/Application Support/vitrine/config.toml
/// - Windows: %APPDATA%\vitrine\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vitrine")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Vitrine Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (VITRINE_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Directory holding the product catalog. The first .csv file (by name) is used.
#
# Can also be set via:
# - CLI: vitrine --catalog-dir /srv/shop/data serve
# - Environment: VITRINE_CATALOG_DIR=/srv/shop/data
catalog_dir = "data"

# Minimum cosine similarity (exclusive) for a product to count as relevant
threshold = 0.2

# Number of best matches passed to the language model
top_n = 3

# HTTP listen address
bind = "0.0.0.0:8000"

# CORS origins; replace "*" with your storefront domain in production
allowed_origins = ["*"]

# OpenAI API key. Falls back to the OPENAI_API_KEY environment variable.
#openai_api_key = "sk-..."

#openai_base_url = "https://api.openai.com/v1"
model = "gpt-3.5-turbo"
temperature = 0.7
max_tokens = 150
request_timeout_secs = 30
max_retries = 2

# Log filter used when RUST_LOG is not set
log_level = "info"
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
