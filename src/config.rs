use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Debug mode: verbose logging
    #[serde(default = "default_true")]
    pub debug: bool,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum request body size in MB
    #[serde(default = "default_max_body_size_mb")]
    pub max_body_size_mb: usize,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log level (overridden to "debug" when the debug flag is set)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Analytics feature flags
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

/// Analytics feature flags, loaded at startup and never re-read per request.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalyticsConfig {
    /// Enable the R integration for statistical analysis
    #[serde(default = "default_true")]
    pub enable_r_integration: bool,

    /// Automatically generate visualizations for analytics runs
    #[serde(default = "default_true")]
    pub auto_visualization: bool,

    /// Supported export formats
    #[serde(default = "default_export_formats")]
    pub export_formats: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            debug: true,
            timeout_secs: default_timeout_secs(),
            max_body_size_mb: default_max_body_size_mb(),
            enable_cors: true,
            log_level: default_log_level(),
            analytics: AnalyticsConfig::default(),
        }
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            enable_r_integration: true,
            auto_visualization: true,
            export_formats: default_export_formats(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and config files
    pub fn load() -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("server").required(false))
            // Override with environment variables
            .add_source(config::Environment::with_prefix("NLP_SUITE").separator("__"));

        let config: AppConfig = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get max body size in bytes
    pub fn max_body_size(&self) -> usize {
        self.max_body_size_mb * 1024 * 1024
    }

    /// Log filter directive, honoring the debug flag
    pub fn effective_log_level(&self) -> String {
        if self.debug {
            "debug".to_string()
        } else {
            self.log_level.clone()
        }
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_body_size_mb() -> usize {
    16
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_export_formats() -> Vec<String> {
    vec!["json".to_string(), "csv".to_string()]
}
