use crate::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub server: ServerConfig,
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub log_level: String,
    pub transport: String, // "stdio", "http"
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Prefix for absolute links back into the platform, e.g. the external login page.
    pub base_url: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: 8080,
                log_level: "info".to_string(),
                transport: "stdio".to_string(),
            },
            api: ApiConfig {
                base_url: "http://localhost:8000".to_string(),
            },
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        // Override with environment variables
        if let Ok(port) = std::env::var("POLYAXON_DASHBOARD_PORT") {
            config.server.port = port
                .parse()
                .map_err(|_| DashboardError::config_error("Invalid POLYAXON_DASHBOARD_PORT"))?;
        }

        if let Ok(log_level) = std::env::var("POLYAXON_DASHBOARD_LOG_LEVEL") {
            config.server.log_level = log_level;
        }

        if let Ok(transport) = std::env::var("POLYAXON_DASHBOARD_TRANSPORT") {
            config.server.transport = transport;
        }

        if let Ok(base_url) = std::env::var("POLYAXON_BASE_URL") {
            if !base_url.trim().is_empty() {
                config.api.base_url = base_url;
            }
        }

        config.api.base_url = normalize_base_url(&config.api.base_url);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DashboardError::config_error(format!("Failed to read config file: {}", e))
        })?;

        let mut config: DashboardConfig = toml::from_str(&content).map_err(|e| {
            DashboardError::config_error(format!("Failed to parse config file: {}", e))
        })?;
        config.api.base_url = normalize_base_url(&config.api.base_url);

        Ok(config)
    }
}

fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}
