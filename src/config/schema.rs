//! Configuration schema for polldash.
//!
//! All fields carry serde defaults so a partial TOML file (or none at all)
//! always deserializes to a usable configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PolldashConfig {
    pub server: ServerConfig,
    pub charts: ChartsConfig,
    pub ui: UiConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address for the dashboard listener.
    pub host: String,
    /// Listener port.
    pub port: u16,
    /// Open the dashboard in the default browser on startup.
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 9748,
            open_browser: true,
        }
    }
}

/// Location of the pre-rendered chart files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartsConfig {
    /// Directory the external pipeline writes chart HTML files into.
    pub dir: String,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            dir: ".".to_string(),
        }
    }
}

/// Dashboard presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Page title shown in the dashboard header.
    pub title: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "Pollution Data Monitoring Dashboard".to_string(),
        }
    }
}

impl PolldashConfig {
    /// `host:port` string for the HTTP listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Annotated default config, written by `polldash config init`.
    pub fn default_toml() -> &'static str {
        r#"# polldash configuration
# Location: ~/.polldash/config.toml
# Project override: .polldash.toml in the working directory
# Environment overrides: POLLDASH_HOST, POLLDASH_PORT, POLLDASH_CHART_DIR,
#                        POLLDASH_OPEN_BROWSER

[server]
# Bind address and port for the dashboard listener.
host = "127.0.0.1"
port = 9748
# Open the dashboard in the default browser on startup.
open_browser = true

[charts]
# Directory containing the pre-rendered chart HTML files.
dir = "."

[ui]
# Page title shown in the dashboard header.
title = "Pollution Data Monitoring Dashboard"
"#
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let cfg = PolldashConfig::default();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 9748);
        assert!(cfg.server.open_browser);
        assert_eq!(cfg.charts.dir, ".");
        assert_eq!(cfg.ui.title, "Pollution Data Monitoring Dashboard");
    }

    #[test]
    fn listen_addr_joins_host_and_port() {
        let mut cfg = PolldashConfig::default();
        cfg.server.host = "0.0.0.0".to_string();
        cfg.server.port = 8080;
        assert_eq!(cfg.listen_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn partial_toml_fills_missing_fields_with_defaults() {
        let cfg: PolldashConfig = toml::from_str("[server]\nport = 9000\n").unwrap();
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.charts.dir, ".");
    }

    #[test]
    fn default_toml_parses_back_to_defaults() {
        let cfg: PolldashConfig = toml::from_str(PolldashConfig::default_toml()).unwrap();
        assert_eq!(cfg.server.port, PolldashConfig::default().server.port);
        assert_eq!(cfg.ui.title, PolldashConfig::default().ui.title);
    }
}
