//! Configuration loading and resolution
//!
//! Settings resolve in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default HTTP port for gds-ui
pub const DEFAULT_PORT: u16 = 5780;

/// Default Carbon Intensity API base URL
pub const DEFAULT_API_BASE_URL: &str = "https://api.carbonintensity.org.uk";

/// Environment variable overriding the HTTP port
pub const PORT_ENV_VAR: &str = "GDS_PORT";

/// Environment variable overriding the upstream API base URL
pub const API_BASE_URL_ENV_VAR: &str = "GDS_API_BASE_URL";

/// Optional settings read from the TOML config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub port: Option<u16>,
    pub api_base_url: Option<String>,
}

/// Resolved service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Port to bind on localhost
    pub port: u16,
    /// Upstream Carbon Intensity API base URL (no trailing slash)
    pub api_base_url: String,
}

impl ServiceConfig {
    /// Resolve configuration from CLI arguments, environment, and TOML file
    ///
    /// `cli_port` wins over everything for the port. `cli_config_path`
    /// names an explicit TOML file; when absent the platform config
    /// directory is searched (`<config_dir>/gds/gds-ui.toml`) and a missing
    /// file simply means defaults.
    pub fn resolve(cli_port: Option<u16>, cli_config_path: Option<&Path>) -> Result<Self> {
        let toml_config = match cli_config_path {
            // An explicitly named file must exist and parse
            Some(path) => {
                let config = load_toml_config(path)?;
                info!("Loaded config from {}", path.display());
                config
            }
            None => match default_config_path() {
                Some(path) if path.exists() => {
                    let config = load_toml_config(&path)?;
                    info!("Loaded config from {}", path.display());
                    config
                }
                _ => TomlConfig::default(),
            },
        };

        let port = cli_port
            .or_else(env_port)
            .or(toml_config.port)
            .unwrap_or(DEFAULT_PORT);

        let api_base_url = std::env::var(API_BASE_URL_ENV_VAR)
            .ok()
            .or(toml_config.api_base_url)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Ok(Self { port, api_base_url })
    }
}

/// Read the port override from the environment, ignoring unset/unparseable
fn env_port() -> Option<u16> {
    std::env::var(PORT_ENV_VAR).ok()?.parse().ok()
}

/// Platform config file path: `<config_dir>/gds/gds-ui.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("gds").join("gds-ui.toml"))
}

/// Load and parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_toml(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_toml_full() {
        let file = write_temp_toml("port = 9000\napi_base_url = \"http://localhost:1\"\n");
        let config = load_toml_config(file.path()).unwrap();
        assert_eq!(config.port, Some(9000));
        assert_eq!(config.api_base_url.as_deref(), Some("http://localhost:1"));
    }

    #[test]
    fn test_toml_partial_and_empty() {
        let file = write_temp_toml("port = 9000\n");
        let config = load_toml_config(file.path()).unwrap();
        assert_eq!(config.port, Some(9000));
        assert_eq!(config.api_base_url, None);

        let file = write_temp_toml("");
        let config = load_toml_config(file.path()).unwrap();
        assert_eq!(config.port, None);
    }

    #[test]
    fn test_toml_malformed() {
        let file = write_temp_toml("port = \"not a number\"");
        assert!(matches!(
            load_toml_config(file.path()),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = ServiceConfig::resolve(None, Some(Path::new("/nonexistent/gds.toml")));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_cli_port_wins_over_toml() {
        let file = write_temp_toml("port = 9000\n");
        let config = ServiceConfig::resolve(Some(4242), Some(file.path())).unwrap();
        assert_eq!(config.port, 4242);
    }

    #[test]
    fn test_toml_port_beats_default() {
        let file = write_temp_toml("port = 9000\n");
        let config = ServiceConfig::resolve(None, Some(file.path())).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }
}
