//! Configuration loading for the storefront client.
//!
//! Settings come from three layers, highest precedence first: environment
//! variables (`API_BASE_URL`, `DATA_DIR`), an optional `config.toml` next to
//! the binary, and built-in defaults. A missing config file is fine; a
//! malformed one is a hard error.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default backend base URL when neither the environment nor the config file
/// provides one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/";

/// Default directory for the cart and session files.
pub const DEFAULT_DATA_DIR: &str = "data";

const CONFIG_FILE: &str = "config.toml";

/// Fully resolved application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the backend REST API, always with a trailing slash
    pub api_base_url: String,
    /// Directory holding the cart and session files
    pub data_dir: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    api: ApiSection,
    #[serde(default)]
    storage: StorageSection,
}

#[derive(Debug, Default, Deserialize)]
struct ApiSection {
    base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct StorageSection {
    data_dir: Option<String>,
}

/// Loads the application configuration from `config.toml` and the environment.
///
/// # Errors
/// Returns [`Error::Config`] if `config.toml` exists but cannot be parsed.
pub fn load_app_configuration() -> Result<AppConfig> {
    let file = read_config_file(Path::new(CONFIG_FILE))?;
    let config = resolve(
        file,
        std::env::var("API_BASE_URL").ok(),
        std::env::var("DATA_DIR").ok(),
    );
    info!(base_url = %config.api_base_url, "Application configuration resolved.");
    Ok(config)
}

/// Reads and parses the config file, returning `None` when it does not exist.
fn read_config_file(path: &Path) -> Result<Option<ConfigFile>> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No {} found, using defaults.", path.display());
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    toml::from_str(&contents)
        .map(Some)
        .map_err(|e| Error::Config {
            message: format!("failed to parse {}: {e}", path.display()),
        })
}

/// Merges the configuration layers. Environment beats file beats defaults.
fn resolve(
    file: Option<ConfigFile>,
    env_base_url: Option<String>,
    env_data_dir: Option<String>,
) -> AppConfig {
    let file = file.unwrap_or_default();

    let mut api_base_url = env_base_url
        .or(file.api.base_url)
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    if !api_base_url.ends_with('/') {
        api_base_url.push('/');
    }

    let data_dir = env_data_dir
        .or(file.storage.data_dir)
        .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());

    AppConfig {
        api_base_url,
        data_dir: PathBuf::from(data_dir),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = resolve(None, None, None);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
    }

    #[test]
    fn test_env_beats_file() {
        let file = ConfigFile {
            api: ApiSection {
                base_url: Some("https://file.example.com/".to_string()),
            },
            storage: StorageSection {
                data_dir: Some("file-data".to_string()),
            },
        };
        let config = resolve(
            Some(file),
            Some("https://env.example.com/".to_string()),
            Some("env-data".to_string()),
        );
        assert_eq!(config.api_base_url, "https://env.example.com/");
        assert_eq!(config.data_dir, PathBuf::from("env-data"));
    }

    #[test]
    fn test_trailing_slash_is_enforced() {
        let config = resolve(None, Some("https://api.example.com".to_string()), None);
        assert_eq!(config.api_base_url, "https://api.example.com/");
    }

    #[test]
    fn test_file_values_are_used_without_env() {
        let file = ConfigFile {
            api: ApiSection {
                base_url: Some("https://shop.example.com/api/".to_string()),
            },
            storage: StorageSection { data_dir: None },
        };
        let config = resolve(Some(file), None, None);
        assert_eq!(config.api_base_url, "https://shop.example.com/api/");
        assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
    }

    #[test]
    fn test_read_config_file_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_config_file(&dir.path().join("config.toml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_read_config_file_parses_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "[api]\nbase_url = \"https://shop.example.com/\"").unwrap();
        writeln!(f, "[storage]\ndata_dir = \"state\"").unwrap();

        let parsed = read_config_file(&path).unwrap().unwrap();
        assert_eq!(
            parsed.api.base_url.as_deref(),
            Some("https://shop.example.com/")
        );
        assert_eq!(parsed.storage.data_dir.as_deref(), Some("state"));
    }

    #[test]
    fn test_read_config_file_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api\nbase_url =").unwrap();

        let result = read_config_file(&path);
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
