//! Client configuration

use std::env;
use std::path::PathBuf;

/// Client configuration loaded from environment variables.
///
/// Every variable has a working default so the tooling runs against a local
/// backend out of the box.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, e.g. `http://localhost:8080/api/v1`
    pub api_url: String,
    /// Where the session credential is persisted between runs
    pub session_file: PathBuf,
    /// Default page size for list endpoints
    pub page_size: i64,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("BIGEYE_API_URL")
                .unwrap_or_else(|_| "http://localhost:8080/api/v1".to_string()),
            session_file: env::var("BIGEYE_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_session_file()),
            page_size: env::var("BIGEYE_PAGE_SIZE")
                .unwrap_or_else(|_| "50".to_string())
                .parse()
                .unwrap_or(50),
        }
    }

    /// Config pointing at an explicit base URL, with session state kept in
    /// the given file. Used by tests against a mock backend.
    pub fn with_api_url(api_url: impl Into<String>, session_file: PathBuf) -> Self {
        Self {
            api_url: api_url.into(),
            session_file,
            page_size: 50,
        }
    }
}

fn default_session_file() -> PathBuf {
    env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(env::temp_dir)
        .join(".bigeye_admin_session.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_defaults() {
        env::remove_var("BIGEYE_API_URL");
        env::remove_var("BIGEYE_PAGE_SIZE");
        let config = ClientConfig::from_env();
        assert_eq!(config.api_url, "http://localhost:8080/api/v1");
        assert_eq!(config.page_size, 50);
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        env::set_var("BIGEYE_API_URL", "https://api.example.com/v1");
        env::set_var("BIGEYE_PAGE_SIZE", "25");
        let config = ClientConfig::from_env();
        assert_eq!(config.api_url, "https://api.example.com/v1");
        assert_eq!(config.page_size, 25);
        env::remove_var("BIGEYE_API_URL");
        env::remove_var("BIGEYE_PAGE_SIZE");
    }

    #[test]
    #[serial]
    fn test_invalid_page_size_falls_back() {
        env::set_var("BIGEYE_PAGE_SIZE", "lots");
        let config = ClientConfig::from_env();
        assert_eq!(config.page_size, 50);
        env::remove_var("BIGEYE_PAGE_SIZE");
    }
}
