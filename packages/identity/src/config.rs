//! # Client configuration: `smis.toml`
//!
//! Optional file read by native clients from the platform data directory
//! (filename: [`SmisConfig::filename`]). The web client always uses the defaults.
//!
//! ## Structure
//!
//! ```toml
//! [session]
//! storage_key = "user"            # key holding the serialised identity
//!
//! [auth]
//! login_path = "/login"           # where the route guard sends anonymous users
//! home_path = "/"                 # where a successful login lands
//!
//! [server]
//! url = "http://localhost:8080"   # server functions endpoint (desktop)
//! ```
//!
//! Every struct derives or implements `Default`, so a missing or empty file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

use crate::session::DEFAULT_SESSION_KEY;

/// Top-level configuration stored in `smis.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SmisConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_login_path")]
    pub login_path: String,
    #[serde(default = "default_home_path")]
    pub home_path: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_url")]
    pub url: String,
}

fn default_storage_key() -> String {
    DEFAULT_SESSION_KEY.to_string()
}

fn default_login_path() -> String {
    "/login".to_string()
}

fn default_home_path() -> String {
    "/".to_string()
}

fn default_server_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_path: default_login_path(),
            home_path: default_home_path(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: default_server_url(),
        }
    }
}

impl SmisConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "smis.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = SmisConfig::from_toml("").unwrap();
        assert_eq!(config, SmisConfig::default());
        assert_eq!(config.session.storage_key, "user");
        assert_eq!(config.auth.login_path, "/login");
        assert_eq!(config.auth.home_path, "/");
    }

    #[test]
    fn test_partial_override() {
        let config = SmisConfig::from_toml(
            r#"
            [auth]
            home_path = "/dashboard"

            [server]
            url = "https://smis.example.org"
            "#,
        )
        .unwrap();
        assert_eq!(config.auth.home_path, "/dashboard");
        assert_eq!(config.auth.login_path, "/login");
        assert_eq!(config.server.url, "https://smis.example.org");
        assert_eq!(config.session, SessionConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = SmisConfig::default();
        config.session.storage_key = "smis-user".to_string();
        let text = config.to_toml().unwrap();
        assert_eq!(SmisConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_malformed_file_is_error() {
        assert!(SmisConfig::from_toml("[auth\nlogin_path = ").is_err());
    }
}
