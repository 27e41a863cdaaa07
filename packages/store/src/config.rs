//! # Client configuration: `keep-notes.toml`
//!
//! Settings for the web client. Every field has a default, so a missing or
//! empty file is equivalent to the default configuration.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000"
//!
//! [storage]
//! token_key = "token"
//!
//! [errors]            # "inline" or "alert", per operation
//! sign_in = "inline"
//! sign_up = "inline"
//! fetch = "inline"
//! create = "alert"
//! update = "alert"
//! delete = "alert"
//! ```
//!
//! ## Environment overrides
//!
//! [`ClientConfig::load`] starts from the defaults and applies:
//!
//! | Variable | Field | Source |
//! |----------|-------|--------|
//! | `NOTES_API_URL` | `api.base_url` | runtime env (+ `.env`) on native, compile time on wasm |
//! | `NOTES_TOKEN_KEY` | `storage.token_key` | runtime env (+ `.env`) on native only |

use serde::{Deserialize, Serialize};

use crate::token::DEFAULT_TOKEN_KEY;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub errors: ErrorSurfaces,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST backend, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Key the bearer token is persisted under.
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

fn default_token_key() -> String {
    DEFAULT_TOKEN_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
        }
    }
}

/// How a failed backend call is shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSurface {
    /// Message rendered in the view's error banner.
    Inline,
    /// Blocking browser alert.
    Alert,
}

/// Per-operation error surface. Auth forms and the initial fetch report
/// inline, note mutations use an alert.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorSurfaces {
    #[serde(default = "inline")]
    pub sign_in: ErrorSurface,
    #[serde(default = "inline")]
    pub sign_up: ErrorSurface,
    #[serde(default = "inline")]
    pub fetch: ErrorSurface,
    #[serde(default = "alert")]
    pub create: ErrorSurface,
    #[serde(default = "alert")]
    pub update: ErrorSurface,
    #[serde(default = "alert")]
    pub delete: ErrorSurface,
}

fn inline() -> ErrorSurface {
    ErrorSurface::Inline
}

fn alert() -> ErrorSurface {
    ErrorSurface::Alert
}

impl Default for ErrorSurfaces {
    fn default() -> Self {
        Self {
            sign_in: inline(),
            sign_up: inline(),
            fetch: inline(),
            create: alert(),
            update: alert(),
            delete: alert(),
        }
    }
}

impl ClientConfig {
    /// Builder method to point the client at another backend.
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.api.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "keep-notes.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Apply `NOTES_API_URL` / `NOTES_TOKEN_KEY` values. Blank values are
    /// ignored and keep the current setting.
    pub fn with_overrides(mut self, api_url: Option<&str>, token_key: Option<&str>) -> Self {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self = self.with_base_url(url.trim());
        }
        if let Some(key) = token_key.filter(|k| !k.trim().is_empty()) {
            self.storage.token_key = key.to_string();
        }
        self
    }

    /// Defaults plus environment overrides.
    pub fn load() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let config = {
            dotenvy::dotenv().ok();
            let url = std::env::var("NOTES_API_URL").ok();
            let key = std::env::var("NOTES_TOKEN_KEY").ok();
            Self::default().with_overrides(url.as_deref(), key.as_deref())
        };

        #[cfg(target_arch = "wasm32")]
        let config = Self::default().with_overrides(option_env!("NOTES_API_URL"), None);

        tracing::debug!("Using API at {}", config.api.base_url);
        config
    }
}
