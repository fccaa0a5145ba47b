//! # Client configuration: `blog.toml`
//!
//! Defines the TOML configuration the web client is built with
//! (filename: [`BlogConfig::filename`] = `"blog.toml"`). It tells the client
//! where the REST API lives, how many items each list shows per page, and
//! under which key the session token is persisted.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3000"
//!
//! [pagination]
//! posts_per_page = 9
//! comments_per_page = 10
//! users_per_page = 10
//! comments_preview = 15     # comments shown on a post before "Show All"
//!
//! [session]
//! token_key = "token"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`BlogConfig`] | Top-level config. Provides builder helpers (`new`, `with_posts_per_page`), TOML (de)serialisation, and the canonical filename. |
//! | [`ApiConfig`] | Base URL of the REST API. |
//! | [`PaginationConfig`] | Page sizes of the three paginated lists and the comment preview length. |
//! | [`SessionConfig`] | Storage key of the persisted token. |
//!
//! Every field has a default, so a missing or empty file is equivalent to the
//! default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `blog.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// REST API location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every request path is appended to. No trailing slash needed.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Page sizes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaginationConfig {
    #[serde(default = "default_posts_per_page")]
    pub posts_per_page: usize,
    #[serde(default = "default_list_page")]
    pub comments_per_page: usize,
    #[serde(default = "default_list_page")]
    pub users_per_page: usize,
    /// Comments shown on a post page before the "Show All Comments" control.
    #[serde(default = "default_comments_preview")]
    pub comments_preview: usize,
}

/// Session persistence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

/// Failure to read a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_posts_per_page() -> usize {
    9
}

fn default_list_page() -> usize {
    10
}

fn default_comments_preview() -> usize {
    15
}

fn default_token_key() -> String {
    "token".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            posts_per_page: default_posts_per_page(),
            comments_per_page: default_list_page(),
            users_per_page: default_list_page(),
            comments_preview: default_comments_preview(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
        }
    }
}

impl BlogConfig {
    /// Create a config pointing at the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
            ..Self::default()
        }
    }

    /// Builder method to set the posts page size.
    pub fn with_posts_per_page(mut self, size: usize) -> Self {
        self.pagination.posts_per_page = size;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "blog.toml"
    }

    /// Parse from TOML string. Zero page sizes are rejected.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        let p = &config.pagination;
        if p.posts_per_page == 0 || p.comments_per_page == 0 || p.users_per_page == 0 {
            return Err(ConfigError::Invalid(
                "page sizes must be greater than zero".to_string(),
            ));
        }
        Ok(config)
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
        let config = BlogConfig::from_toml("").unwrap();
        assert_eq!(config, BlogConfig::default());
        assert_eq!(config.pagination.posts_per_page, 9);
        assert_eq!(config.pagination.comments_per_page, 10);
        assert_eq!(config.pagination.users_per_page, 10);
        assert_eq!(config.pagination.comments_preview, 15);
        assert_eq!(config.session.token_key, "token");
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = BlogConfig::from_toml(
            r#"
            [api]
            base_url = "https://api.example.com"

            [pagination]
            posts_per_page = 12
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://api.example.com");
        assert_eq!(config.pagination.posts_per_page, 12);
        assert_eq!(config.pagination.users_per_page, 10);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = BlogConfig::from_toml("[pagination]\nusers_per_page = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = BlogConfig::from_toml("[api\nbase_url = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_builder_and_toml_output() {
        let config = BlogConfig::new("http://blog.test").with_posts_per_page(6);
        let text = config.to_toml().unwrap();
        let parsed = BlogConfig::from_toml(&text).unwrap();
        assert_eq!(parsed.api.base_url, "http://blog.test");
        assert_eq!(parsed.pagination.posts_per_page, 6);
    }
}
