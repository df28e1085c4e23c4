//! Client configuration.

use reqwest::redirect::Policy;
use reqwest::Client;
use std::time::Duration;

/// Default API root.
pub const API_BASE: &str = "https://api.pinterest.com/v1/";
/// Default OAuth root.
pub const OAUTH_BASE: &str = "https://api.pinterest.com/oauth/";

/// Where the access token travels on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenPlacement {
    /// `access_token` as the first query parameter. This is what the
    /// upstream API historically expects, though the token may end up in
    /// intermediary logs.
    #[default]
    Query,
    /// `Authorization: Bearer {token}` header. Opt-in; keeps the token out
    /// of URLs.
    Header,
}

/// Configuration for a [`crate::PinterestClient`].
///
/// Credential fields are read-only during requests; build the config once
/// and hand it to the client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// OAuth application id.
    pub client_id: String,
    /// OAuth application secret.
    pub client_secret: String,
    /// Bearer credential authorizing API calls.
    pub access_token: Option<String>,
    /// API root URL (always with a trailing slash).
    pub api_base: String,
    /// OAuth root URL.
    pub oauth_base: String,
    /// Request timeout.
    pub timeout: Option<Duration>,
    /// How the access token is attached to requests.
    pub token_placement: TokenPlacement,
    /// Skip TLS certificate and hostname verification. Off by default;
    /// only enable against hosts you control.
    pub danger_accept_invalid_certs: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            access_token: None,
            api_base: API_BASE.to_string(),
            oauth_base: OAUTH_BASE.to_string(),
            timeout: None,
            token_placement: TokenPlacement::default(),
            danger_accept_invalid_certs: false,
        }
    }
}

impl ClientConfig {
    /// Create a new empty config pointing at the production API.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the OAuth client id.
    #[must_use]
    pub fn with_client_id(mut self, id: impl Into<String>) -> Self {
        self.client_id = id.into();
        self
    }

    /// Set the OAuth client secret.
    #[must_use]
    pub fn with_client_secret(mut self, secret: impl Into<String>) -> Self {
        self.client_secret = secret.into();
        self
    }

    /// Set the access token.
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Set a custom API root. A trailing slash is added if missing.
    #[must_use]
    pub fn with_api_base(mut self, url: impl Into<String>) -> Self {
        let mut url = url.into();
        if !url.ends_with('/') {
            url.push('/');
        }
        self.api_base = url;
        self
    }

    /// Set a custom OAuth root.
    #[must_use]
    pub fn with_oauth_base(mut self, url: impl Into<String>) -> Self {
        self.oauth_base = url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Choose where the access token travels.
    #[must_use]
    pub fn with_token_placement(mut self, placement: TokenPlacement) -> Self {
        self.token_placement = placement;
        self
    }

    /// Disable TLS certificate and hostname verification.
    #[must_use]
    pub fn with_danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.danger_accept_invalid_certs = accept;
        self
    }

    /// Load from environment variables with the given prefix.
    ///
    /// Looks for:
    /// - `{PREFIX}_CLIENT_ID`
    /// - `{PREFIX}_CLIENT_SECRET`
    /// - `{PREFIX}_ACCESS_TOKEN`
    /// - `{PREFIX}_BASE_URL`
    pub fn from_env(prefix: &str) -> Self {
        let mut config = Self {
            client_id: std::env::var(format!("{}_CLIENT_ID", prefix)).unwrap_or_default(),
            client_secret: std::env::var(format!("{}_CLIENT_SECRET", prefix)).unwrap_or_default(),
            access_token: std::env::var(format!("{}_ACCESS_TOKEN", prefix)).ok(),
            ..Self::default()
        };
        if let Ok(base) = std::env::var(format!("{}_BASE_URL", prefix)) {
            config = config.with_api_base(base);
        }
        config
    }

    /// Build an HTTP client with this config.
    ///
    /// Redirects are followed (limit 10) to match the upstream endpoints,
    /// which occasionally 301 between hosts.
    pub fn build_client(&self) -> Client {
        let mut builder = Client::builder().redirect(Policy::limited(10));

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        if self.danger_accept_invalid_certs {
            tracing::warn!("TLS certificate verification is disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }

        builder.build().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new()
            .with_client_id("cid")
            .with_client_secret("shh")
            .with_access_token("tok")
            .with_timeout(Duration::from_secs(30));

        assert_eq!(config.client_id, "cid");
        assert_eq!(config.client_secret, "shh");
        assert_eq!(config.access_token, Some("tok".to_string()));
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.token_placement, TokenPlacement::Query);
        assert!(!config.danger_accept_invalid_certs);
    }

    #[test]
    fn test_default_bases() {
        let config = ClientConfig::new();
        assert_eq!(config.api_base, "https://api.pinterest.com/v1/");
        assert_eq!(config.oauth_base, "https://api.pinterest.com/oauth/");
    }

    #[test]
    fn test_api_base_trailing_slash() {
        let config = ClientConfig::new().with_api_base("http://127.0.0.1:9999");
        assert_eq!(config.api_base, "http://127.0.0.1:9999/");
    }

    #[test]
    fn test_config_from_env() {
        std::env::set_var("PINTEST_CLIENT_ID", "env-cid");
        std::env::set_var("PINTEST_ACCESS_TOKEN", "env-tok");

        let config = ClientConfig::from_env("PINTEST");
        assert_eq!(config.client_id, "env-cid");
        assert_eq!(config.access_token, Some("env-tok".to_string()));
        assert!(config.client_secret.is_empty());

        std::env::remove_var("PINTEST_CLIENT_ID");
        std::env::remove_var("PINTEST_ACCESS_TOKEN");
    }

    #[test]
    fn test_build_client() {
        let config = ClientConfig::new().with_timeout(Duration::from_secs(10));
        let _client = config.build_client();
    }
}
