//! Pinterest v1 API client.

use crate::config::{ClientConfig, TokenPlacement};
use crate::error::{ClientError, ClientResult};
use crate::oauth;
use crate::request::{ImageSource, RequestSpec};
use crate::response::ApiResponse;
use reqwest::Client;

/// Default projection for user lookups.
pub const DEFAULT_USER_FIELDS: &[&str] = &["id", "username", "first_name", "last_name", "image"];
/// Default projection for board lookups.
pub const DEFAULT_BOARD_FIELDS: &[&str] = &["id", "name"];
/// Default projection for pin lookups.
pub const DEFAULT_PIN_FIELDS: &[&str] = &["id", "note", "image(original)"];
/// Default projection for the authenticated user's own pins.
pub const DEFAULT_MY_PIN_FIELDS: &[&str] =
    &["id", "note", "image(original)", "board(id,name)"];

/// Client for the Pinterest v1 REST API.
///
/// Holds the OAuth credentials and a configured HTTP client; every resource
/// method is an independent async call with no shared mutable state, so one
/// client can serve concurrent requests.
///
/// ```ignore
/// use pinterest_api::PinterestClient;
///
/// let client = PinterestClient::new("access-token");
/// let me = client.get_user(None, None).await?;
/// if let Some(user) = me.data() {
///     println!("{}", user["username"]);
/// }
/// ```
#[derive(Clone)]
pub struct PinterestClient {
    config: ClientConfig,
    http: Client,
}

impl PinterestClient {
    /// Create a client with an access token and default configuration.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::from_config(ClientConfig::new().with_access_token(access_token))
    }

    /// Create a client from configuration.
    pub fn from_config(config: ClientConfig) -> Self {
        Self {
            http: config.build_client(),
            config,
        }
    }

    /// Create from `PINTEREST_*` environment variables.
    pub fn from_env() -> ClientResult<Self> {
        let config = ClientConfig::from_env("PINTEREST");
        if config.access_token.is_none() {
            return Err(ClientError::config("PINTEREST_ACCESS_TOKEN not set"));
        }
        Ok(Self::from_config(config))
    }

    /// The active configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The current access token, if any.
    pub fn access_token(&self) -> Option<&str> {
        self.config.access_token.as_deref()
    }

    /// Replace the access token. Concurrent in-flight calls are unaffected;
    /// requiring `&mut self` keeps the swap exclusive.
    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.config.access_token = Some(token.into());
    }

    /// Build the OAuth authorize URL for the implicit-grant login flow.
    ///
    /// No I/O. See [`crate::oauth::build_login_url`].
    pub fn login_url(
        &self,
        scope: &[&str],
        redirect_uri: Option<&str>,
        state: Option<&str>,
    ) -> String {
        oauth::build_login_url(&self.config, scope, redirect_uri, state)
    }

    /// Fetch a user profile, or the authenticated user when `user_id` is
    /// `None`.
    pub async fn get_user(
        &self,
        user_id: Option<&str>,
        fields: Option<&[&str]>,
    ) -> ClientResult<ApiResponse> {
        let endpoint = match user_id {
            Some(id) => format!("users/{}", id),
            None => "me".to_string(),
        };
        self.send(RequestSpec::get(endpoint, fields.unwrap_or(DEFAULT_USER_FIELDS)))
            .await
    }

    /// List the authenticated user's boards.
    pub async fn get_boards(&self, fields: Option<&[&str]>) -> ClientResult<ApiResponse> {
        self.send(RequestSpec::get("me/boards", fields.unwrap_or(DEFAULT_BOARD_FIELDS)))
            .await
    }

    /// Fetch a single board.
    pub async fn get_board(
        &self,
        board_id: &str,
        fields: Option<&[&str]>,
    ) -> ClientResult<ApiResponse> {
        self.send(RequestSpec::get(
            format!("boards/{}", board_id),
            fields.unwrap_or(DEFAULT_BOARD_FIELDS),
        ))
        .await
    }

    /// List the pins on a board.
    pub async fn get_board_pins(
        &self,
        board_id: &str,
        fields: Option<&[&str]>,
    ) -> ClientResult<ApiResponse> {
        self.send(RequestSpec::get(
            format!("boards/{}/pins", board_id),
            fields.unwrap_or(DEFAULT_PIN_FIELDS),
        ))
        .await
    }

    /// List the authenticated user's pins.
    pub async fn get_pins(&self, fields: Option<&[&str]>) -> ClientResult<ApiResponse> {
        self.send(RequestSpec::get("me/pins", fields.unwrap_or(DEFAULT_MY_PIN_FIELDS)))
            .await
    }

    /// Fetch a single pin.
    pub async fn get_pin(
        &self,
        pin_id: &str,
        fields: Option<&[&str]>,
    ) -> ClientResult<ApiResponse> {
        self.send(RequestSpec::get(
            format!("pins/{}", pin_id),
            fields.unwrap_or(DEFAULT_PIN_FIELDS),
        ))
        .await
    }

    /// Create a pin on a board.
    pub async fn create_pin(
        &self,
        board_id: &str,
        note: &str,
        link: &str,
        image: ImageSource,
    ) -> ClientResult<ApiResponse> {
        let (image_key, image_value) = image.into_param();
        let spec = RequestSpec::post("pins")
            .param("board", board_id)
            .param("note", note)
            .param("link", link)
            .param(image_key, image_value);
        self.send(spec).await
    }

    /// Create a board.
    pub async fn create_board(
        &self,
        name: &str,
        description: &str,
    ) -> ClientResult<ApiResponse> {
        let spec = RequestSpec::post("boards")
            .param("name", name)
            .param("description", description);
        self.send(spec).await
    }

    /// Delete a pin.
    pub async fn delete_pin(&self, pin_id: &str) -> ClientResult<ApiResponse> {
        self.send(RequestSpec::delete(format!("pins/{}", pin_id))).await
    }

    /// Delete a board.
    pub async fn delete_board(&self, board_id: &str) -> ClientResult<ApiResponse> {
        self.send(RequestSpec::delete(format!("boards/{}", board_id))).await
    }

    /// Shared request path: build the URL, attach the token, issue the call
    /// and discriminate the JSON envelope.
    async fn send(&self, spec: RequestSpec) -> ClientResult<ApiResponse> {
        let query_token = match self.config.token_placement {
            TokenPlacement::Query => self.config.access_token.as_deref(),
            TokenPlacement::Header => None,
        };

        let mut url = format!("{}{}", self.config.api_base, spec.endpoint);
        let query = spec.query(query_token);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }

        tracing::debug!(method = %spec.method, endpoint = %spec.endpoint, "api request");

        let mut request = self.http.request(spec.method.clone(), &url);
        if self.config.token_placement == TokenPlacement::Header {
            if let Some(token) = &self.config.access_token {
                request = request.bearer_auth(token);
            }
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, endpoint = %spec.endpoint, "non-success status");
        }

        let body = response.text().await?;
        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| ClientError::decode(e, &body))?;

        Ok(ApiResponse::from_body(value))
    }
}

impl std::fmt::Debug for PinterestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinterestClient")
            .field("api_base", &self.config.api_base)
            .field("has_token", &self.config.access_token.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_client_new() {
        let client = PinterestClient::new("tok");
        assert_eq!(client.access_token(), Some("tok"));
    }

    #[test]
    fn test_set_access_token() {
        let mut client = PinterestClient::from_config(ClientConfig::new());
        assert_eq!(client.access_token(), None);
        client.set_access_token("fresh");
        assert_eq!(client.access_token(), Some("fresh"));
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = PinterestClient::new("secret-token");
        let debug = format!("{:?}", client);
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("has_token"));
    }

    #[test]
    fn test_from_env_missing_token() {
        std::env::remove_var("PINTEREST_ACCESS_TOKEN");
        assert!(PinterestClient::from_env().is_err());
    }

    #[rstest]
    #[case(DEFAULT_USER_FIELDS, "id,username,first_name,last_name,image")]
    #[case(DEFAULT_BOARD_FIELDS, "id,name")]
    #[case(DEFAULT_PIN_FIELDS, "id,note,image(original)")]
    #[case(DEFAULT_MY_PIN_FIELDS, "id,note,image(original),board(id,name)")]
    fn test_default_projections(#[case] fields: &[&str], #[case] joined: &str) {
        assert_eq!(fields.join(","), joined);
    }
}
