//! # pinterest-api
//!
//! Async client for the Pinterest v1 REST API: user profiles, boards,
//! pins and OAuth login-URL construction.
//!
//! ## Core Concepts
//!
//! - **[`PinterestClient`]**: one method per API endpoint
//! - **[`ApiResponse`]**: discriminated success/error envelope — the
//!   upstream reports logical errors in the body, not the status code
//! - **[`ClientConfig`]**: credentials, base URLs, timeout, TLS mode
//! - **[`ImageSource`]**: remote-URL vs raw-bytes image for pin creation
//!
//! ## Example
//!
//! ```ignore
//! use pinterest_api::{PinterestClient, ImageSource};
//!
//! let client = PinterestClient::new(std::env::var("PINTEREST_ACCESS_TOKEN")?);
//!
//! let boards = client.get_boards(None).await?;
//! for board in boards.data().and_then(|d| d.as_array()).into_iter().flatten() {
//!     println!("{} {}", board["id"], board["name"]);
//! }
//!
//! client
//!     .create_pin(
//!         "my-board-id",
//!         "a note",
//!         "https://example.com",
//!         ImageSource::Url("https://example.com/img.jpg".into()),
//!     )
//!     .await?;
//! ```
//!
//! ## Login URL
//!
//! ```
//! use pinterest_api::{ClientConfig, PinterestClient};
//!
//! let client = PinterestClient::from_config(
//!     ClientConfig::new().with_client_id("app-id").with_client_secret("app-secret"),
//! );
//! let url = client.login_url(&["read_public"], Some("https://app.example/cb"), None);
//! assert!(url.starts_with("https://api.pinterest.com/oauth/?response_type=token"));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod error;
pub mod oauth;
pub mod request;
pub mod response;

// Re-exports
pub use client::{
    PinterestClient, DEFAULT_BOARD_FIELDS, DEFAULT_MY_PIN_FIELDS, DEFAULT_PIN_FIELDS,
    DEFAULT_USER_FIELDS,
};
pub use config::{ClientConfig, TokenPlacement, API_BASE, OAUTH_BASE};
pub use error::{ClientError, ClientResult};
pub use oauth::build_login_url;
pub use request::{ImageSource, ParamValue, RequestSpec};
pub use response::ApiResponse;

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{
        ApiResponse, ClientConfig, ClientError, ClientResult, ImageSource, PinterestClient,
        TokenPlacement,
    };
}
