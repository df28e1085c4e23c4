//! OAuth authorize-URL construction.
//!
//! Implicit-grant login only: the client builds the URL the user opens in a
//! browser; the upstream redirects back with the token in the fragment.
//! Code exchange and token refresh are out of scope.

use crate::config::ClientConfig;

/// Build the authorize URL for the implicit-grant login flow.
///
/// `scope` entries are comma-joined (and omitted entirely when empty, as the
/// upstream expects). When `state` is `None` a fresh random token is
/// generated for CSRF protection; callers that need to verify the redirect
/// should pass their own and keep a copy.
pub fn build_login_url(
    config: &ClientConfig,
    scope: &[&str],
    redirect_uri: Option<&str>,
    state: Option<&str>,
) -> String {
    let state = match state {
        Some(s) => s.to_string(),
        None => generate_state(),
    };

    let mut params = vec![
        ("response_type", "token".to_string()),
        ("client_id", config.client_id.clone()),
        ("client_secret", config.client_secret.clone()),
        ("state", state),
    ];

    if !scope.is_empty() {
        params.push(("scope", scope.join(",")));
    }

    if let Some(uri) = redirect_uri {
        params.push(("redirect_uri", uri.to_string()));
    }

    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", config.oauth_base, query)
}

/// Generate a random hex state token (16 bytes of entropy).
pub(crate) fn generate_state() -> String {
    use std::fmt::Write;
    let mut bytes = [0u8; 16];
    getrandom::getrandom(&mut bytes).expect("failed to generate random bytes");
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        write!(s, "{:02x}", b).unwrap();
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ClientConfig {
        ClientConfig::new()
            .with_client_id("cid")
            .with_client_secret("shh")
    }

    #[test]
    fn test_login_url_shape() {
        let url = build_login_url(
            &test_config(),
            &["read_public", "write_public"],
            Some("https://app.example/cb"),
            Some("st4te"),
        );
        assert_eq!(
            url,
            "https://api.pinterest.com/oauth/?response_type=token&client_id=cid\
             &client_secret=shh&state=st4te&scope=read_public%2Cwrite_public\
             &redirect_uri=https%3A%2F%2Fapp.example%2Fcb"
        );
    }

    #[test]
    fn test_empty_scope_omitted() {
        let url = build_login_url(&test_config(), &[], None, Some("s"));
        assert!(!url.contains("scope="));
    }

    #[test]
    fn test_missing_redirect_omitted() {
        let url = build_login_url(&test_config(), &["read_public"], None, Some("s"));
        assert!(!url.contains("redirect_uri"));
    }

    #[test]
    fn test_generated_state_unique() {
        let a = build_login_url(&test_config(), &[], None, None);
        let b = build_login_url(&test_config(), &[], None, None);
        assert_ne!(a, b);

        let state = generate_state();
        assert_eq!(state.len(), 32);
        assert!(state.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
