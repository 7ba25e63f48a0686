//! Client configuration.

use std::fmt;

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://wapi2.com";

/// Connection settings for a [`Client`](crate::Client).
///
/// Certificate verification is enabled unless
/// [`danger_accept_invalid_certs`](ClientConfig::danger_accept_invalid_certs)
/// is called.
#[derive(Clone)]
pub struct ClientConfig {
    base_url: String,
    auth_token: String,
    accept_invalid_certs: bool,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("auth_token", &"<redacted>")
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}

impl ClientConfig {
    /// Creates a config for the production API authenticated with `auth_token`.
    pub fn new(auth_token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            auth_token: auth_token.into(),
            accept_invalid_certs: false,
        }
    }

    /// Points the client at another host. Trailing slashes are stripped.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Disables TLS certificate and hostname verification.
    ///
    /// Only meant for self-hosted gateways with self-signed certificates.
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }

    pub fn accepts_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }
}
