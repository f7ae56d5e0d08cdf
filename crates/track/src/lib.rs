//! Client for the Toggl Track API (v9).
//!
//! The webhooks API lives under its own versioned path and host; see
//! [`webhooks::Client`].

pub mod me;
pub mod tasks;
pub mod webhooks;

pub use me::Me;
pub use tasks::Task;
pub use toggl_api::{ApiError, ApiErrorBody, Result};

use toggl_api::{ApiClient, AuthMethod};

pub const DEFAULT_BASE_URL: &str = "https://api.track.toggl.com/";

const API_VERSION_PATH: &str = "api/v9/";

/// Client for the Track (v9) API generation.
#[derive(Clone)]
pub struct Client {
    api: ApiClient,
}

impl Client {
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_token, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(
        api_token: impl Into<String>,
        base_url: impl AsRef<str>,
    ) -> Result<Self> {
        let api = ApiClient::new(base_url, API_VERSION_PATH)?.with_api_token(api_token);
        Ok(Self { api })
    }

    /// Authenticates with a session token carried in a cookie instead of an
    /// API token.
    pub fn with_session_token(
        token: impl Into<String>,
        base_url: impl AsRef<str>,
    ) -> Result<Self> {
        let api = ApiClient::new(base_url, API_VERSION_PATH)?.with_session_token(token);
        Ok(Self { api })
    }

    /// Authenticates with e-mail and password instead of an API token.
    pub fn with_credentials(
        email: impl Into<String>,
        password: impl Into<String>,
        base_url: impl AsRef<str>,
    ) -> Result<Self> {
        let api = ApiClient::new(base_url, API_VERSION_PATH)?.with_auth(AuthMethod::Credentials {
            email: email.into(),
            password: password.into(),
        });
        Ok(Self { api })
    }

    /// Replaces the HTTP transport, e.g. for custom TLS or proxy policy.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.api = self.api.with_http_client(http);
        self
    }

    pub(crate) fn api(&self) -> &ApiClient {
        &self.api
    }
}
