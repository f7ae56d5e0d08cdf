//! Client for the classic Toggl API (v8).
//!
//! Resource methods take a caller-owned [`CancellationToken`]; a `None`
//! token is rejected before any network I/O.
//!
//! ```no_run
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn run() -> toggl_v8::Result<()> {
//! let client = toggl_v8::Client::new("my-api-token")?;
//! let ctx = CancellationToken::new();
//! let workspaces = client.get_workspaces(Some(&ctx)).await?;
//! # Ok(())
//! # }
//! ```

pub mod users;
pub mod workspaces;

pub use toggl_api::{ApiError, ApiErrorBody, Result};
pub use users::User;
pub use workspaces::Workspace;

use serde::Deserialize;
use toggl_api::ApiClient;

pub const DEFAULT_BASE_URL: &str = "https://api.track.toggl.com/";

const API_VERSION_PATH: &str = "api/v8/";

/// Client for the v8 API generation. Immutable after construction and safe
/// to share across concurrent calls.
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

    /// Replaces the HTTP transport, e.g. for custom TLS or proxy policy.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.api = self.api.with_http_client(http);
        self
    }

    pub(crate) fn api(&self) -> &ApiClient {
        &self.api
    }
}

/// v8 wraps single-resource responses in a `data` object.
#[derive(Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub(crate) data: T,
}
