//! Authenticated HTTP pipeline shared by the Toggl API client crates.
//!
//! Each API generation crate (`toggl-v8`, `toggl-track`, `toggl-reports`)
//! wraps one [`ApiClient`] configured with its own base URL, version path
//! and credentials, and delegates every call to the generic request methods
//! here. The pipeline is stateless per call: callers may share a client
//! across tasks freely.

pub mod error;

pub use error::{ApiError, ApiErrorBody, Result};

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

/// Cookie carrying a session token for the newer generation's session flow.
const SESSION_COOKIE: &str = "toggl_accounts_session";

/// How credentials are attached to outgoing requests.
///
/// Fixed per client instance at construction.
#[derive(Clone, Debug)]
pub enum AuthMethod {
    /// API token sent as the basic-auth username with the fixed,
    /// publicly documented `api_token` password placeholder.
    ApiToken(String),
    /// Session token attached as a cookie, the mechanism of the newer
    /// Track API generation's session flow.
    Session(String),
    /// E-mail and password basic auth, also accepted by the Track API.
    Credentials { email: String, password: String },
}

impl AuthMethod {
    fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            AuthMethod::ApiToken(token) => request.basic_auth(token, Some("api_token")),
            AuthMethod::Session(token) => request.header(
                reqwest::header::COOKIE,
                format!("{SESSION_COOKIE}={token}"),
            ),
            AuthMethod::Credentials { email, password } => {
                request.basic_auth(email, Some(password))
            }
        }
    }
}

/// Generic client for one Toggl API generation.
///
/// Immutable after construction and cheap to clone; no mutable state is
/// shared between concurrent calls.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    auth: Option<AuthMethod>,
}

impl ApiClient {
    /// Builds a client rooted at `base_url` with `version_path` appended.
    ///
    /// `version_path` must end with a slash (e.g. `"api/v9/"`).
    /// Normalization is idempotent: a missing trailing slash on the base and
    /// an already present version segment both resolve to the same URL.
    pub fn new(base_url: impl AsRef<str>, version_path: &str) -> Result<Self> {
        let mut base = base_url.as_ref().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let mut url = Url::parse(&base)?;
        if !url.path().ends_with(version_path) {
            let path = format!("{}{}", url.path(), version_path);
            url.set_path(&path);
        }

        let http = Client::builder()
            .user_agent(concat!("toggl-rs/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::ClientBuild)?;

        Ok(Self {
            http,
            base_url: url,
            auth: None,
        })
    }

    pub fn with_auth(mut self, auth: AuthMethod) -> Self {
        self.auth = Some(auth);
        self
    }

    pub fn with_api_token(self, token: impl Into<String>) -> Self {
        self.with_auth(AuthMethod::ApiToken(token.into()))
    }

    pub fn with_session_token(self, token: impl Into<String>) -> Self {
        self.with_auth(AuthMethod::Session(token.into()))
    }

    /// Replaces the HTTP transport, e.g. for custom TLS or proxy policy.
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn get<T, P>(
        &self,
        ctx: Option<&CancellationToken>,
        path: &str,
        params: Option<&P>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.request(ctx, Method::GET, path, params, Option::<&()>::None)
            .await
    }

    pub async fn post<T, B>(
        &self,
        ctx: Option<&CancellationToken>,
        path: &str,
        body: &B,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(ctx, Method::POST, path, Option::<&()>::None, Some(body))
            .await
    }

    pub async fn put<T, B>(
        &self,
        ctx: Option<&CancellationToken>,
        path: &str,
        body: &B,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(ctx, Method::PUT, path, Option::<&()>::None, Some(body))
            .await
    }

    pub async fn patch<T, B>(
        &self,
        ctx: Option<&CancellationToken>,
        path: &str,
        body: &B,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(ctx, Method::PATCH, path, Option::<&()>::None, Some(body))
            .await
    }

    pub async fn delete<T>(&self, ctx: Option<&CancellationToken>, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.request(
            ctx,
            Method::DELETE,
            path,
            Option::<&()>::None,
            Option::<&()>::None,
        )
        .await
    }

    /// Builds, authenticates and executes one request, decoding the outcome.
    ///
    /// The cancellation token is mandatory and checked before any I/O;
    /// in-flight requests race it cooperatively.
    pub async fn request<T, P, B>(
        &self,
        ctx: Option<&CancellationToken>,
        method: Method,
        path: &str,
        params: Option<&P>,
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let ctx = ctx.ok_or(ApiError::MissingContext)?;
        if ctx.is_cancelled() {
            return Err(ApiError::Cancelled);
        }

        let url = self
            .base_url
            .join(path.strip_prefix('/').unwrap_or(path))?;

        let mut req = self.http.request(method.clone(), url.clone());
        if let Some(params) = params {
            req = req.query(params);
        }
        if let Some(body) = body {
            req = req.json(body);
        }
        if let Some(auth) = &self.auth {
            req = auth.apply(req);
        }

        debug!(method = %method, url = %url, "sending request");

        tokio::select! {
            _ = ctx.cancelled() => Err(ApiError::Cancelled),
            result = execute(req) => result,
        }
    }
}

async fn execute<T: DeserializeOwned>(req: RequestBuilder) -> Result<T> {
    let response = req.send().await.map_err(ApiError::Transport)?;
    let status = response.status();
    let bytes = response.bytes().await.map_err(ApiError::Transport)?;

    if status.is_success() {
        return serde_json::from_slice(&bytes).map_err(|err| {
            debug!(%status, "failed to decode success payload");
            ApiError::Decode(err)
        });
    }

    let body = ApiErrorBody::parse(status.as_u16(), &bytes);
    if status == StatusCode::FORBIDDEN {
        Err(ApiError::AuthenticationFailed(body))
    } else {
        Err(ApiError::Api(body))
    }
}
