//! Client for the Toggl Reports API (v2).
//!
//! The report endpoints are read-only aggregations. Response shapes vary by
//! report and grouping, so each method decodes into a caller-supplied type.

pub mod detailed;
pub mod summary;
pub mod weekly;

pub use detailed::DetailedRequestParameters;
pub use summary::SummaryRequestParameters;
pub use toggl_api::{ApiError, ApiErrorBody, Result};
pub use weekly::WeeklyRequestParameters;

use serde::Serialize;
use toggl_api::ApiClient;

pub const DEFAULT_BASE_URL: &str = "https://api.track.toggl.com/";

const API_VERSION_PATH: &str = "reports/api/v2/";

/// Request parameters shared by every report endpoint.
///
/// `user_agent` and `workspace_id` are required by the service; the rest
/// are filters that are omitted from the query string when unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StandardRequestParameters {
    pub user_agent: String,
    pub workspace_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<String>,
    /// Comma-separated client ids, `"0"` for no client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_ids: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_ids: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_ids: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members_of_group_ids: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub or_members_of_group_ids: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_ids: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_entry_ids: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub without_description: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distinct_rates: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_hours: Option<String>,
}

/// Client for the Reports API.
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
