//! Client for the webhooks API, which lives on its own host and version
//! path (`webhooks/api/v1/`) separate from the v9 API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use toggl_api::{ApiClient, Result};
use tokio_util::sync::CancellationToken;

pub const DEFAULT_BASE_URL: &str = "https://track.toggl.com/";

const API_VERSION_PATH: &str = "webhooks/api/v1/";
const SUBSCRIPTIONS_PATH: &str = "subscriptions";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
}

/// A registered webhook subscription.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_callback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_pending_events: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_filters: Option<Vec<EventFilter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validated_at: Option<DateTime<Utc>>,
}

/// Request body for [`Client::create_subscription`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateSubscriptionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_callback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_filters: Option<Vec<EventFilter>>,
}

#[derive(Serialize)]
struct SetEnabledRequest {
    enabled: bool,
}

/// Client for the webhooks API generation.
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

    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.api = self.api.with_http_client(http);
        self
    }

    /// Lists the workspace's subscriptions.
    pub async fn get_subscriptions(
        &self,
        ctx: Option<&CancellationToken>,
        workspace_id: i64,
    ) -> Result<Vec<Subscription>> {
        self.api
            .get(
                ctx,
                &format!("{SUBSCRIPTIONS_PATH}/{workspace_id}"),
                None::<&()>,
            )
            .await
    }

    pub async fn create_subscription(
        &self,
        ctx: Option<&CancellationToken>,
        workspace_id: i64,
        request: &CreateSubscriptionRequest,
    ) -> Result<Subscription> {
        self.api
            .post(ctx, &format!("{SUBSCRIPTIONS_PATH}/{workspace_id}"), request)
            .await
    }

    /// Enables or disables an existing subscription.
    pub async fn set_enabled(
        &self,
        ctx: Option<&CancellationToken>,
        workspace_id: i64,
        subscription_id: i64,
        enabled: bool,
    ) -> Result<Subscription> {
        self.api
            .patch(
                ctx,
                &format!("{SUBSCRIPTIONS_PATH}/{workspace_id}/{subscription_id}"),
                &SetEnabledRequest { enabled },
            )
            .await
    }

    /// Deletes a subscription, returning its final state.
    pub async fn delete_subscription(
        &self,
        ctx: Option<&CancellationToken>,
        workspace_id: i64,
        subscription_id: i64,
    ) -> Result<Subscription> {
        self.api
            .delete(
                ctx,
                &format!("{SUBSCRIPTIONS_PATH}/{workspace_id}/{subscription_id}"),
            )
            .await
    }
}
