use crate::Client;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use toggl_api::Result;
use tokio_util::sync::CancellationToken;

const ME_PATH: &str = "me";

/// Properties of the authenticated user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Me {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fullname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_workspace_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beginning_of_week: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openid_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openid_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intercom_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_password: Option<bool>,
}

impl Client {
    /// Returns details for the current user.
    pub async fn get_me(&self, ctx: Option<&CancellationToken>) -> Result<Me> {
        self.api().get(ctx, ME_PATH, None::<&()>).await
    }
}
