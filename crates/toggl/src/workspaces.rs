use crate::{Client, DataEnvelope, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use toggl_api::Result;
use tokio_util::sync::CancellationToken;

const WORKSPACES_PATH: &str = "workspaces";

/// Workspace properties. Every field is optional so partial updates only
/// send what the caller actually set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_hourly_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_admins_may_create_projects: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_admins_see_billable_rates: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_admins_see_team_dashboard: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects_billable_by_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounding: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounding_minutes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ical_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ical_url: Option<String>,
}

#[derive(Serialize)]
struct WorkspaceRequest<'a> {
    workspace: &'a Workspace,
}

impl Client {
    /// Lists all the workspaces the token owner belongs to.
    pub async fn get_workspaces(
        &self,
        ctx: Option<&CancellationToken>,
    ) -> Result<Vec<Workspace>> {
        self.api().get(ctx, WORKSPACES_PATH, None::<&()>).await
    }

    pub async fn get_workspace(
        &self,
        ctx: Option<&CancellationToken>,
        id: i64,
    ) -> Result<Workspace> {
        let response: DataEnvelope<Workspace> = self
            .api()
            .get(ctx, &format!("{WORKSPACES_PATH}/{id}"), None::<&()>)
            .await?;
        Ok(response.data)
    }

    pub async fn get_workspace_users(
        &self,
        ctx: Option<&CancellationToken>,
        id: i64,
    ) -> Result<Vec<User>> {
        self.api()
            .get(ctx, &format!("{WORKSPACES_PATH}/{id}/users"), None::<&()>)
            .await
    }

    /// Updates the workspace. Only fields set on `workspace` are sent, so
    /// server-side values of unset fields are left untouched.
    pub async fn update_workspace(
        &self,
        ctx: Option<&CancellationToken>,
        id: i64,
        workspace: &Workspace,
    ) -> Result<Workspace> {
        let response: DataEnvelope<Workspace> = self
            .api()
            .put(
                ctx,
                &format!("{WORKSPACES_PATH}/{id}"),
                &WorkspaceRequest { workspace },
            )
            .await?;
        Ok(response.data)
    }
}
