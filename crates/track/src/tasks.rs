use crate::Client;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use toggl_api::Result;
use tokio_util::sync::CancellationToken;

const WORKSPACES_PATH: &str = "workspaces";

/// Properties of a task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_deleted_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracked_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<i64>,
}

impl Client {
    /// Lists the tasks of a project.
    pub async fn get_tasks(
        &self,
        ctx: Option<&CancellationToken>,
        workspace_id: i64,
        project_id: i64,
    ) -> Result<Vec<Task>> {
        self.api()
            .get(
                ctx,
                &format!("{WORKSPACES_PATH}/{workspace_id}/projects/{project_id}/tasks"),
                None::<&()>,
            )
            .await
    }
}
