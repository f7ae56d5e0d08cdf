use crate::{Client, StandardRequestParameters};
use serde::de::DeserializeOwned;
use serde::Serialize;
use toggl_api::Result;
use tokio_util::sync::CancellationToken;

const WEEKLY_PATH: &str = "weekly";

/// Parameters for the weekly report.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeeklyRequestParameters {
    #[serde(flatten)]
    pub standard: StandardRequestParameters,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouping: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculate: Option<String>,
}

impl Client {
    /// Returns the weekly report, decoded into `T`.
    pub async fn get_weekly<T: DeserializeOwned>(
        &self,
        ctx: Option<&CancellationToken>,
        params: &WeeklyRequestParameters,
    ) -> Result<T> {
        self.api().get(ctx, WEEKLY_PATH, Some(params)).await
    }
}
