use crate::{Client, StandardRequestParameters};
use serde::de::DeserializeOwned;
use serde::Serialize;
use toggl_api::Result;
use tokio_util::sync::CancellationToken;

const SUMMARY_PATH: &str = "summary";

/// Parameters for the summary report.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SummaryRequestParameters {
    #[serde(flatten)]
    pub standard: StandardRequestParameters,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouping: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subgrouping: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subgrouping_ids: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouped_time_entries: Option<bool>,
}

impl Client {
    /// Returns the summary report, decoded into `T`.
    pub async fn get_summary<T: DeserializeOwned>(
        &self,
        ctx: Option<&CancellationToken>,
        params: &SummaryRequestParameters,
    ) -> Result<T> {
        self.api().get(ctx, SUMMARY_PATH, Some(params)).await
    }
}
