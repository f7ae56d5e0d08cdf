use crate::{Client, StandardRequestParameters};
use serde::de::DeserializeOwned;
use serde::Serialize;
use toggl_api::Result;
use tokio_util::sync::CancellationToken;

const DETAILED_PATH: &str = "details";

/// Parameters for the detailed report.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DetailedRequestParameters {
    #[serde(flatten)]
    pub standard: StandardRequestParameters,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl Client {
    /// Returns time entries for the detailed report, decoded into `T`.
    pub async fn get_detailed<T: DeserializeOwned>(
        &self,
        ctx: Option<&CancellationToken>,
        params: &DetailedRequestParameters,
    ) -> Result<T> {
        self.api().get(ctx, DETAILED_PATH, Some(params)).await
    }
}
