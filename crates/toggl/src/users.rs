use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Properties of a workspace user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_wid: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fullname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeofday_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_start_and_stop_time: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beginning_of_week: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar_piechart: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_product_emails: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_weekly_report: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_timer_notifications: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at: Option<DateTime<Utc>>,
}
