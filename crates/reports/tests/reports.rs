use serde_json::json;
use toggl_reports::{
    ApiError, ApiErrorBody, Client, DetailedRequestParameters, StandardRequestParameters,
    SummaryRequestParameters, WeeklyRequestParameters,
};
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> Client {
    Client::with_base_url("reports-token", server.uri()).unwrap()
}

fn standard_params() -> StandardRequestParameters {
    StandardRequestParameters {
        user_agent: "toggl-rs-test".to_string(),
        workspace_id: "777".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn get_summary_handles_200_ok() {
    let body = json!({
        "total_grand": 36004000,
        "total_billable": 14004000,
        "data": [
            {
                "id": 123,
                "title": {"project": "Important project", "color": "#06a893"},
                "time": 14004000,
                "items": [
                    {
                        "title": {"time_entry": "Build the api"},
                        "time": 14004000
                    }
                ]
            }
        ]
    });

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reports/api/v2/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let ctx = CancellationToken::new();
    let report: serde_json::Value = client(&server)
        .get_summary(
            Some(&ctx),
            &SummaryRequestParameters {
                standard: standard_params(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(report, body);
}

#[tokio::test]
async fn get_summary_handles_401_unauthorized() {
    let error_body = json!({
        "error": {
            "message": "api token missing",
            "tip": "You can find your API Token in your profile",
            "code": 105
        }
    });

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reports/api/v2/summary"))
        .respond_with(ResponseTemplate::new(401).set_body_json(error_body.clone()))
        .mount(&server)
        .await;

    let ctx = CancellationToken::new();
    let err = client(&server)
        .get_summary::<serde_json::Value>(
            Some(&ctx),
            &SummaryRequestParameters {
                standard: standard_params(),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(err.is_api_error());
    let expected = ApiErrorBody::parse(401, error_body.to_string().as_bytes());
    assert_eq!(err.api_body(), Some(&expected));
    assert_eq!(err.status_code(), Some(401));
}

#[tokio::test]
async fn get_summary_handles_429_too_many_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reports/api/v2/summary"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let ctx = CancellationToken::new();
    let err = client(&server)
        .get_summary::<serde_json::Value>(
            Some(&ctx),
            &SummaryRequestParameters {
                standard: standard_params(),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(err.is_api_error());
    assert_eq!(err.status_code(), Some(429));
}

#[tokio::test]
async fn get_summary_without_context_returns_error() {
    let server = MockServer::start().await;
    let err = client(&server)
        .get_summary::<serde_json::Value>(
            None,
            &SummaryRequestParameters {
                standard: standard_params(),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::MissingContext));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn get_weekly_encodes_request_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reports/api/v2/weekly"))
        .and(query_param("user_agent", "toggl-rs-test"))
        .and(query_param("workspace_id", "777"))
        .and(query_param("grouping", "users"))
        .and(query_param_is_missing("calculate"))
        .and(query_param_is_missing("since"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = CancellationToken::new();
    let _: serde_json::Value = client(&server)
        .get_weekly(
            Some(&ctx),
            &WeeklyRequestParameters {
                standard: standard_params(),
                grouping: Some("users".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn get_weekly_handles_200_ok() {
    let body = json!({
        "week_totals": [null, 3600000, null, null, null, null, null, 3600000],
        "data": [
            {
                "title": {"project": "Important project", "color": "#06a893"},
                "totals": [null, 3600000, null, null, null, null, null, 3600000],
                "details": [
                    {
                        "title": {"user": "John Swift"},
                        "totals": [null, 3600000, null, null, null, null, null, 3600000]
                    }
                ]
            }
        ]
    });

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reports/api/v2/weekly"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let ctx = CancellationToken::new();
    let report: serde_json::Value = client(&server)
        .get_weekly(
            Some(&ctx),
            &WeeklyRequestParameters {
                standard: standard_params(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(report, body);
}

#[tokio::test]
async fn get_detailed_encodes_the_page_parameter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reports/api/v2/details"))
        .and(query_param("user_agent", "toggl-rs-test"))
        .and(query_param("workspace_id", "777"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": 0,
            "per_page": 50,
            "data": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = CancellationToken::new();
    let report: serde_json::Value = client(&server)
        .get_detailed(
            Some(&ctx),
            &DetailedRequestParameters {
                standard: standard_params(),
                page: Some(2),
            },
        )
        .await
        .unwrap();

    assert_eq!(report["per_page"], 50);
}
