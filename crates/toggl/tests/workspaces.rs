use serde_json::json;
use toggl_v8::{ApiError, Client, Workspace};
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{basic_auth, body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> Client {
    Client::with_base_url("v8-token", server.uri()).unwrap()
}

#[tokio::test]
async fn get_workspaces_decodes_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v8/workspaces"))
        .and(basic_auth("v8-token", "api_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 3134975, "name": "John's personal ws", "premium": true},
            {"id": 777, "name": "Acme", "premium": false}
        ])))
        .mount(&server)
        .await;

    let ctx = CancellationToken::new();
    let workspaces = client(&server).get_workspaces(Some(&ctx)).await.unwrap();

    assert_eq!(workspaces.len(), 2);
    assert_eq!(
        workspaces[0],
        Workspace {
            id: Some(3134975),
            name: Some("John's personal ws".to_string()),
            premium: Some(true),
            ..Default::default()
        }
    );
}

#[tokio::test]
async fn get_workspace_unwraps_data_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v8/workspaces/3134975"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": 3134975, "name": "John's personal ws"}
        })))
        .mount(&server)
        .await;

    let ctx = CancellationToken::new();
    let workspace = client(&server)
        .get_workspace(Some(&ctx), 3134975)
        .await
        .unwrap();

    assert_eq!(workspace.id, Some(3134975));
    assert_eq!(workspace.name.as_deref(), Some("John's personal ws"));
}

#[tokio::test]
async fn get_workspace_users_decodes_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v8/workspaces/777/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "email": "john@swift.com", "fullname": "John Swift"}
        ])))
        .mount(&server)
        .await;

    let ctx = CancellationToken::new();
    let users = client(&server)
        .get_workspace_users(Some(&ctx), 777)
        .await
        .unwrap();

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email.as_deref(), Some("john@swift.com"));
}

#[tokio::test]
async fn update_workspace_sends_only_set_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v8/workspaces/777"))
        .and(body_json(json!({"workspace": {"name": "renamed"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": 777, "name": "renamed"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let update = Workspace {
        name: Some("renamed".to_string()),
        ..Default::default()
    };

    let ctx = CancellationToken::new();
    let workspace = client(&server)
        .update_workspace(Some(&ctx), 777, &update)
        .await
        .unwrap();

    assert_eq!(workspace.name.as_deref(), Some("renamed"));
}

#[tokio::test]
async fn forbidden_maps_to_authentication_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v8/workspaces"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let ctx = CancellationToken::new();
    let err = client(&server).get_workspaces(Some(&ctx)).await.unwrap_err();

    assert!(matches!(err, ApiError::AuthenticationFailed(_)));
}

#[tokio::test]
async fn missing_context_is_rejected_for_every_endpoint() {
    let server = MockServer::start().await;
    let client = client(&server);

    assert!(matches!(
        client.get_workspaces(None).await.unwrap_err(),
        ApiError::MissingContext
    ));
    assert!(matches!(
        client.get_workspace(None, 1).await.unwrap_err(),
        ApiError::MissingContext
    ));
    assert!(matches!(
        client.get_workspace_users(None, 1).await.unwrap_err(),
        ApiError::MissingContext
    ));
    assert!(matches!(
        client
            .update_workspace(None, 1, &Workspace::default())
            .await
            .unwrap_err(),
        ApiError::MissingContext
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}
