//! Token lifecycle as seen through the client.

use std::time::Duration;

use forcelink::ErrorKind;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common::{self, AUTHORIZATION, VERSION_PATH};

async fn mount_get_account(server: &MockServer, calls: u64) {
    Mock::given(method("GET"))
        .and(path(format!("{VERSION_PATH}/sobjects/Account/001")))
        .and(header("Authorization", AUTHORIZATION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Id": "001"})))
        .expect(calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_token_is_reused_while_valid() {
    let server = MockServer::start().await;
    common::mount_token_endpoint(&server, 1).await;
    mount_get_account(&server, 3).await;

    let client = common::client(&server);
    for _ in 0..3 {
        let _: serde_json::Value = client.get_object("Account", "001").await.unwrap();
    }
}

#[tokio::test]
async fn test_expired_token_triggers_second_exchange() {
    let server = MockServer::start().await;
    common::mount_token_endpoint(&server, 2).await;
    mount_get_account(&server, 2).await;

    let client = forcelink::RestClient::new(common::config(&server).with_expires_in(1)).unwrap();

    let _: serde_json::Value = client.get_object("Account", "001").await.unwrap();
    tokio::time::sleep(Duration::from_millis(1100)).await;
    let _: serde_json::Value = client.get_object("Account", "001").await.unwrap();
}

#[tokio::test]
async fn test_rejected_credentials_abort_before_target() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/services/oauth2/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "authentication failure"
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_get_account(&server, 0).await;

    let err = common::client(&server)
        .get_object::<serde_json::Value>("Account", "001")
        .await
        .unwrap_err();

    assert!(matches!(err.kind, ErrorKind::AuthenticationFailed(_)));
    assert!(err.to_string().contains("invalid_grant"));
}

#[tokio::test]
async fn test_invalidate_forces_reauthentication() {
    let server = MockServer::start().await;
    common::mount_token_endpoint(&server, 2).await;
    mount_get_account(&server, 2).await;

    let client = common::client(&server);
    let _: serde_json::Value = client.get_object("Account", "001").await.unwrap();
    assert!(client.authenticator().has_valid_token().await);

    client.authenticator().invalidate().await;
    let _: serde_json::Value = client.get_object("Account", "001").await.unwrap();
}
