//! Create, get, update and delete through the public client.

use forcelink::{ErrorKind, Operation, Outcome};
use serde::{Deserialize, Serialize};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common::{self, AUTHORIZATION, VERSION_PATH};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Account {
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(rename = "Name")]
    name: String,
}

#[tokio::test]
async fn test_create_returns_new_id() {
    let server = MockServer::start().await;
    common::mount_token_endpoint(&server, 1).await;
    Mock::given(method("POST"))
        .and(path(format!("{VERSION_PATH}/sobjects/Account")))
        .and(header("Authorization", AUTHORIZATION))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"Name": "Acme"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "001",
            "errors": [],
            "success": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let id = common::client(&server)
        .create_object("Account", &json!({"Name": "Acme"}))
        .await
        .unwrap();

    assert_eq!(id, "001");
}

#[tokio::test]
async fn test_get_decodes_typed_record() {
    let server = MockServer::start().await;
    common::mount_token_endpoint(&server, 1).await;
    Mock::given(method("GET"))
        .and(path(format!("{VERSION_PATH}/sobjects/Account/001")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "attributes": {"type": "Account"},
            "Id": "001",
            "Name": "Acme"
        })))
        .mount(&server)
        .await;

    let account: Account = common::client(&server)
        .get_object("Account", "001")
        .await
        .unwrap();

    assert_eq!(
        account,
        Account {
            id: Some("001".to_string()),
            name: "Acme".to_string()
        }
    );
}

#[tokio::test]
async fn test_update_and_delete() {
    let server = MockServer::start().await;
    common::mount_token_endpoint(&server, 1).await;
    Mock::given(method("PATCH"))
        .and(path(format!("{VERSION_PATH}/sobjects/Account/001")))
        .and(body_json(json!({"Name": "Acme Corp"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("{VERSION_PATH}/sobjects/Account/001")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client(&server);
    let update = Account {
        id: None,
        name: "Acme Corp".to_string(),
    };
    client.update_object("Account", "001", &update).await.unwrap();
    client.delete_object("Account", "001").await.unwrap();
}

#[tokio::test]
async fn test_success_with_unexpected_code_is_reported() {
    let server = MockServer::start().await;
    common::mount_token_endpoint(&server, 1).await;
    Mock::given(method("DELETE"))
        .and(path(format!("{VERSION_PATH}/sobjects/Account/001")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let err = common::client(&server)
        .delete_object("Account", "001")
        .await
        .unwrap_err();

    assert!(matches!(
        err.kind,
        ErrorKind::UnexpectedStatus {
            observed: 200,
            expected: 204
        }
    ));
}

#[tokio::test]
async fn test_service_errors_are_listed() {
    let server = MockServer::start().await;
    common::mount_token_endpoint(&server, 1).await;
    Mock::given(method("POST"))
        .and(path(format!("{VERSION_PATH}/sobjects/Account")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!([
            {"message": "Required fields are missing: [Name]", "errorCode": "REQUIRED_FIELD_MISSING", "fields": ["Name"]},
            {"message": "Owner is inactive", "errorCode": "INACTIVE_OWNER_OR_USER"}
        ])))
        .mount(&server)
        .await;

    let err = common::client(&server)
        .create_object("Account", &json!({"Rating": "Hot"}))
        .await
        .unwrap_err();

    let response = err.service_response().expect("service error");
    assert_eq!(response.status, 400);
    assert_eq!(response.errors.len(), 2);

    let message = err.to_string();
    assert!(message.contains("REQUIRED_FIELD_MISSING"));
    assert!(message.contains("INACTIVE_OWNER_OR_USER"));
}

#[tokio::test]
async fn test_missing_object_name_sends_nothing() {
    let server = MockServer::start().await;
    common::mount_token_endpoint(&server, 0).await;

    let client = common::client(&server);
    let operations = [
        Operation::create("", &json!({"Name": "Acme"})).unwrap(),
        Operation::update("", "001", &json!({"Name": "Acme"})).unwrap(),
        Operation::delete("", "001"),
        Operation::get("", "001"),
        Operation::query(forcelink::QueryBuilder::new().select(["Id"])),
    ];

    for operation in operations {
        let err = client.execute(operation).await.unwrap_err();
        assert!(matches!(err.kind, ErrorKind::MissingField(ref field) if field == "object name"));
    }

    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_execute_returns_outcome() {
    let server = MockServer::start().await;
    common::mount_token_endpoint(&server, 1).await;
    Mock::given(method("POST"))
        .and(path(format!("{VERSION_PATH}/sobjects/Contact")))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "003",
            "errors": [],
            "success": true
        })))
        .mount(&server)
        .await;

    let outcome = common::client(&server)
        .execute(Operation::create("Contact", &json!({"LastName": "Smith"})).unwrap())
        .await
        .unwrap();

    match outcome {
        Outcome::Created(result) => assert_eq!(result.id, "003"),
        other => panic!("unexpected outcome: {other:?}"),
    }
}
