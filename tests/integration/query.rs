//! Queries built with `QueryBuilder`, end to end.

use forcelink::{QueryBuilder, QueryResult};
use serde::Deserialize;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common::{self, VERSION_PATH};

#[derive(Debug, Deserialize)]
struct Contact {
    #[serde(rename = "Id")]
    id: String,
    #[serde(rename = "LastName")]
    last_name: String,
}

#[tokio::test]
async fn test_query_sends_assembled_statement() {
    let server = MockServer::start().await;
    common::mount_token_endpoint(&server, 1).await;
    Mock::given(method("GET"))
        .and(path(format!("{VERSION_PATH}/query")))
        .and(query_param(
            "q",
            "SELECT Id,LastName FROM Contact WHERE LastName='Smith' ORDER BY CreatedDate DESC NULL LAST LIMIT 2",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalSize": 2,
            "done": true,
            "records": [
                {"attributes": {"type": "Contact"}, "Id": "003A", "LastName": "Smith"},
                {"attributes": {"type": "Contact"}, "Id": "003B", "LastName": "Smith"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = QueryBuilder::new()
        .select(["Id", "LastName"])
        .from("Contact")
        .where_eq("LastName", "Smith")
        .order_desc("CreatedDate")
        .order_null_last()
        .limit(2);

    let result: QueryResult<Contact> = common::client(&server).query_objects(query).await.unwrap();

    assert_eq!(result.total_size, 2);
    assert!(result.done);
    assert_eq!(result.records[1].id, "003B");
    assert_eq!(result.records[0].last_name, "Smith");
}

#[tokio::test]
async fn test_query_without_select_fields_is_rejected() {
    let server = MockServer::start().await;
    common::mount_token_endpoint(&server, 0).await;

    let err = common::client(&server)
        .query_objects::<serde_json::Value>(QueryBuilder::new().from("Contact"))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("select fields"));
}
