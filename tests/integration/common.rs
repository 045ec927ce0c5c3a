use forcelink::{Config, PasswordCredentials, RestClient};
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_VERSION: i64 = 36;

/// Base path of the versioned REST API on the mock server.
pub const VERSION_PATH: &str = "/services/data/v36.0";

pub fn config(server: &MockServer) -> Config {
    Config::new(PasswordCredentials::new(
        server.uri(),
        "3MVG9-client-id",
        "client-secret",
        "integration@example.com",
        "password123",
    ))
    .with_api_version(API_VERSION)
}

pub fn client(server: &MockServer) -> RestClient {
    RestClient::new(config(server)).expect("client should build")
}

/// Mount a token endpoint that expects `calls` password-grant exchanges.
pub async fn mount_token_endpoint(server: &MockServer, calls: u64) {
    Mock::given(method("POST"))
        .and(path("/services/oauth2/token"))
        .and(body_string_contains("grant_type=password"))
        .and(body_string_contains("client_id=3MVG9-client-id"))
        .and(body_string_contains("client_secret=client-secret"))
        .and(body_string_contains("username=integration%40example.com"))
        .and(body_string_contains("password=password123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "00Dxx0000001gPL!token",
            "token_type": "Bearer",
            "signature": "c2lnbmF0dXJl"
        })))
        .expect(calls)
        .mount(server)
        .await;
}

pub const AUTHORIZATION: &str = "Bearer 00Dxx0000001gPL!token";
