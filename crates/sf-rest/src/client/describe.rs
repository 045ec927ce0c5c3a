use std::collections::HashMap;

use forcelink_client::Transport;

use crate::error::Result;
use crate::sobject::ApiVersion;

impl<T: Transport> super::RestClient<T> {
    /// List the API versions the instance serves.
    pub async fn versions(&self) -> Result<Vec<ApiVersion>> {
        self.get_json(self.context().base_url()).await
    }

    /// Resource names available at the configured version, mapped to their URLs.
    pub async fn resources(&self) -> Result<HashMap<String, String>> {
        self.get_json(self.context().version_url()).await
    }

    /// Describe every object type visible to the user.
    pub async fn describe_global(&self) -> Result<serde_json::Value> {
        self.get_json(self.context().sobjects_url()).await
    }
}

#[cfg(test)]
mod tests {
    use crate::{Config, ErrorKind, RestClient};
    use forcelink_auth::PasswordCredentials;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client(server: &MockServer) -> RestClient {
        Mock::given(method("POST"))
            .and(path("/services/oauth2/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "tok",
                "token_type": "Bearer"
            })))
            .mount(server)
            .await;

        let creds = PasswordCredentials::new(server.uri(), "client", "secret", "user", "pass");
        RestClient::new(Config::new(creds).with_api_version(36)).unwrap()
    }

    #[tokio::test]
    async fn test_versions() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/services/data"))
            .and(header("Authorization", "Bearer tok"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"label": "Winter '16", "url": "/services/data/v35.0", "version": "35.0"},
                {"label": "Spring '16", "url": "/services/data/v36.0", "version": "36.0"}
            ])))
            .mount(&server)
            .await;

        let versions = client(&server).await.versions().await.unwrap();
        assert_eq!(versions.len(), 2);
        assert_eq!(versions[1].version, "36.0");
    }

    #[tokio::test]
    async fn test_resources() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/services/data/v36.0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "sobjects": "/services/data/v36.0/sobjects",
                "query": "/services/data/v36.0/query"
            })))
            .mount(&server)
            .await;

        let resources = client(&server).await.resources().await.unwrap();
        assert_eq!(resources["query"], "/services/data/v36.0/query");
    }

    #[tokio::test]
    async fn test_describe_global() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/services/data/v36.0/sobjects"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "encoding": "UTF-8",
                "maxBatchSize": 200,
                "sobjects": [{"name": "Account"}]
            })))
            .mount(&server)
            .await;

        let describe = client(&server).await.describe_global().await.unwrap();
        assert_eq!(describe["sobjects"][0]["name"], "Account");
    }

    #[tokio::test]
    async fn test_discovery_non_200_success_is_unexpected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/services/data"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let err = client(&server).await.versions().await.unwrap_err();
        assert!(matches!(
            err.kind,
            ErrorKind::UnexpectedStatus {
                observed: 204,
                expected: 200
            }
        ));
    }
}
