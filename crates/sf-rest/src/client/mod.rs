//! Object-service REST client.
//!
//! [`RestClient`] dispatches [`Operation`]s through an [`Authenticator`]
//! wrapped around a [`Transport`] and exposes typed methods for the common
//! object calls.

use std::time::Duration;

use tracing::instrument::WithSubscriber;
use tracing::{debug, dispatcher, instrument, warn, Dispatch};

use forcelink_auth::Authenticator;
use forcelink_client::{ClientConfig, HttpClient, Request, RequestMethod, Response, Transport};

use crate::config::{Config, DEFAULT_TOKEN_LIFETIME_SECS};
use crate::context::RequestContext;
use crate::error::{Error, ErrorKind, Result};
use crate::error_response::ErrorResponse;
use crate::operation::{Operation, Outcome};

mod crud;
mod describe;

/// REST client for one org.
///
/// Every call derives a fresh [`RequestContext`] from the stored host and
/// API version, so concurrent calls never share request state. The cached
/// access token is the only state shared between calls.
///
/// # Example
///
/// ```rust,ignore
/// use forcelink_rest::{Config, QueryBuilder, QueryResult, RestClient};
///
/// let client = RestClient::new(Config::from_env()?)?;
///
/// let id = client.create_object("Account", &json!({"Name": "Acme"})).await?;
/// let account: serde_json::Value = client.get_object("Account", &id).await?;
/// client.update_object("Account", &id, &json!({"Name": "Acme Corp"})).await?;
///
/// let page: QueryResult<serde_json::Value> = client
///     .query_objects(QueryBuilder::new().select(["Id", "Name"]).from("Account").limit(10))
///     .await?;
///
/// client.delete_object("Account", &id).await?;
/// ```
pub struct RestClient<T = HttpClient> {
    transport: Authenticator<T>,
    host: String,
    api_version: u32,
    log_dispatch: Option<Dispatch>,
}

impl<T> std::fmt::Debug for RestClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("host", &self.host)
            .field("api_version", &self.api_version)
            .field("transport", &self.transport)
            .finish_non_exhaustive()
    }
}

impl RestClient<HttpClient> {
    /// Create a client over a default [`HttpClient`].
    pub fn new(config: Config) -> Result<Self> {
        Self::builder(config).build()
    }

    /// Start configuring a client.
    pub fn builder(config: Config) -> RestClientBuilder {
        RestClientBuilder {
            config,
            client_config: ClientConfig::default(),
            log_dispatch: None,
        }
    }
}

impl<T: Transport> RestClient<T> {
    /// Instance host.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Effective API version.
    pub fn api_version(&self) -> u32 {
        self.api_version
    }

    /// A context for the stored host and version.
    pub fn context(&self) -> RequestContext {
        RequestContext::new(self.host.as_str(), i64::from(self.api_version))
    }

    /// The authenticating transport, e.g. to drop the cached token.
    pub fn authenticator(&self) -> &Authenticator<T> {
        &self.transport
    }

    /// Run one operation: build its request, send it authenticated, and hand
    /// a 2xx response to [`Operation::handle`]. Any other status becomes
    /// [`ErrorKind::Service`].
    pub async fn execute(&self, operation: Operation) -> Result<Outcome> {
        let dispatch = self.dispatch();
        async move { self.dispatch_operation(operation).await }
            .with_subscriber(dispatch)
            .await
    }

    #[instrument(
        skip(self, operation),
        fields(operation = operation.name(), object = %operation.object_name())
    )]
    async fn dispatch_operation(&self, operation: Operation) -> Result<Outcome> {
        let request = operation.make(&self.context())?;
        let response = self.send(request).await?;
        operation.handle(&response)
    }

    /// GET `url` outside the operation set, expecting 200 and a JSON body.
    async fn get_json<R: serde::de::DeserializeOwned>(&self, url: String) -> Result<R> {
        let dispatch = self.dispatch();
        async move {
            let response = self
                .send(Request::new(RequestMethod::Get, url))
                .await?;
            if response.status() != 200 {
                return Err(Error::new(ErrorKind::UnexpectedStatus {
                    observed: response.status(),
                    expected: 200,
                }));
            }
            Ok(serde_json::from_slice(response.body())?)
        }
        .with_subscriber(dispatch)
        .await
    }

    /// Send through the authenticator; non-2xx responses become service errors.
    async fn send(&self, request: Request) -> Result<Response> {
        let request = request.header("Content-Type", "application/json");
        debug!(method = %request.method(), url = %request.url(), "Sending request");

        let response = self.transport.send(request).await?;
        if response.is_success() {
            return Ok(response);
        }

        let error = ErrorResponse::from_response(&response)?;
        warn!(
            status = error.status,
            errors = error.errors.len(),
            "Service returned an error response"
        );
        Err(Error::new(ErrorKind::Service(error)))
    }

    fn dispatch(&self) -> Dispatch {
        self.log_dispatch
            .clone()
            .unwrap_or_else(|| dispatcher::get_default(Dispatch::clone))
    }
}

/// Builder for [`RestClient`].
#[derive(Debug)]
pub struct RestClientBuilder {
    config: Config,
    client_config: ClientConfig,
    log_dispatch: Option<Dispatch>,
}

impl RestClientBuilder {
    /// HTTP settings for the default transport.
    pub fn client_config(mut self, client_config: ClientConfig) -> Self {
        self.client_config = client_config;
        self
    }

    /// Send this client's log events to `dispatch` instead of the ambient
    /// default subscriber.
    pub fn log_dispatch(mut self, dispatch: impl Into<Dispatch>) -> Self {
        self.log_dispatch = Some(dispatch.into());
        self
    }

    /// Build over a reqwest [`HttpClient`].
    pub fn build(self) -> Result<RestClient<HttpClient>> {
        let http = HttpClient::new(self.client_config.clone())?;
        self.build_with_transport(http)
    }

    /// Build over any transport.
    ///
    /// A non-positive token lifetime falls back to
    /// [`DEFAULT_TOKEN_LIFETIME_SECS`] and an unsupported API version to
    /// [`MAX_API_VERSION`](crate::MAX_API_VERSION); both are logged.
    pub fn build_with_transport<T: Transport>(self, transport: T) -> Result<RestClient<T>> {
        let config = self.config;
        config.credentials().validate()?;

        let dispatch = self
            .log_dispatch
            .clone()
            .unwrap_or_else(|| dispatcher::get_default(Dispatch::clone));
        let (lifetime, context) = dispatcher::with_default(&dispatch, || normalize(&config));

        Ok(RestClient {
            transport: Authenticator::new(config.credentials().clone(), lifetime, transport),
            host: context.host().to_string(),
            api_version: context.api_version(),
            log_dispatch: self.log_dispatch,
        })
    }
}

fn normalize(config: &Config) -> (Duration, RequestContext) {
    let lifetime_secs = if config.expires_in() > 0 {
        config.expires_in()
    } else {
        warn!(
            configured = config.expires_in(),
            default = DEFAULT_TOKEN_LIFETIME_SECS,
            "Token lifetime must be positive, using default"
        );
        DEFAULT_TOKEN_LIFETIME_SECS
    };

    let context = RequestContext::new(config.host(), config.api_version());
    if !RequestContext::is_version_valid(config.api_version()) {
        warn!(
            configured = config.api_version(),
            using = context.api_version(),
            "API version out of range"
        );
    }

    (Duration::from_secs(lifetime_secs.unsigned_abs()), context)
}

/// An operation answered with an outcome of another kind.
fn unexpected_outcome(operation: &str, outcome: &Outcome) -> Error {
    Error::new(ErrorKind::Malformed(format!(
        "{operation} produced an unexpected outcome: {outcome:?}"
    )))
}
