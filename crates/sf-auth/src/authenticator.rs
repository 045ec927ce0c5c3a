//! Authenticating transport.
//!
//! [`Authenticator`] wraps any [`Transport`] and decorates every request with
//! an `Authorization` header, exchanging credentials for a fresh token when
//! none is cached or the cached one has expired. Expiry is evaluated lazily,
//! when a request needs a token; there is no background refresh.

use std::future::Future;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use forcelink_client::{Request, Response, Transport};

use crate::credentials::PasswordCredentials;
use crate::error::Result;
use crate::oauth::PasswordGrant;
use crate::token::AccessToken;

/// A [`Transport`] that authenticates requests before forwarding them to the
/// inner transport.
///
/// The token exchange itself goes through the inner transport too. The
/// cached token sits behind an async mutex held for the whole
/// check-and-exchange sequence, so concurrent callers that find the token
/// missing or expired wait for a single exchange instead of racing.
pub struct Authenticator<T> {
    inner: T,
    grant: PasswordGrant,
    lifetime: chrono::Duration,
    token: Mutex<Option<AccessToken>>,
}

impl<T> std::fmt::Debug for Authenticator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("grant", &self.grant)
            .field("lifetime", &self.lifetime)
            .finish_non_exhaustive()
    }
}

impl<T: Transport> Authenticator<T> {
    /// Create an authenticator that treats every issued token as valid for
    /// `lifetime`.
    pub fn new(credentials: PasswordCredentials, lifetime: Duration, inner: T) -> Self {
        Self {
            inner,
            grant: PasswordGrant::new(credentials),
            lifetime: chrono::Duration::from_std(lifetime).unwrap_or(chrono::Duration::MAX),
            token: Mutex::new(None),
        }
    }

    /// The wrapped transport.
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Configured token lifetime.
    pub fn lifetime(&self) -> chrono::Duration {
        self.lifetime
    }

    /// Forget the cached token; the next request exchanges credentials again.
    pub async fn invalidate(&self) {
        self.token.lock().await.take();
    }

    /// Returns true if a token is cached and not yet expired.
    pub async fn has_valid_token(&self) -> bool {
        self.token
            .lock()
            .await
            .as_ref()
            .is_some_and(|token| !token.is_expired())
    }

    /// Return the `Authorization` header value, exchanging credentials first
    /// when needed.
    #[instrument(skip(self))]
    pub async fn authorization(&self) -> Result<String> {
        let mut cached = self.token.lock().await;

        match cached.as_ref() {
            Some(token) if !token.is_expired() => return Ok(token.authorization()),
            Some(token) => debug!(expires_at = %token.expires_at(), "Access token expired"),
            None => debug!("No access token cached"),
        }

        let response = self.grant.request_token(&self.inner).await?;
        let token = AccessToken::from_response(response, Utc::now(), self.lifetime);
        info!(expires_at = %token.expires_at(), "Obtained access token");

        let header = token.authorization();
        *cached = Some(token);
        Ok(header)
    }
}

impl<T: Transport> Transport for Authenticator<T> {
    fn send(
        &self,
        request: Request,
    ) -> impl Future<Output = forcelink_client::Result<Response>> + Send {
        async move {
            let authorization = self.authorization().await?;
            self.inner
                .send(request.header("Authorization", authorization))
                .await
        }
    }
}
