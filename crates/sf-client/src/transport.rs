//! The transport capability consumed by the upper layers.

use std::future::Future;
use std::sync::Arc;

use crate::error::Result;
use crate::request::Request;
use crate::response::Response;

/// Something that can deliver a [`Request`] and hand back the [`Response`].
///
/// Implementations must return every received response, whatever its status
/// code; interpreting non-2xx statuses is the caller's job. Timeouts and
/// cancellation are the implementation's responsibility.
pub trait Transport: Send + Sync {
    /// Send the request and buffer the full response.
    fn send(&self, request: Request) -> impl Future<Output = Result<Response>> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn send(&self, request: Request) -> impl Future<Output = Result<Response>> + Send {
        self.as_ref().send(request)
    }
}
