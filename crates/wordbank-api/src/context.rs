//! Per-request correlation context.
//!
//! [`assign_request_id`](crate::middleware::assign_request_id) stores a
//! fresh [`RequestId`] in the request extensions. Handlers pull it out with
//! the [`RequestContext`] extractor and hand the context to every
//! [`WordService`](crate::WordService) call, so service logs can be joined
//! with the access log line of the same request.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

/// Correlation id for one inbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(pub Uuid);

impl RequestId {
    /// Generate a new random correlation id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for RequestId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Request-scoped values visible to the service layer.
///
/// Extraction never fails: a request that bypassed the correlation stage
/// simply carries no id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestContext {
    request_id: Option<RequestId>,
}

impl RequestContext {
    /// Context carrying the given correlation id.
    pub const fn new(request_id: RequestId) -> Self {
        Self {
            request_id: Some(request_id),
        }
    }

    /// Context with no correlation id.
    pub const fn detached() -> Self {
        Self { request_id: None }
    }

    /// The correlation id, if the request was assigned one.
    pub const fn request_id(&self) -> Option<RequestId> {
        self.request_id
    }
}

impl<S: Send + Sync> FromRequestParts<S> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self {
            request_id: parts.extensions.get::<RequestId>().copied(),
        })
    }
}
