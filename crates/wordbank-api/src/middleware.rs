//! Request pipeline stages.
//!
//! Both stages are plain `axum::middleware::from_fn` functions. The router
//! applies them outermost first:
//!
//! 1. [`assign_request_id`] -- fresh correlation id per request
//! 2. [`access_log`] -- one structured log line per completed request
//!
//! so the access log runs inside the correlation stage and sees the id.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Request};
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use tokio::time::Instant;

use crate::context::RequestId;

/// Log target for access log lines.
pub const ACCESS_LOG_TARGET: &str = "wordbank::access";

/// Response header echoing the correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Assign a new [`RequestId`] to the request.
///
/// Always generates a fresh id; an inbound `x-request-id` header is never
/// trusted. The id is stored in the request extensions for
/// [`RequestContext`](crate::RequestContext) and echoed on the response.
pub async fn assign_request_id(mut req: Request, next: Next) -> Response {
    let id = RequestId::new();
    req.extensions_mut().insert(id);

    let mut response = next.run(req).await;

    if let Ok(value) = HeaderValue::from_str(&id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

/// Emit one access log line after the inner handler completes.
///
/// The line carries method, path, remote address, final status and
/// elapsed time. It fires for every request, whatever the handler
/// returned. The remote address is `unknown` when the server was not
/// started with connect info.
pub async fn access_log(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let remote = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map_or_else(|| String::from("unknown"), |ConnectInfo(addr)| addr.to_string());
    let request_id = req.extensions().get::<RequestId>().copied();

    let response = next.run(req).await;

    tracing::info!(
        target: ACCESS_LOG_TARGET,
        request_id = request_id.map(tracing::field::display),
        %method,
        path,
        remote,
        status_code = response.status().as_u16(),
        time_elapsed = ?start.elapsed(),
        "Request served"
    );

    response
}
