use tracing::{Instrument, Level};

use super::Middleware;
use crate::{Endpoint, IntoResponse, Request, Response};

/// A middleware for tracing requests and responses.
///
/// Every request runs inside an `INFO` span carrying its method and path, the
/// response status is recorded when the inner endpoint returns.
#[derive(Default)]
pub struct Tracing;

impl<E: Endpoint> Middleware<E> for Tracing {
    type Output = TracingEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        TracingEndpoint { inner: ep }
    }
}

/// Endpoint for the [`Tracing`] middleware.
pub struct TracingEndpoint<E> {
    inner: E,
}

#[async_trait::async_trait]
impl<E: Endpoint> Endpoint for TracingEndpoint<E> {
    type Output = Response;

    async fn call(&self, req: Request) -> Self::Output {
        let span = tracing::span!(
            Level::INFO,
            "request",
            method = %req.method(),
            path = %req.uri().path(),
        );

        async move {
            let resp = self.inner.call(req).await.into_response();
            if resp.status().is_success() {
                tracing::info!(status = %resp.status(), "send response");
            } else {
                tracing::warn!(status = %resp.status(), "send response");
            }
            resp
        }
        .instrument(span)
        .await
    }
}
