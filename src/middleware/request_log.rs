//! Logs every incoming request before it is routed.
use std::task::{Context, Poll};

use chrono::{SecondsFormat, Utc};
use http::Request as HttpRequest;
use tower::{Layer, Service};

#[derive(Debug, Clone, Default)]
pub struct RequestLogLayer;

impl RequestLogLayer {
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for RequestLogLayer {
    type Service = RequestLog<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestLog { inner }
    }
}

#[derive(Debug, Clone)]
pub struct RequestLog<S> {
    inner: S,
}

impl<S, ReqBody> Service<HttpRequest<ReqBody>> for RequestLog<S>
where
    S: Service<HttpRequest<ReqBody>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: HttpRequest<ReqBody>) -> Self::Future {
        tracing::info!(
            method = %req.method(),
            path = %req.uri().path(),
            at = %Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            "Request received"
        );
        self.inner.call(req)
    }
}
