use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use futures::future::{Ready, ready};

use crate::limiter::{RateLimitExceeded, RateLimiter};

/// The middleware factory. Clones share the same window map, so the limit
/// holds across server workers.
#[derive(Clone)]
pub struct RateLimit {
    limiter: Arc<RateLimiter>,
}

impl RateLimit {
    /// Creates a middleware allowing `limit` requests per client per `period`.
    pub fn new(limit: u32, period: Duration) -> Self {
        Self {
            limiter: Arc::new(RateLimiter::new(limit, period)),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Transform = RateLimitService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitService {
            service,
            limiter: Arc::clone(&self.limiter),
        }))
    }
}

pub struct RateLimitService<S> {
    service: S,
    limiter: Arc<RateLimiter>,
}

pin_project_lite::pin_project! {
    #[project = RateLimitServiceFutProj]
    pub enum RateLimitServiceFut<Fut> {
        Forward { #[pin] fut: Fut },
        Reject { error: Option<RateLimitExceeded> },
    }
}

impl<Fut, B> Future for RateLimitServiceFut<Fut>
where
    Fut: Future<Output = Result<ServiceResponse<B>, actix_web::Error>>,
{
    type Output = Fut::Output;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project() {
            RateLimitServiceFutProj::Forward { fut } => fut.poll(cx),
            RateLimitServiceFutProj::Reject { error } => {
                let error = error.take().expect("future polled after completion");
                Poll::Ready(Err(error.into()))
            }
        }
    }
}

impl<S, B> Service<ServiceRequest> for RateLimitService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = RateLimitServiceFut<S::Future>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let key = req
            .connection_info()
            .realip_remote_addr()
            .unwrap_or("unknown")
            .to_owned();

        match self.limiter.check(&key) {
            Ok(()) => RateLimitServiceFut::Forward {
                fut: self.service.call(req),
            },
            Err(error) => {
                tracing::debug!("rejecting request from `{key}`: {error}");
                RateLimitServiceFut::Reject { error: Some(error) }
            }
        }
    }
}
