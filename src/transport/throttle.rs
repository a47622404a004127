// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token-bucket request throttling.
//!
//! [`Throttle`] is a shared token bucket: every request takes one token and
//! waits when the bucket is empty. Clones share the same bucket, so one
//! throttle can pace several clients hitting the same rate-limited API.
//!
//! [`ThrottleLayer`] wraps the same bucket as a Tower layer for Alloy RPC
//! clients. Throttling only delays requests; it never retries them.

use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
    time::{Duration, Instant},
};

use tokio::sync::Mutex;
use tower::Layer;
use tracing::trace;

/// A shared token bucket.
///
/// # Example
///
/// ```rust,ignore
/// use txscan::transport::Throttle;
///
/// let throttle = Throttle::per_second(5);
/// throttle.acquire().await;
/// // send request
/// ```
#[derive(Clone, Debug)]
pub struct Throttle {
    bucket: Arc<Mutex<Bucket>>,
}

impl Throttle {
    /// Allows `requests` per `period`, with bursts up to `requests`.
    pub fn new(requests: u32, period: Duration) -> Self {
        Self {
            bucket: Arc::new(Mutex::new(Bucket::new(requests, period))),
        }
    }

    pub fn per_second(requests: u32) -> Self {
        Self::new(requests, Duration::from_secs(1))
    }

    /// Waits until a token is available and takes it.
    pub async fn acquire(&self) {
        loop {
            let wait = self.bucket.lock().await.try_take();
            match wait {
                None => return,
                Some(duration) => {
                    trace!(wait_ms = duration.as_millis() as u64, "Throttled request");
                    tokio::time::sleep(duration).await;
                }
            }
        }
    }

    /// A Tower layer drawing from this throttle's bucket.
    pub fn layer(&self) -> ThrottleLayer {
        ThrottleLayer {
            throttle: self.clone(),
        }
    }
}

#[derive(Debug)]
struct Bucket {
    capacity: u32,
    tokens: f64,
    /// Tokens per nanosecond
    refill_rate: f64,
    last_refill: Instant,
}

impl Bucket {
    fn new(requests: u32, period: Duration) -> Self {
        let requests = requests.max(1);
        let period_nanos = period.as_nanos().max(1) as f64;
        Self {
            capacity: requests,
            tokens: requests as f64,
            refill_rate: requests as f64 / period_nanos,
            last_refill: Instant::now(),
        }
    }

    /// Takes a token, or returns how long until one is available.
    fn try_take(&mut self) -> Option<Duration> {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_refill).as_nanos() as f64;
        self.tokens = (self.tokens + elapsed * self.refill_rate).min(self.capacity as f64);
        self.last_refill = now;

        if self.tokens >= 1.0 {
            self.tokens -= 1.0;
            None
        } else {
            let missing = 1.0 - self.tokens;
            Some(Duration::from_nanos((missing / self.refill_rate).ceil() as u64))
        }
    }
}

/// Tower layer applying a [`Throttle`] to every request.
///
/// ```rust,ignore
/// use txscan::transport::Throttle;
/// use alloy_rpc_client::ClientBuilder;
///
/// let client = ClientBuilder::default()
///     .layer(Throttle::per_second(10).layer())
///     .http(rpc_url);
/// ```
#[derive(Clone, Debug)]
pub struct ThrottleLayer {
    throttle: Throttle,
}

impl ThrottleLayer {
    pub fn per_second(requests: u32) -> Self {
        Throttle::per_second(requests).layer()
    }
}

impl<S> Layer<S> for ThrottleLayer {
    type Service = ThrottleService<S>;

    fn layer(&self, service: S) -> Self::Service {
        ThrottleService {
            service,
            throttle: self.throttle.clone(),
        }
    }
}

/// Tower service that waits for a throttle token before each call.
#[derive(Clone, Debug)]
pub struct ThrottleService<S> {
    service: S,
    throttle: Throttle,
}

impl<S, Request> tower::Service<Request> for ThrottleService<S>
where
    S: tower::Service<Request> + Clone + Send + 'static,
    S::Future: Send,
    Request: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&mut self, request: Request) -> Self::Future {
        let throttle = self.throttle.clone();
        let mut service = self.service.clone();

        Box::pin(async move {
            throttle.acquire().await;
            service.call(request).await
        })
    }
}
