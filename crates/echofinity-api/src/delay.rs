//! Simulated processing latency.

use std::time::Duration;

use futures_util::future::BoxFuture;

/// Suspends the current request for a while. The wait cannot be cancelled
/// by the caller.
pub trait Delay: Send + Sync {
    fn sleep(&self, duration: Duration) -> BoxFuture<'static, ()>;
}

/// Cooperative sleep on the Tokio timer. Other requests keep being served.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

impl Delay for TokioDelay {
    fn sleep(&self, duration: Duration) -> BoxFuture<'static, ()> {
        Box::pin(tokio::time::sleep(duration))
    }
}

/// Returns immediately regardless of the requested duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Delay for NoDelay {
    fn sleep(&self, _duration: Duration) -> BoxFuture<'static, ()> {
        Box::pin(std::future::ready(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_tokio_delay_waits_full_duration() {
        let start = tokio::time::Instant::now();
        TokioDelay.sleep(Duration::from_secs(2)).await;
        assert!(start.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_delay_returns_immediately() {
        let start = tokio::time::Instant::now();
        NoDelay.sleep(Duration::from_secs(2)).await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
