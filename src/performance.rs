use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;

use tracing::debug;

use crate::env::ENV_CONFIG;

/// A future that reports how long its inner future took, when LOG_PERF is set.
#[pin_project]
pub struct Timed<Fut>
where
    Fut: Future,
{
    #[pin]
    inner: Fut,
    operation: &'static str,
    start: Option<Instant>,
}

impl<Fut> Future for Timed<Fut>
where
    Fut: Future,
{
    type Output = Fut::Output;

    fn poll(self: Pin<&mut Self>, cx: &mut Context) -> Poll<Self::Output> {
        let this = self.project();
        let start = this.start.get_or_insert_with(Instant::now);

        match this.inner.poll(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(v) => {
                if ENV_CONFIG.log_perf {
                    debug!(operation = *this.operation, elapsed = ?start.elapsed(), "timed");
                }
                Poll::Ready(v)
            }
        }
    }
}

pub trait TimedExt: Sized + Future {
    fn timed(self, operation: &'static str) -> Timed<Self> {
        Timed {
            inner: self,
            operation,
            start: None,
        }
    }
}

impl<F: Future> TimedExt for F {}
