use std::cell::RefCell;
use std::future::Future;
use std::time::Duration;

use tokio::time::{sleep, Instant};

use super::driver::Browse;
use crate::config::POLL_INTERVAL;

/// Outcome of a bounded poll. Timing out is an ordinary result the caller
/// decides to tolerate or escalate, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Waited {
    Satisfied,
    TimedOut,
}

impl Waited {
    pub const fn satisfied(self) -> bool {
        matches!(self, Self::Satisfied)
    }
}

/// Polls `condition` every `interval` until it holds or `timeout` elapses.
/// The condition is probed once before the deadline check, so even a zero
/// timeout gets one probe.
pub async fn poll_until<F, Fut>(timeout: Duration, interval: Duration, mut condition: F) -> Waited
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    let deadline = Instant::now() + timeout;
    loop {
        if condition().await {
            return Waited::Satisfied;
        }
        if Instant::now() >= deadline {
            return Waited::TimedOut;
        }
        sleep(interval).await;
    }
}

/// Waits until the selector matches at least one element and returns the
/// matches; an empty vector means the budget elapsed first.
pub async fn wait_for_matches<B: Browse>(
    browser: &B,
    css: &str,
    timeout: Duration,
) -> Vec<B::Handle> {
    let found = RefCell::new(Vec::new());
    let sink = &found;
    let _ = poll_until(timeout, POLL_INTERVAL, || async move {
        match browser.query_all(css).await {
            Ok(handles) if !handles.is_empty() => {
                *sink.borrow_mut() = handles;
                true
            }
            _ => false,
        }
    })
    .await;
    found.into_inner()
}
