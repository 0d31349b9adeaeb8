//! Cancellation: per-call abort tokens and one-shot timeout timers.
//!
//! Each download call owns its own `CancelToken`; nothing is process-global, so
//! an enclosing caller can share the token with its own deadline without
//! interfering with other in-flight calls.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// One-shot cancellation trigger. Cloning shares the underlying flag; once
/// cancelled it stays cancelled for every clone.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trip the token. In-flight transfers watching it will abort.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// One-shot timer that cancels a token after a fixed duration.
///
/// Dropping the guard disarms the timer, so holding it across a download call
/// guarantees no stale cancellation fires after the call has resolved. A
/// duration of zero fires at the next scheduler tick (cancel almost
/// immediately); there is no "disable" sentinel.
pub struct TimeoutGuard {
    timer: tokio::task::JoinHandle<()>,
}

impl TimeoutGuard {
    /// Arm a timer that trips `token` after `after`.
    pub fn arm(token: &CancelToken, after: Duration) -> Self {
        let token = token.clone();
        let timer = tokio::spawn(async move {
            tokio::time::sleep(after).await;
            tracing::debug!(timeout_ms = after.as_millis() as u64, "timeout fired, cancelling");
            token.cancel();
        });
        TimeoutGuard { timer }
    }

    /// Explicit disarm; equivalent to dropping the guard.
    pub fn disarm(self) {}
}

impl Drop for TimeoutGuard {
    fn drop(&mut self) {
        self.timer.abort();
    }
}
