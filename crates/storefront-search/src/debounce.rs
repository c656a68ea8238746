//! Trailing debounce with a single pending slot.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Identifies one scheduled run.
///
/// A run that has already woken from its delay cannot be aborted, so it
/// checks its ticket before publishing anything.
#[derive(Debug, Clone)]
pub struct Ticket {
    id: u64,
    epoch: Arc<AtomicU64>,
}

impl Ticket {
    /// True until the debouncer is rescheduled or cancelled.
    pub fn is_current(&self) -> bool {
        self.epoch.load(Ordering::SeqCst) == self.id
    }
}

/// Runs only the last task scheduled within a quiet period.
///
/// At most one task is pending at a time. Scheduling aborts the pending task
/// and starts the delay over; dropping the debouncer cancels it.
/// Must be used inside a tokio runtime.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
    epoch: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace the pending task with `task`, run after the delay.
    pub fn schedule<F, Fut>(&mut self, task: F)
    where
        F: FnOnce(Ticket) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.cancel();

        let ticket = Ticket {
            id: self.epoch.load(Ordering::SeqCst),
            epoch: Arc::clone(&self.epoch),
        };
        let delay = self.delay;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if ticket.is_current() {
                task(ticket).await;
            }
        }));
    }

    /// Cancel the pending task. Returns true if one was still waiting.
    pub fn cancel(&mut self) -> bool {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        match self.pending.take() {
            Some(handle) => {
                let waiting = !handle.is_finished();
                handle.abort();
                waiting
            }
            None => false,
        }
    }

    /// True if a task is scheduled and has not finished.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
