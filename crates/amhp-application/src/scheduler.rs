//! Cancellable delayed tasks.
//!
//! Every task gets a child of one root [`CancellationToken`], so
//! [`Scheduler::shutdown`] stops all pending work at once while individual
//! tasks can still be cancelled through their [`ScheduledTask`] handle.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    root: CancellationToken,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `task` after `delay` unless cancelled first.
    ///
    /// Once the delay elapses the task runs to completion; cancellation only
    /// prevents it from starting.
    pub fn schedule<F>(&self, delay: Duration, task: F) -> ScheduledTask
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let token = self.root.child_token();
        let guard = token.clone();
        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = guard.cancelled() => {}
                _ = tokio::time::sleep(delay) => task.await,
            }
        });

        ScheduledTask { token, handle }
    }

    /// A token that is cancelled when the scheduler shuts down.
    pub fn child_token(&self) -> CancellationToken {
        self.root.child_token()
    }

    /// Cancels every pending task.
    pub fn shutdown(&self) {
        self.root.cancel();
    }

    pub fn is_shut_down(&self) -> bool {
        self.root.is_cancelled()
    }
}

/// Handle to one scheduled task. Dropping it does not cancel the task.
#[derive(Debug)]
pub struct ScheduledTask {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Still waiting to fire.
    pub fn is_pending(&self) -> bool {
        !self.is_cancelled() && !self.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter_task(counter: &Arc<AtomicUsize>) -> impl Future<Output = ()> + Send + 'static {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_runs_after_delay() {
        let scheduler = Scheduler::new();
        let counter = Arc::new(AtomicUsize::new(0));

        let task = scheduler.schedule(Duration::from_millis(100), counter_task(&counter));
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);
        assert!(task.is_pending());

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_task_never_runs() {
        let scheduler = Scheduler::new();
        let counter = Arc::new(AtomicUsize::new(0));

        let task = scheduler.schedule(Duration::from_millis(100), counter_task(&counter));
        task.cancel();
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(counter.load(Ordering::SeqCst), 0);
        assert!(!task.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_cancels_everything() {
        let scheduler = Scheduler::new();
        let counter = Arc::new(AtomicUsize::new(0));

        let first = scheduler.schedule(Duration::from_millis(100), counter_task(&counter));
        let second = scheduler.schedule(Duration::from_secs(5), counter_task(&counter));
        scheduler.shutdown();
        tokio::time::sleep(Duration::from_secs(6)).await;

        assert_eq!(counter.load(Ordering::SeqCst), 0);
        assert!(first.is_cancelled() && second.is_cancelled());
        assert!(scheduler.is_shut_down());
    }
}
