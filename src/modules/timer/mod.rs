// src/modules/timer/mod.rs
//
// Cancellable background tasks bound to the lifetime of their owning view.
// Dropping the handle aborts the task, so a torn-down view cannot leave a
// timer running.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

pub struct TaskHandle {
    handle: JoinHandle<()>,
}

impl TaskHandle {
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Run `tick` every `period` until the handle is cancelled or dropped.
pub fn spawn_periodic<F>(period: Duration, mut tick: F) -> TaskHandle
where
    F: FnMut() + Send + 'static,
{
    let handle = tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        // the first interval tick completes immediately
        interval.tick().await;
        loop {
            interval.tick().await;
            tick();
        }
    });
    TaskHandle { handle }
}

/// Run an arbitrary self-rescheduling loop (variable delays) under the same
/// abort-on-drop discipline.
pub fn spawn_cancellable<Fut>(task: Fut) -> TaskHandle
where
    Fut: Future<Output = ()> + Send + 'static,
{
    TaskHandle {
        handle: tokio::spawn(task),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn periodic_task_ticks_repeatedly() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);

        let _handle = spawn_periodic(Duration::from_millis(10), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(80)).await;
        assert!(count.load(Ordering::SeqCst) >= 2);
    }

    #[tokio::test]
    async fn cancelled_task_stops_ticking() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);

        let handle = spawn_periodic(Duration::from_millis(10), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(50)).await;
        handle.cancel();
        tokio::time::sleep(Duration::from_millis(20)).await;

        let at_cancel = count.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(count.load(Ordering::SeqCst), at_cancel);
    }

    #[tokio::test]
    async fn dropping_the_handle_aborts_the_task() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);

        {
            let _handle = spawn_periodic(Duration::from_millis(10), move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
            tokio::time::sleep(Duration::from_millis(40)).await;
        }

        tokio::time::sleep(Duration::from_millis(20)).await;
        let after_drop = count.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(40)).await;
        assert_eq!(count.load(Ordering::SeqCst), after_drop);
    }
}
