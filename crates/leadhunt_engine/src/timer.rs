use std::time::Duration;

use leadhunt_core::Msg;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Owned handle to a timer task that posts messages to the controller.
///
/// Dropping the handle aborts the task, so a timer never outlives its owner.
#[derive(Debug)]
pub struct TimerHandle {
    task: JoinHandle<()>,
}

impl TimerHandle {
    /// Posts `make()` every `period`, first one `period` from now.
    pub fn every<F>(period: Duration, tx: UnboundedSender<Msg>, make: F) -> Self
    where
        F: Fn() -> Msg + Send + 'static,
    {
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(make()).is_err() {
                    break;
                }
            }
        });
        Self { task }
    }

    /// Posts `msg` once after `delay`.
    pub fn after(delay: Duration, tx: UnboundedSender<Msg>, msg: Msg) -> Self {
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(msg);
        });
        Self { task }
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
