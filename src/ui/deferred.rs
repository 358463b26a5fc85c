//! One-shot timed actions: the simulated login and payment delays.
//!
//! Each scheduled action gets an id. The app keeps the [`DeferredHandle`]
//! of the action it is waiting for and ignores completions whose id does
//! not match, so a cancelled action can never land even if its event was
//! already queued.

use std::sync::mpsc::Sender;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::domain::Money;
use crate::ui::events::AppEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum DeferredAction {
    CompleteLogin,
    CompleteRecharge { card_id: String, amount: Money },
}

/// Pending action. Dropping the handle detaches the timer; only
/// [`DeferredHandle::cancel`] stops it.
#[derive(Debug)]
pub struct DeferredHandle {
    id: u64,
    task: Option<JoinHandle<()>>,
}

impl DeferredHandle {
    pub fn new(id: u64, task: Option<JoinHandle<()>>) -> Self {
        Self { id, task }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn cancel(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Spawns timer tasks on a tokio runtime and delivers their actions to the
/// UI event channel.
pub struct DeferredScheduler {
    runtime: Handle,
    sender: Sender<AppEvent>,
    next_id: u64,
}

impl DeferredScheduler {
    pub fn new(runtime: Handle, sender: Sender<AppEvent>) -> Self {
        Self {
            runtime,
            sender,
            next_id: 1,
        }
    }

    pub fn schedule(&mut self, delay: Duration, action: DeferredAction) -> DeferredHandle {
        let id = self.next_id;
        self.next_id += 1;
        tracing::debug!(id, ?delay, ?action, "deferred action scheduled");

        let sender = self.sender.clone();
        let task = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if sender.send(AppEvent::Deferred { id, action }).is_err() {
                tracing::trace!(id, "deferred action dropped, event loop gone");
            }
        });
        DeferredHandle::new(id, Some(task))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()
            .expect("runtime")
    }

    #[test]
    fn scheduled_action_is_delivered() {
        let rt = runtime();
        let (tx, rx) = mpsc::channel();
        let mut scheduler = DeferredScheduler::new(rt.handle().clone(), tx);
        let handle = scheduler.schedule(Duration::from_millis(10), DeferredAction::CompleteLogin);

        match rx.recv_timeout(Duration::from_secs(2)) {
            Ok(AppEvent::Deferred { id, action }) => {
                assert_eq!(id, handle.id());
                assert_eq!(action, DeferredAction::CompleteLogin);
            }
            Ok(_) => panic!("unexpected event"),
            Err(err) => panic!("no event: {err}"),
        }
    }

    #[test]
    fn ids_are_unique() {
        let rt = runtime();
        let (tx, _rx) = mpsc::channel();
        let mut scheduler = DeferredScheduler::new(rt.handle().clone(), tx);
        let a = scheduler.schedule(Duration::from_secs(60), DeferredAction::CompleteLogin);
        let b = scheduler.schedule(Duration::from_secs(60), DeferredAction::CompleteLogin);
        assert_ne!(a.id(), b.id());
        a.cancel();
        b.cancel();
    }

    #[test]
    fn cancelled_action_never_arrives() {
        let rt = runtime();
        let (tx, rx) = mpsc::channel();
        let mut scheduler = DeferredScheduler::new(rt.handle().clone(), tx);
        scheduler
            .schedule(Duration::from_millis(100), DeferredAction::CompleteLogin)
            .cancel();

        assert!(rx.recv_timeout(Duration::from_millis(300)).is_err());
    }

    #[test]
    fn dropped_handle_still_fires() {
        let rt = runtime();
        let (tx, rx) = mpsc::channel();
        let mut scheduler = DeferredScheduler::new(rt.handle().clone(), tx);
        let handle = scheduler.schedule(
            Duration::from_millis(10),
            DeferredAction::CompleteRecharge {
                card_id: "c1".into(),
                amount: Money::from_reais(10),
            },
        );
        let id = handle.id();
        drop(handle);

        assert!(matches!(
            rx.recv_timeout(Duration::from_secs(2)),
            Ok(AppEvent::Deferred { id: fired, .. }) if fired == id
        ));
    }
}
