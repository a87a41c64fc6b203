//! Cancellable timers that report back into the actor's own mailbox.
//!
//! A timer is a spawned task that sleeps and then posts
//! [`ViewRequest::Fire`](crate::ViewRequest::Fire). The scheduler keeps the task's
//! `JoinHandle` until the actor consumes the `Fire`, so it can tell live completions
//! from stale ones:
//!
//! - cancelling a timer aborts its task;
//! - if the `Fire` was already enqueued when the timer was cancelled, the actor
//!   finds no entry for it and drops it without calling the model.
//!
//! Timers hold only a weak sender. They never keep the actor alive after the last
//! client is gone.

use crate::message::ViewRequest;
use crate::model::ViewModel;
use std::collections::HashMap;
use std::fmt::Display;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::trace;

/// Identifier of a scheduled timer, unique for the lifetime of one actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "timer_{}", self.0)
    }
}

/// Owns the pending timers of one actor.
pub struct Scheduler<M: ViewModel> {
    mailbox: mpsc::WeakSender<ViewRequest<M>>,
    pending: HashMap<TaskId, JoinHandle<()>>,
    next_id: u64,
}

impl<M: ViewModel> Scheduler<M> {
    pub(crate) fn new(mailbox: mpsc::WeakSender<ViewRequest<M>>) -> Self {
        Self {
            mailbox,
            pending: HashMap::new(),
            next_id: 1,
        }
    }

    /// Delivers `event` to the model after `delay`, unless cancelled first.
    pub fn schedule(&mut self, delay: Duration, event: M::Event) -> TaskId {
        let task = TaskId(self.next_id);
        self.next_id += 1;

        let mailbox = self.mailbox.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Actor already gone: nothing to deliver to.
            if let Some(sender) = mailbox.upgrade() {
                let _ = sender.send(ViewRequest::Fire { task, event }).await;
            }
        });
        trace!(%task, ?delay, "Scheduled");
        self.pending.insert(task, handle);
        task
    }

    /// Cancels a pending timer. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, task: TaskId) -> bool {
        match self.pending.remove(&task) {
            Some(handle) => {
                handle.abort();
                trace!(%task, "Cancelled");
                true
            }
            None => false,
        }
    }

    /// Cancels every pending timer and returns how many there were.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.pending.len();
        for (_, handle) in self.pending.drain() {
            handle.abort();
        }
        count
    }

    pub fn is_pending(&self, task: TaskId) -> bool {
        self.pending.contains_key(&task)
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Marks a timer as delivered. `false` means the completion is stale.
    pub(crate) fn complete(&mut self, task: TaskId) -> bool {
        self.pending.remove(&task).is_some()
    }
}
