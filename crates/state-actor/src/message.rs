//! Mailbox message types.

use crate::error::FrameworkError;
use crate::model::ViewModel;
use crate::scheduler::TaskId;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Message sent to a [`StateActor`](crate::StateActor) mailbox.
///
/// Clients only ever produce `Dispatch` and `Snapshot`. `Fire` is posted by the
/// actor's own [`Scheduler`](crate::Scheduler) when a timer elapses, so timer
/// completions are ordered with user commands in a single queue.
#[derive(Debug)]
pub enum ViewRequest<M: ViewModel> {
    /// Apply a command and reply with the snapshot taken right after it.
    Dispatch {
        command: M::Command,
        respond_to: Response<M::Snapshot>,
    },
    /// Read the current snapshot without mutating anything.
    Snapshot { respond_to: Response<M::Snapshot> },
    /// A scheduled timer elapsed.
    Fire { task: TaskId, event: M::Event },
}
