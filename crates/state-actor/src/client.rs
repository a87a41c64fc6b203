use crate::error::FrameworkError;
use crate::message::ViewRequest;
use crate::model::ViewModel;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot, watch};

/// ## StateClient
///
/// The `StateClient<M>` is the async handle to a [`StateActor<M>`](crate::StateActor).
/// Commands travel over the mailbox and are answered through oneshot channels; every
/// state change is also published on a watch channel, which is what
/// [`wait_for`](StateClient::wait_for) observes.
///
/// * **Cloneable** – holds a sender and a watch receiver, so cloning is inexpensive.
/// * **Ordered** – `dispatch` and `snapshot` go through the same queue as timer
///   completions, so a reply always reflects every earlier message.
pub struct StateClient<M: ViewModel> {
    sender: mpsc::Sender<ViewRequest<M>>,
    watcher: watch::Receiver<M::Snapshot>,
}

impl<M: ViewModel> Clone for StateClient<M> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            watcher: self.watcher.clone(),
        }
    }
}

impl<M: ViewModel> StateClient<M> {
    pub fn new(sender: mpsc::Sender<ViewRequest<M>>, watcher: watch::Receiver<M::Snapshot>) -> Self {
        Self { sender, watcher }
    }

    /// Applies a command and returns the state right after it.
    pub async fn dispatch(&self, command: M::Command) -> Result<M::Snapshot, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ViewRequest::Dispatch {
                command,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Reads the state after every message queued before this call has been applied.
    pub async fn snapshot(&self) -> Result<M::Snapshot, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ViewRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Last published state, without a round trip through the mailbox.
    pub fn latest(&self) -> M::Snapshot {
        self.watcher.borrow().clone()
    }

    /// Waits until a published state satisfies `predicate`.
    ///
    /// The current state is checked first, so a condition that already holds
    /// returns immediately. Fails with [`FrameworkError::Timeout`] if the condition
    /// does not hold within `timeout`.
    pub async fn wait_for<F>(&self, timeout: Duration, mut predicate: F) -> Result<M::Snapshot, FrameworkError>
    where
        F: FnMut(&M::Snapshot) -> bool + Send,
    {
        let mut watcher = self.watcher.clone();
        let result = match tokio::time::timeout(timeout, watcher.wait_for(|snapshot| predicate(snapshot))).await {
            Ok(Ok(snapshot)) => Ok(snapshot.clone()),
            Ok(Err(_)) => Err(FrameworkError::ActorClosed),
            Err(_) => Err(FrameworkError::Timeout(timeout)),
        };
        result
    }

    /// `true` once the actor has stopped accepting messages.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
