use crate::client::StateClient;
use crate::error::FrameworkError;
use crate::message::ViewRequest;
use crate::model::ViewModel;
use crate::scheduler::Scheduler;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// The actor that owns one [`ViewModel`] value.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the model, the timers the
/// model has scheduled, and the receiver end of the mailbox.
///
/// **Concurrency Model**:
/// Commands from any number of cloned clients and timer completions all arrive on
/// the same mailbox and are processed *sequentially*. There is exactly one logical
/// owner of the state, so no `Mutex` is needed and events are applied in the order
/// they were enqueued.
///
/// # Usage Pattern
///
/// 1.  **Create**: `StateActor::new(model, capacity)` returns the actor and its client.
/// 2.  **Wire**: pass the model's context into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use async_trait::async_trait;
/// use state_actor::{Scheduler, StateActor, ViewModel};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("never")]
/// struct Never;
///
/// struct Counter(u32);
///
/// #[async_trait]
/// impl ViewModel for Counter {
///     type Command = u32;
///     type Event = ();
///     type Snapshot = u32;
///     type Context = ();
///     type Error = Never;
///
///     fn snapshot(&self) -> u32 { self.0 }
///     async fn handle_command(&mut self, n: u32, _: &mut Scheduler<Self>, _: &()) -> Result<(), Never> {
///         self.0 += n;
///         Ok(())
///     }
///     async fn handle_event(&mut self, _: (), _: &mut Scheduler<Self>, _: &()) -> Result<(), Never> {
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StateActor::new(Counter(0), 8);
///     tokio::spawn(actor.run(()));
///     assert_eq!(client.dispatch(2).await.unwrap(), 2);
/// }
/// ```
pub struct StateActor<M: ViewModel> {
    receiver: mpsc::Receiver<ViewRequest<M>>,
    model: M,
    timers: Scheduler<M>,
    published: watch::Sender<M::Snapshot>,
}

impl<M: ViewModel> StateActor<M> {
    /// Creates a new `StateActor` and its associated `StateClient`.
    ///
    /// # Arguments
    ///
    /// * `model` - The initial state.
    /// * `buffer_size` - The capacity of the mailbox. If the mailbox is full, calls
    ///   to the client wait until there is space. Must be non-zero.
    pub fn new(model: M, buffer_size: usize) -> (Self, StateClient<M>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (published, watcher) = watch::channel(model.snapshot());
        let actor = Self {
            receiver,
            timers: Scheduler::new(sender.downgrade()),
            model,
            published,
        };
        let client = StateClient::new(sender, watcher);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// # Context Injection
    /// The `context` argument is passed to every model hook.
    pub async fn run(mut self, context: M::Context) {
        // Extract just the type name (e.g., "AppState" instead of "waitable_app::app_actor::AppState")
        let model_type = std::any::type_name::<M>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(model_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ViewRequest::Dispatch {
                    command,
                    respond_to,
                } => {
                    debug!(model_type, ?command, "Dispatch");
                    let result = self
                        .model
                        .handle_command(command, &mut self.timers, &context)
                        .await;
                    let snapshot = self.publish();
                    match result {
                        Ok(()) => {
                            let _ = respond_to.send(Ok(snapshot));
                        }
                        Err(e) => {
                            warn!(model_type, error = %e, "Command rejected");
                            let _ = respond_to.send(Err(FrameworkError::ModelError(Box::new(e))));
                        }
                    }
                }
                ViewRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.model.snapshot()));
                }
                ViewRequest::Fire { task, event } => {
                    if !self.timers.complete(task) {
                        debug!(model_type, %task, "Stale timer dropped");
                        continue;
                    }
                    debug!(model_type, %task, ?event, "Timer fired");
                    if let Err(e) = self
                        .model
                        .handle_event(event, &mut self.timers, &context)
                        .await
                    {
                        warn!(model_type, %task, error = %e, "Timer event failed");
                    }
                    self.publish();
                }
            }
        }

        let cancelled = self.timers.cancel_all();
        info!(model_type, cancelled, "Shutdown");
    }

    fn publish(&self) -> M::Snapshot {
        let snapshot = self.model.snapshot();
        self.published.send_replace(snapshot.clone());
        snapshot
    }
}
