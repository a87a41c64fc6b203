use crate::{FrameworkError, StateClient, ViewModel};
use async_trait::async_trait;
use std::time::Duration;

/// Trait for domain-specific clients to inherit the standard read and wait operations.
///
/// A domain client wraps a [`StateClient`] and maps [`FrameworkError`] into its own
/// error type. In return it gets `snapshot` and `wait_for` for free.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use state_actor::{FrameworkError, Scheduler, StateClient, ViewClient, ViewModel};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct LampError(String);
///
/// struct Lamp { on: bool }
///
/// #[async_trait]
/// impl ViewModel for Lamp {
///     type Command = bool;
///     type Event = ();
///     type Snapshot = bool;
///     type Context = ();
///     type Error = LampError;
///
///     fn snapshot(&self) -> bool { self.on }
///     async fn handle_command(&mut self, on: bool, _: &mut Scheduler<Self>, _: &()) -> Result<(), LampError> {
///         self.on = on;
///         Ok(())
///     }
///     async fn handle_event(&mut self, _: (), _: &mut Scheduler<Self>, _: &()) -> Result<(), LampError> {
///         Ok(())
///     }
/// }
///
/// struct LampClient {
///     inner: StateClient<Lamp>,
/// }
///
/// #[async_trait]
/// impl ViewClient<Lamp> for LampClient {
///     type Error = LampError;
///
///     fn inner(&self) -> &StateClient<Lamp> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         LampError(e.to_string())
///     }
/// }
///
/// async fn usage(client: LampClient) {
///     // snapshot() and wait_for() are provided automatically!
///     let _ = client.snapshot().await;
///     let _ = client.wait_for(std::time::Duration::from_secs(1), |on| *on).await;
/// }
/// ```
#[async_trait]
pub trait ViewClient<M: ViewModel>: Send + Sync {
    /// The domain-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic StateClient.
    fn inner(&self) -> &StateClient<M>;

    /// Map framework errors to the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch the current state.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<M::Snapshot, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }

    /// Wait until the published state satisfies `predicate`.
    #[tracing::instrument(skip(self, predicate))]
    async fn wait_for<F>(&self, timeout: Duration, predicate: F) -> Result<M::Snapshot, Self::Error>
    where
        F: FnMut(&M::Snapshot) -> bool + Send,
    {
        self.inner()
            .wait_for(timeout, predicate)
            .await
            .map_err(Self::map_error)
    }
}
