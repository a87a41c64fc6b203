//! The [`ViewModel`] trait.

use crate::scheduler::Scheduler;
use async_trait::async_trait;
use std::fmt::Debug;

/// State that can be owned and driven by a [`StateActor`](crate::StateActor).
///
/// # Architecture Note
/// The actor owns exactly one model value. Every mutation goes through
/// [`handle_command`](ViewModel::handle_command) (user intent) or
/// [`handle_event`](ViewModel::handle_event) (a timer scheduled earlier elapsed), one
/// message at a time, so the model never needs a lock.
///
/// After each message the actor publishes [`snapshot`](ViewModel::snapshot) to every
/// watcher. The snapshot is the only thing the outside world ever observes.
///
/// # Async & Context
/// Hooks are `#[async_trait]` like the rest of the framework. `Context` is injected
/// at [`run`](crate::StateActor::run) time rather than at construction ("late
/// binding"), which is where configuration such as delays comes from.
#[async_trait]
pub trait ViewModel: Send + Sized + 'static {
    /// User intent accepted by the model.
    type Command: Send + Sync + Debug;

    /// Payload delivered back to the model when a scheduled timer elapses.
    type Event: Send + Sync + Debug;

    /// Immutable, cloneable view of the model handed to clients.
    type Snapshot: Clone + Send + Sync + Debug + 'static;

    /// Runtime dependencies injected into every hook. Use `()` if none.
    type Context: Send + Sync;

    /// Error returned when a command is rejected.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Captures the current state.
    fn snapshot(&self) -> Self::Snapshot;

    /// Applies a command. Timers needed by the command are registered on `timers`.
    ///
    /// A rejected command must leave the model untouched.
    async fn handle_command(
        &mut self,
        command: Self::Command,
        timers: &mut Scheduler<Self>,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Applies a timer completion. Completions of cancelled timers never reach
    /// this hook.
    async fn handle_event(
        &mut self,
        event: Self::Event,
        timers: &mut Scheduler<Self>,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;
}
