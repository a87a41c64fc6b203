//! # State Actor
//!
//! A single-owner state container for interactive applications, built on the
//! **Actor Model** with Tokio.
//!
//! One [`StateActor`] owns one [`ViewModel`] value. Everything that can change the
//! value goes through the actor's mailbox:
//!
//! - **Commands** from any number of cloned [`StateClient`]s;
//! - **Timer completions** scheduled by the model itself through the [`Scheduler`].
//!
//! Messages are applied one at a time in enqueue order. There are no locks and no
//! contention; the only suspension points are timers, and those are ordinary
//! messages once they elapse.
//!
//! ## Timers & Teardown
//!
//! A model that starts a delayed operation (a simulated fetch, a delayed reveal)
//! calls [`Scheduler::schedule`] and gets a [`TaskId`] back. Timers can be cancelled
//! individually or all at once. A completion for a cancelled timer is never handed
//! to the model, even if it was already sitting in the mailbox, so a model that
//! tears down part of its state can cancel that part's timers and rely on never
//! seeing their callbacks.
//!
//! ## Observing State
//!
//! After every message the actor publishes [`ViewModel::snapshot`] on a watch
//! channel. [`StateClient::wait_for`] waits, with a timeout, until a published
//! snapshot satisfies a predicate. This is the primitive behind auto-waiting
//! assertions such as "the spinner is gone" or "the badge reads 2 items".
//!
//! ## Structure
//!
//! - [`actor`] - the run loop
//! - [`client`] / [`client_trait`] - the generic client and the trait domain clients implement
//! - [`model`] - the [`ViewModel`] trait
//! - [`scheduler`] - cancellable timers
//! - [`mock`] - test helpers that stand in for a running actor
//! - [`tracing`] - subscriber setup
//!
//! ## Graceful Shutdown
//!
//! Drop every client. The run loop exits when its mailbox closes, cancels any
//! pending timers and logs the count.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod model;
pub mod scheduler;
pub mod tracing;

// Re-export core types for convenience
pub use actor::StateActor;
pub use client::StateClient;
pub use client_trait::ViewClient;
pub use error::FrameworkError;
pub use message::{Response, ViewRequest};
pub use model::ViewModel;
pub use scheduler::{Scheduler, TaskId};
