//! # Lifecycle
//!
//! Starting and stopping the app actor. [`AppSystem::new`] creates the actor, injects
//! the configured [`Timings`](crate::config::Timings) as its context and spawns it;
//! [`AppSystem::shutdown`] drops the client so the mailbox closes, then joins the task.
//!
//! Logging is set up separately with
//! [`state_actor::tracing::setup_tracing`], once per process, before the system starts.

mod app_system;

pub use app_system::AppSystem;
