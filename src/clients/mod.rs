//! Type-safe wrappers around [`StateClient`](state_actor::StateClient).

pub mod app_client;

pub use app_client::*;
