//! # Waitable App
//!
//! The core of a small single-page demo application whose only purpose is to be
//! driven by an automated browser-test harness. It keeps the observable UI state
//! (active page, cart count, product list, login form, terms modal) and simulates
//! the asynchronous delays an auto-waiting test has to cope with:
//!
//! - **Products load**: a 2000 ms simulated fetch with a loading spinner;
//! - **Terms modal**: a 500 ms delayed reveal.
//!
//! ## Architecture
//!
//! All state lives in one [`AppState`](app_actor::AppState) owned by a
//! [`StateActor`](state_actor::StateActor). User actions and timer completions are
//! messages in the same mailbox, so they are applied strictly one at a time.
//! Leaving a page cancels the timers that belong to it; a completion for a page that
//! is no longer mounted is dropped.
//!
//! ## Module Tour
//!
//! - [`model`] - the pure state pieces: pages, cart, load, login form, modal gate
//! - [`app_actor`] - commands, events and the [`ViewModel`](state_actor::ViewModel) impl
//! - [`view`] - rendering a snapshot into the [`Screen`](view::Screen) a driver sees
//! - [`clients`] - [`AppClient`](clients::AppClient), the typed handle on the actor
//! - [`lifecycle`] - [`AppSystem`](lifecycle::AppSystem), start and shutdown
//! - [`config`] - timings and mailbox settings from TOML and the environment
//! - [`error`] - [`AppError`](error::AppError)
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//!
//! # Shorter delays
//! WAITABLE_LOAD_DELAY_MS=200 WAITABLE_MODAL_DELAY_MS=50 cargo run
//! ```

pub mod app_actor;
pub mod clients;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod view;
