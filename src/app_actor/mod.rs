//! # App Actor
//!
//! The single actor that owns the whole application state.
//!
//! ## Structure
//!
//! - [`commands`] - [`AppCommand`] (user intent) and [`AppEvent`] (timer completions)
//! - [`state`] - [`AppState`], its [`ViewModel`](state_actor::ViewModel) impl, and the
//!   published [`AppView`] snapshot
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use waitable_app::app_actor;
//! use waitable_app::clients::AppClient;
//! use waitable_app::config::Timings;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = app_actor::new(32);
//!     tokio::spawn(actor.run(Timings::default()));
//!
//!     let app = AppClient::new(client);
//!     app.click("Add to Cart").await?;
//!     assert_eq!(app.cart_badge().await?, "Cart (1 items)");
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod state;

pub use commands::*;
pub use state::*;

use state_actor::{StateActor, StateClient};

/// Creates a new app actor, starting on the home page with an empty cart.
pub fn new(buffer_size: usize) -> (StateActor<AppState>, StateClient<AppState>) {
    StateActor::new(AppState::default(), buffer_size)
}
