//! Error types for the application.

use crate::model::PageState;
use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by the application and its client.
///
/// Everything except `Communication` and `Shutdown` is a contract violation
/// rejected at the boundary; the state is left untouched.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AppError {
    /// A page identifier outside the four known pages.
    #[error("Unknown page: {0}")]
    UnknownPage(String),

    /// No control with this visible label is rendered.
    #[error("No element labeled {0:?} on the current screen")]
    ElementNotFound(String),

    /// `fill` targeted a label that exists but is not an input.
    #[error("Element {0:?} is not editable")]
    NotEditable(String),

    /// The control is rendered but an open overlay covers it.
    #[error("Element {0:?} is covered by an open modal")]
    ElementCovered(String),

    /// The control is rendered but disabled.
    #[error("Element {0:?} is disabled")]
    ElementDisabled(String),

    /// A page-local command arrived while another page was mounted.
    #[error("{required} page is not mounted (current page: {current})")]
    PageNotMounted {
        required: PageState,
        current: PageState,
    },

    /// Login submitted with an empty username or password.
    #[error("Username and password are both required")]
    LoginIncomplete,

    /// A wait condition did not hold in time.
    #[error("Condition not met within {0:?}")]
    WaitTimeout(Duration),

    /// An error occurred while communicating with the actor.
    #[error("Actor communication error: {0}")]
    Communication(String),

    /// The actor task failed during shutdown.
    #[error("Shutdown failed: {0}")]
    Shutdown(String),
}
