//! # Mock Helpers
//!
//! Utilities for testing domain clients without spawning a real actor.
//!
//! [`create_mock_client`] returns a working [`StateClient`] together with the raw
//! mailbox receiver and the watch sender. The test plays the actor: it pulls requests
//! with [`expect_dispatch`] / [`expect_snapshot`], answers them through the returned
//! responder, and publishes states through the watch sender to drive `wait_for`.
//!
//! ```rust,ignore
//! let (client, mut mailbox, publish) = create_mock_client::<AppState>(10, initial);
//! let app = AppClient::new(client);
//!
//! let task = tokio::spawn(async move { app.click("Add to Cart").await });
//! let (command, responder) = expect_dispatch(&mut mailbox).await.unwrap();
//! responder.send(Ok(next_view)).unwrap();
//! ```

use crate::message::{Response, ViewRequest};
use crate::model::ViewModel;
use crate::StateClient;
use tokio::sync::{mpsc, watch};

/// Creates a client whose mailbox is handed to the test instead of an actor.
pub fn create_mock_client<M: ViewModel>(
    buffer_size: usize,
    initial: M::Snapshot,
) -> (
    StateClient<M>,
    mpsc::Receiver<ViewRequest<M>>,
    watch::Sender<M::Snapshot>,
) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (published, watcher) = watch::channel(initial);
    (StateClient::new(sender, watcher), receiver, published)
}

/// Waits for the next request and returns it if it is a `Dispatch`.
pub async fn expect_dispatch<M: ViewModel>(
    receiver: &mut mpsc::Receiver<ViewRequest<M>>,
) -> Option<(M::Command, Response<M::Snapshot>)> {
    match receiver.recv().await {
        Some(ViewRequest::Dispatch {
            command,
            respond_to,
        }) => Some((command, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns its responder if it is a `Snapshot`.
pub async fn expect_snapshot<M: ViewModel>(
    receiver: &mut mpsc::Receiver<ViewRequest<M>>,
) -> Option<Response<M::Snapshot>> {
    match receiver.recv().await {
        Some(ViewRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}
