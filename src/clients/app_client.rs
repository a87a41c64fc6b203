//! # App Client
//!
//! High-level API for the app actor. Wraps a `StateClient<AppState>` and exposes the
//! controller operations, a label-based driver (`click`, `fill`), and waits.
use crate::app_actor::{AppCommand, AppState, AppView, FieldValue};
use crate::error::AppError;
use crate::model::{PageState, Product};
use crate::view::Screen;
use async_trait::async_trait;
use state_actor::{FrameworkError, StateClient, ViewClient};
use std::time::Duration;
use tracing::{debug, instrument};

/// Client for interacting with the app actor.
#[derive(Clone)]
pub struct AppClient {
    inner: StateClient<AppState>,
}

#[async_trait]
impl ViewClient<AppState> for AppClient {
    type Error = AppError;

    fn inner(&self) -> &StateClient<AppState> {
        &self.inner
    }

    /// Model errors are `AppError`s boxed by the framework; unwrap them again.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::ModelError(inner) => match inner.downcast::<AppError>() {
                Ok(app) => *app,
                Err(other) => AppError::Communication(other.to_string()),
            },
            FrameworkError::Timeout(waited) => AppError::WaitTimeout(waited),
            other => AppError::Communication(other.to_string()),
        }
    }
}

impl AppClient {
    pub fn new(inner: StateClient<AppState>) -> Self {
        Self { inner }
    }

    async fn send(&self, command: AppCommand) -> Result<AppView, AppError> {
        self.inner.dispatch(command).await.map_err(Self::map_error)
    }

    // --- View State Controller ---

    #[instrument(skip(self))]
    pub async fn navigate(&self, target: PageState) -> Result<AppView, AppError> {
        debug!("Sending request");
        self.send(AppCommand::Navigate(target)).await
    }

    /// Navigate by page identifier. Unknown identifiers never reach the actor.
    #[instrument(skip(self))]
    pub async fn navigate_to(&self, target: &str) -> Result<AppView, AppError> {
        let page: PageState = target.parse()?;
        self.navigate(page).await
    }

    #[instrument(skip(self))]
    pub async fn increment_cart(&self) -> Result<AppView, AppError> {
        debug!("Sending request");
        self.send(AppCommand::IncrementCart).await
    }

    #[instrument(skip(self))]
    pub async fn decrement_cart(&self) -> Result<AppView, AppError> {
        debug!("Sending request");
        self.send(AppCommand::DecrementCart).await
    }

    pub async fn current_page(&self) -> Result<PageState, AppError> {
        Ok(self.snapshot().await?.page)
    }

    pub async fn cart_badge(&self) -> Result<String, AppError> {
        Ok(self.snapshot().await?.cart_badge())
    }

    // --- Async Load Simulator ---

    #[instrument(skip(self))]
    pub async fn request_load(&self) -> Result<AppView, AppError> {
        debug!("Sending request");
        self.send(AppCommand::RequestLoad).await
    }

    pub async fn is_loading(&self) -> Result<bool, AppError> {
        Ok(self.snapshot().await?.is_loading())
    }

    pub async fn products(&self) -> Result<Vec<Product>, AppError> {
        Ok(self.snapshot().await?.products().to_vec())
    }

    // --- Login Gate & Modal Gate ---

    #[instrument(skip(self))]
    pub async fn submit_login(&self) -> Result<AppView, AppError> {
        debug!("Sending request");
        self.send(AppCommand::SubmitLogin).await
    }

    #[instrument(skip(self))]
    pub async fn show_terms(&self) -> Result<AppView, AppError> {
        debug!("Sending request");
        self.send(AppCommand::ShowTerms).await
    }

    #[instrument(skip(self))]
    pub async fn hide_terms(&self) -> Result<AppView, AppError> {
        debug!("Sending request");
        self.send(AppCommand::HideTerms).await
    }

    // --- Driver ---

    /// Clicks the button whose visible text is exactly `label`.
    #[instrument(skip(self))]
    pub async fn click(&self, label: &str) -> Result<AppView, AppError> {
        debug!("Sending request");
        self.send(AppCommand::Click(label.to_string())).await
    }

    /// Replaces the content of the input labeled `label`.
    #[instrument(skip(self, value))]
    pub async fn fill(&self, label: &str, value: &str) -> Result<AppView, AppError> {
        debug!("Sending request");
        self.send(AppCommand::Fill {
            label: label.to_string(),
            value: FieldValue::from(value),
        })
        .await
    }

    pub async fn screen(&self) -> Result<Screen, AppError> {
        Ok(self.snapshot().await?.screen())
    }

    /// Waits until the rendered screen satisfies `predicate`.
    pub async fn wait_for_screen<F>(&self, timeout: Duration, mut predicate: F) -> Result<Screen, AppError>
    where
        F: FnMut(&Screen) -> bool + Send,
    {
        let view = self.wait_for(timeout, |view| predicate(&view.screen())).await?;
        Ok(view.screen())
    }
}
