use crate::app_actor;
use crate::clients::AppClient;
use crate::config::{AppConfig, ConfigError};
use crate::error::AppError;
use tracing::{error, info};

/// Owns the running app actor.
///
/// Built from an [`AppConfig`]: the mailbox capacity sizes the actor's channel and
/// the timings are injected as the actor's context when it starts.
///
/// ```rust,no_run
/// # use waitable_app::config::AppConfig;
/// # use waitable_app::lifecycle::AppSystem;
/// # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// let system = AppSystem::new(&AppConfig::default())?;
/// system.app_client.click("Products").await?;
/// system.shutdown().await?;
/// # Ok(())
/// # }
/// ```
pub struct AppSystem {
    /// Client for interacting with the app actor
    pub app_client: AppClient,

    handle: tokio::task::JoinHandle<()>,
}

impl AppSystem {
    /// Validates `config` and spawns the app actor. Must be called inside a Tokio
    /// runtime.
    pub fn new(config: &AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let (actor, client) = app_actor::new(config.mailbox_capacity);
        let handle = tokio::spawn(actor.run(config.timings.clone()));
        info!(
            load_delay_ms = config.timings.load_delay_ms,
            modal_delay_ms = config.timings.modal_delay_ms,
            "App started"
        );

        Ok(Self {
            app_client: AppClient::new(client),
            handle,
        })
    }

    /// Closes the mailbox and waits for the actor to stop.
    ///
    /// Pending timers are cancelled by the actor on its way out. Other clones of
    /// the client keep the actor alive until they are dropped too.
    pub async fn shutdown(self) -> Result<(), AppError> {
        info!("Shutting down app...");
        drop(self.app_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(AppError::Shutdown(e.to_string()));
        }

        info!("App shutdown complete.");
        Ok(())
    }
}
