//! Demo walk-through of the app: the same flows a browser test would drive.
//!
//! Usage: `waitable-app [config.toml]`. Without a path, defaults plus
//! `WAITABLE_*` environment overrides are used.

use state_actor::tracing::setup_tracing;
use std::path::Path;
use std::time::Duration;
use tracing::{error, info, Instrument};
use waitable_app::clients::AppClient;
use waitable_app::config::AppConfig;
use waitable_app::error::AppError;
use waitable_app::lifecycle::AppSystem;
use waitable_app::view::{headings, labels, markers};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load(Path::new(&path)),
        None => AppConfig::from_env(),
    }
    .map_err(|e| e.to_string())?;

    setup_tracing(&config.log_filter);
    info!(?config, "Starting application");

    let system = AppSystem::new(&config).map_err(|e| e.to_string())?;
    let app = &system.app_client;
    // Generous margin over the simulated delays.
    let patience = config.timings.load_delay() + config.timings.modal_delay() + Duration::from_secs(1);

    let span = tracing::info_span!("login");
    let result = login(app, patience).instrument(span).await;
    report("Login flow", result);

    let span = tracing::info_span!("products");
    let result = load_products(app, patience).instrument(span).await;
    report("Products flow", result);

    let span = tracing::info_span!("terms");
    let result = terms(app, patience).instrument(span).await;
    report("Terms flow", result);

    let span = tracing::info_span!("cart");
    let result = cart(app).instrument(span).await;
    report("Cart flow", result);

    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Application completed successfully");
    Ok(())
}

fn report(flow: &str, result: Result<(), AppError>) {
    match result {
        Ok(()) => info!(flow, "Flow completed"),
        Err(e) => error!(flow, error = %e, "Flow failed"),
    }
}

async fn login(app: &AppClient, patience: Duration) -> Result<(), AppError> {
    app.click(labels::LOGIN).await?;
    app.fill(labels::USERNAME, "testuser").await?;
    app.fill(labels::PASSWORD, "password123").await?;
    app.click(labels::LOG_IN).await?;
    app.wait_for_screen(patience, |screen| screen.has_heading(headings::WELCOME))
        .await?;
    info!("Welcome message visible");
    Ok(())
}

async fn load_products(app: &AppClient, patience: Duration) -> Result<(), AppError> {
    app.click(labels::PRODUCTS).await?;
    let view = app.click(labels::LOAD_PRODUCTS).await?;
    info!(spinner = view.is_loading(), "Load requested");

    let screen = app
        .wait_for_screen(patience, |screen| !screen.has_marker(markers::LOADING_SPINNER))
        .await?;
    let items = screen.texts_by_class(markers::PRODUCT_ITEM);
    info!(?items, "Products visible");
    Ok(())
}

async fn terms(app: &AppClient, patience: Duration) -> Result<(), AppError> {
    app.click(labels::HOME).await?;
    app.click(labels::SHOW_TERMS).await?;
    app.wait_for_screen(patience, |screen| screen.has_heading(headings::TERMS))
        .await?;
    info!("Terms visible");
    app.click(labels::CLOSE).await?;
    Ok(())
}

async fn cart(app: &AppClient) -> Result<(), AppError> {
    app.navigate_to("home").await?;
    app.click(labels::ADD_TO_CART).await?;
    app.click(labels::ADD_TO_CART).await?;
    app.click(labels::REMOVE_FROM_CART).await?;
    info!(badge = %app.cart_badge().await?, "Cart updated");
    Ok(())
}
