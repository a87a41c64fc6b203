//! Timer edge cases under virtual time.

use state_actor::ViewClient;
use std::time::Duration;
use waitable_app::config::{AppConfig, Timings};
use waitable_app::lifecycle::AppSystem;
use waitable_app::model::PageState;
use waitable_app::view::{labels, markers};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[tokio::test(start_paused = true)]
async fn test_leaving_products_cancels_load() {
    let system = AppSystem::new(&AppConfig::default()).unwrap();
    let app = &system.app_client;

    app.navigate(PageState::Products).await.unwrap();
    app.request_load().await.unwrap();

    tokio::time::sleep(ms(1000)).await;
    app.navigate(PageState::Home).await.unwrap();
    tokio::time::sleep(ms(500)).await;
    let view = app.navigate(PageState::Products).await.unwrap();
    assert!(!view.is_loading());

    // Well past the first deadline: the fresh page never sees that load.
    tokio::time::sleep(ms(2000)).await;
    let view = app.snapshot().await.unwrap();
    assert!(!view.is_loading());
    assert!(view.products().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_repeated_load_ends_with_one_list() {
    let system = AppSystem::new(&AppConfig::default()).unwrap();
    let app = &system.app_client;

    app.navigate(PageState::Products).await.unwrap();
    app.request_load().await.unwrap();
    tokio::time::sleep(ms(1000)).await;
    app.request_load().await.unwrap();

    tokio::time::sleep(ms(1002)).await;
    let view = app.snapshot().await.unwrap();
    assert!(!view.is_loading());
    assert_eq!(view.products().len(), 3);

    tokio::time::sleep(ms(1000)).await;
    let view = app.snapshot().await.unwrap();
    assert!(!view.is_loading());
    assert_eq!(view.products().len(), 3);

    system.shutdown().await.unwrap();
}

/// Loading again after the items are shown puts the page back into loading.
#[tokio::test(start_paused = true)]
async fn test_reload_after_items_shown() {
    let system = AppSystem::new(&AppConfig::default()).unwrap();
    let app = &system.app_client;

    app.navigate(PageState::Products).await.unwrap();
    app.click(labels::LOAD_PRODUCTS).await.unwrap();
    tokio::time::sleep(ms(2002)).await;
    assert_eq!(app.products().await.unwrap().len(), 3);

    let view = app.click(labels::LOAD_PRODUCTS).await.unwrap();
    assert!(view.is_loading());
    assert!(view.products().is_empty());
    let screen = view.screen();
    assert!(screen.has_marker(markers::LOADING_SPINNER));
    assert!(screen.texts_by_class(markers::PRODUCT_ITEM).is_empty());

    tokio::time::sleep(ms(1999)).await;
    assert!(app.is_loading().await.unwrap());

    tokio::time::sleep(ms(3)).await;
    let screen = app.screen().await.unwrap();
    assert!(!screen.has_marker(markers::LOADING_SPINNER));
    assert_eq!(
        screen.texts_by_class(markers::PRODUCT_ITEM),
        ["Laptop", "Mouse", "Keyboard"]
    );

    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_hide_before_reveal_cancels_it() {
    let system = AppSystem::new(&AppConfig::default()).unwrap();
    let app = &system.app_client;

    app.show_terms().await.unwrap();
    tokio::time::sleep(ms(200)).await;
    app.hide_terms().await.unwrap();

    tokio::time::sleep(ms(1000)).await;
    assert!(!app.snapshot().await.unwrap().terms_visible());

    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_show_while_pending_keeps_first_deadline() {
    let system = AppSystem::new(&AppConfig::default()).unwrap();
    let app = &system.app_client;

    app.show_terms().await.unwrap();
    tokio::time::sleep(ms(300)).await;
    app.show_terms().await.unwrap();

    tokio::time::sleep(ms(202)).await;
    assert!(app.snapshot().await.unwrap().terms_visible());

    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_leaving_home_cancels_reveal() {
    let system = AppSystem::new(&AppConfig::default()).unwrap();
    let app = &system.app_client;

    app.show_terms().await.unwrap();
    app.navigate(PageState::Products).await.unwrap();
    app.navigate(PageState::Home).await.unwrap();

    tokio::time::sleep(ms(1000)).await;
    assert!(!app.snapshot().await.unwrap().terms_visible());

    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_configured_timings_are_used() {
    let config = AppConfig {
        timings: Timings {
            load_delay_ms: 100,
            modal_delay_ms: 10,
        },
        ..AppConfig::default()
    };
    let system = AppSystem::new(&config).unwrap();
    let app = &system.app_client;

    app.show_terms().await.unwrap();
    tokio::time::sleep(ms(12)).await;
    assert!(app.snapshot().await.unwrap().terms_visible());

    app.navigate(PageState::Products).await.unwrap();
    app.request_load().await.unwrap();
    tokio::time::sleep(ms(102)).await;
    assert_eq!(app.products().await.unwrap().len(), 3);

    system.shutdown().await.unwrap();
}
