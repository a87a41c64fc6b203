use state_actor::ViewClient;
use std::time::Duration;
use waitable_app::config::{AppConfig, ConfigError};
use waitable_app::error::AppError;
use waitable_app::lifecycle::AppSystem;
use waitable_app::model::PageState;
use waitable_app::view::{headings, labels, markers};

const PATIENCE: Duration = Duration::from_secs(5);

fn start() -> AppSystem {
    AppSystem::new(&AppConfig::default()).unwrap()
}

/// Login end to end: fill both fields, submit, land on the dashboard.
#[tokio::test]
async fn test_login_flow() {
    let system = start();
    let app = &system.app_client;

    app.click(labels::LOGIN).await.unwrap();
    let screen = app.screen().await.unwrap();
    assert!(screen.has_heading(headings::LOGIN));
    assert!(!screen.button(labels::LOG_IN).unwrap().enabled);

    app.fill(labels::USERNAME, "testuser").await.unwrap();
    let view = app.fill(labels::PASSWORD, "password123").await.unwrap();
    assert!(view.can_submit());

    let view = app.click(labels::LOG_IN).await.unwrap();
    assert_eq!(view.page, PageState::Dashboard);
    assert!(view.screen().has_heading(headings::WELCOME));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_log_in_rejected_until_both_fields_filled() {
    let system = start();
    let app = &system.app_client;

    app.navigate(PageState::Login).await.unwrap();
    assert_eq!(
        app.click(labels::LOG_IN).await,
        Err(AppError::ElementDisabled(labels::LOG_IN.to_string()))
    );

    app.fill(labels::USERNAME, "testuser").await.unwrap();
    assert_eq!(app.submit_login().await, Err(AppError::LoginIncomplete));
    assert_eq!(app.current_page().await.unwrap(), PageState::Login);

    system.shutdown().await.unwrap();
}

/// The spinner is visible for the whole simulated fetch and gone afterwards.
#[tokio::test(start_paused = true)]
async fn test_products_load_flow() {
    let system = start();
    let app = &system.app_client;

    app.click(labels::PRODUCTS).await.unwrap();
    let view = app.click(labels::LOAD_PRODUCTS).await.unwrap();
    assert!(view.is_loading());
    assert!(view.screen().has_marker(markers::LOADING_SPINNER));

    tokio::time::sleep(Duration::from_millis(1999)).await;
    assert!(app.is_loading().await.unwrap());
    assert!(app.products().await.unwrap().is_empty());

    let screen = app
        .wait_for_screen(PATIENCE, |screen| !screen.has_marker(markers::LOADING_SPINNER))
        .await
        .unwrap();
    assert_eq!(
        screen.texts_by_class(markers::PRODUCT_ITEM),
        ["Laptop", "Mouse", "Keyboard"]
    );

    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_terms_modal_flow() {
    let system = start();
    let app = &system.app_client;

    let view = app.click(labels::SHOW_TERMS).await.unwrap();
    assert!(!view.terms_visible());

    tokio::time::sleep(Duration::from_millis(499)).await;
    assert!(!app.snapshot().await.unwrap().terms_visible());

    app.wait_for_screen(PATIENCE, |screen| screen.has_heading(headings::TERMS))
        .await
        .unwrap();

    let view = app.click(labels::CLOSE).await.unwrap();
    assert!(!view.terms_visible());
    assert!(view.screen().overlay.is_none());

    system.shutdown().await.unwrap();
}

/// The open modal covers the page: nothing under it can be clicked until it closes.
#[tokio::test(start_paused = true)]
async fn test_open_modal_blocks_underlying_controls() {
    let system = start();
    let app = &system.app_client;

    app.click(labels::SHOW_TERMS).await.unwrap();
    app.wait_for_screen(PATIENCE, |screen| screen.has_heading(headings::TERMS))
        .await
        .unwrap();

    for label in [labels::ADD_TO_CART, labels::PRODUCTS, labels::SHOW_TERMS] {
        assert_eq!(
            app.click(label).await,
            Err(AppError::ElementCovered(label.to_string()))
        );
    }
    let view = app.snapshot().await.unwrap();
    assert_eq!(view.page, PageState::Home);
    assert_eq!(view.cart_badge(), "Cart (0 items)");
    assert!(view.terms_visible());

    app.click(labels::CLOSE).await.unwrap();
    let view = app.click(labels::ADD_TO_CART).await.unwrap();
    assert_eq!(view.cart_badge(), "Cart (1 items)");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cart_flow() {
    let system = start();
    let app = &system.app_client;

    assert_eq!(app.cart_badge().await.unwrap(), "Cart (0 items)");
    app.click(labels::ADD_TO_CART).await.unwrap();
    assert_eq!(app.cart_badge().await.unwrap(), "Cart (1 items)");
    app.click(labels::ADD_TO_CART).await.unwrap();
    assert_eq!(app.cart_badge().await.unwrap(), "Cart (2 items)");
    app.click(labels::REMOVE_FROM_CART).await.unwrap();
    assert_eq!(app.cart_badge().await.unwrap(), "Cart (1 items)");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cart_never_goes_negative() {
    let system = start();
    let app = &system.app_client;

    app.decrement_cart().await.unwrap();
    let view = app.decrement_cart().await.unwrap();
    assert_eq!(view.cart.get(), 0);
    let view = app.increment_cart().await.unwrap();
    assert_eq!(view.cart.get(), 1);

    system.shutdown().await.unwrap();
}

/// The cart is global: it survives every page change.
#[tokio::test]
async fn test_cart_survives_navigation() {
    let system = start();
    let app = &system.app_client;

    app.increment_cart().await.unwrap();
    app.increment_cart().await.unwrap();
    for page in ["products", "login", "dashboard", "home"] {
        let view = app.navigate_to(page).await.unwrap();
        assert_eq!(view.cart_badge(), "Cart (2 items)");
        assert_eq!(view.screen().text_by_class(markers::CART_BADGE), Some("Cart (2 items)"));
    }

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_navigation_has_no_history() {
    let system = start();
    let app = &system.app_client;

    assert_eq!(app.current_page().await.unwrap(), PageState::Home);
    app.navigate(PageState::Login).await.unwrap();
    app.navigate(PageState::Dashboard).await.unwrap();
    assert_eq!(app.current_page().await.unwrap(), PageState::Dashboard);

    // The dashboard has no way back other than the nav buttons.
    let screen = app.screen().await.unwrap();
    assert!(screen.button("Back").is_none());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_page_is_rejected() {
    let system = start();
    let app = &system.app_client;

    app.navigate(PageState::Products).await.unwrap();
    assert_eq!(
        app.navigate_to("settings").await,
        Err(AppError::UnknownPage("settings".to_string()))
    );
    assert_eq!(app.current_page().await.unwrap(), PageState::Products);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_leaving_login_discards_form() {
    let system = start();
    let app = &system.app_client;

    app.navigate(PageState::Login).await.unwrap();
    app.fill(labels::USERNAME, "testuser").await.unwrap();

    // Same page: nothing is remounted.
    app.navigate(PageState::Login).await.unwrap();
    let screen = app.screen().await.unwrap();
    assert_eq!(screen.input(labels::USERNAME).unwrap().value.as_str(), "testuser");

    app.navigate(PageState::Home).await.unwrap();
    app.navigate(PageState::Login).await.unwrap();
    let screen = app.screen().await.unwrap();
    assert_eq!(screen.input(labels::USERNAME).unwrap().value.as_str(), "");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_driver_errors() {
    let system = start();
    let app = &system.app_client;

    assert_eq!(
        app.click(labels::LOAD_PRODUCTS).await,
        Err(AppError::ElementNotFound(labels::LOAD_PRODUCTS.to_string()))
    );
    assert_eq!(
        app.fill(labels::ADD_TO_CART, "x").await,
        Err(AppError::NotEditable(labels::ADD_TO_CART.to_string()))
    );
    assert_eq!(
        app.fill(labels::USERNAME, "x").await,
        Err(AppError::ElementNotFound(labels::USERNAME.to_string()))
    );
    assert_eq!(
        app.request_load().await,
        Err(AppError::PageNotMounted {
            required: PageState::Products,
            current: PageState::Home,
        })
    );

    system.shutdown().await.unwrap();
}

/// Commands from many clones are all applied; none is lost.
#[tokio::test]
async fn test_concurrent_clicks_are_all_applied() {
    let system = start();

    let mut handles = Vec::new();
    for _ in 0..50 {
        let app = system.app_client.clone();
        handles.push(tokio::spawn(async move { app.click(labels::ADD_TO_CART).await }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(system.app_client.cart_badge().await.unwrap(), "Cart (50 items)");
    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_with_pending_timers() {
    let system = start();
    let app = &system.app_client;

    app.navigate(PageState::Products).await.unwrap();
    app.request_load().await.unwrap();

    system.shutdown().await.unwrap();
}

/// A config built in code is checked before anything is spawned.
#[tokio::test]
async fn test_zero_mailbox_capacity_is_rejected() {
    let config = AppConfig {
        mailbox_capacity: 0,
        ..AppConfig::default()
    };
    let result = AppSystem::new(&config);
    assert!(matches!(
        result,
        Err(ConfigError::InvalidValue { ref key, .. }) if key == "mailbox_capacity"
    ));
}
