//! [`ViewModel`] implementation for the whole application.
//!
//! Global state (active page, cart) lives directly on [`AppState`]. Page-local state
//! (the login form, the product fetch, the terms modal) lives in [`PageView`] and is
//! rebuilt from scratch whenever a different page is mounted. Mounting a new page
//! cancels every pending timer: all timers belong to the mounted page, so none of
//! them may touch the page that replaces it.

use super::commands::{AppCommand, AppEvent};
use crate::config::Timings;
use crate::error::AppError;
use crate::model::{catalog, CartCount, Credentials, LoadState, ModalGate, PageState, Product};
use crate::view::{render, Screen};
use async_trait::async_trait;
use state_actor::{Scheduler, ViewModel};
use tracing::{debug, info};

/// State local to the mounted page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    Home { terms: ModalGate },
    Login(Credentials),
    Dashboard,
    Products { load: LoadState },
}

impl PageView {
    /// Fresh state for `page`, as on first render.
    pub fn mount(page: PageState) -> Self {
        match page {
            PageState::Home => PageView::Home {
                terms: ModalGate::default(),
            },
            PageState::Login => PageView::Login(Credentials::default()),
            PageState::Dashboard => PageView::Dashboard,
            PageState::Products => PageView::Products {
                load: LoadState::default(),
            },
        }
    }
}

impl Default for PageView {
    fn default() -> Self {
        PageView::mount(PageState::default())
    }
}

/// Snapshot published after every message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppView {
    pub page: PageState,
    pub cart: CartCount,
    pub content: PageView,
}

impl AppView {
    pub fn is_loading(&self) -> bool {
        matches!(&self.content, PageView::Products { load } if load.is_loading())
    }

    /// Loaded products; empty unless the products page shows a finished fetch.
    pub fn products(&self) -> &[Product] {
        match &self.content {
            PageView::Products { load } => load.items(),
            _ => &[],
        }
    }

    pub fn terms_visible(&self) -> bool {
        matches!(&self.content, PageView::Home { terms } if terms.is_visible())
    }

    pub fn can_submit(&self) -> bool {
        matches!(&self.content, PageView::Login(creds) if creds.can_submit())
    }

    pub fn cart_badge(&self) -> String {
        self.cart.badge_text()
    }

    pub fn screen(&self) -> Screen {
        render(self)
    }
}

/// The single owner of all application state.
#[derive(Debug, Default)]
pub struct AppState {
    page: PageState,
    cart: CartCount,
    view: PageView,
}

impl AppState {
    fn apply(
        &mut self,
        command: AppCommand,
        timers: &mut Scheduler<Self>,
        timings: &Timings,
    ) -> Result<(), AppError> {
        match command {
            AppCommand::Navigate(target) => self.navigate(target, timers),
            AppCommand::IncrementCart => {
                self.cart.increment();
                info!(cart = %self.cart, "Added to cart");
            }
            AppCommand::DecrementCart => {
                self.cart.decrement();
                info!(cart = %self.cart, "Removed from cart");
            }
            AppCommand::EditCredential { field, value } => {
                self.login_form()?.set(field, value.into_inner());
            }
            AppCommand::SubmitLogin => {
                if !self.login_form()?.can_submit() {
                    return Err(AppError::LoginIncomplete);
                }
                info!("Login submitted");
                self.navigate(PageState::Dashboard, timers);
            }
            AppCommand::RequestLoad => {
                self.products_load()?.begin();
                let task = timers.schedule(timings.load_delay(), AppEvent::ProductsLoaded);
                info!(%task, pending = timers.pending(), "Loading products");
            }
            AppCommand::ShowTerms => {
                let terms = self.terms()?;
                if !terms.accepts_show() {
                    debug!(visible = terms.is_visible(), "Terms already shown or pending");
                    return Ok(());
                }
                let task = timers.schedule(timings.modal_delay(), AppEvent::TermsRevealed);
                terms.arm(task);
                debug!(%task, "Terms reveal scheduled");
            }
            AppCommand::HideTerms => {
                if let Some(task) = self.terms()?.hide() {
                    timers.cancel(task);
                }
                info!("Terms hidden");
            }
            AppCommand::Click(label) => {
                let screen = render(&self.snapshot());
                let button = match screen.reachable_button(&label) {
                    Some(button) => button,
                    None if screen.button(&label).is_some() => {
                        return Err(AppError::ElementCovered(label))
                    }
                    None => return Err(AppError::ElementNotFound(label)),
                };
                if !button.enabled {
                    return Err(AppError::ElementDisabled(label));
                }
                let command = button.on_click.clone();
                debug!(%label, ?command, "Click");
                return self.apply(command, timers, timings);
            }
            AppCommand::Fill { label, value } => {
                let screen = render(&self.snapshot());
                let field = match screen.reachable_input(&label) {
                    Some(input) => input.field,
                    None if screen.reachable_button(&label).is_some() => {
                        return Err(AppError::NotEditable(label))
                    }
                    None if screen.input(&label).is_some() || screen.button(&label).is_some() => {
                        return Err(AppError::ElementCovered(label))
                    }
                    None => return Err(AppError::ElementNotFound(label)),
                };
                return self.apply(AppCommand::EditCredential { field, value }, timers, timings);
            }
        }
        Ok(())
    }

    fn navigate(&mut self, target: PageState, timers: &mut Scheduler<Self>) {
        if target == self.page {
            debug!(page = %target, "Already on page");
            return;
        }
        let cancelled = timers.cancel_all();
        info!(from = %self.page, to = %target, cancelled, "Navigate");
        self.page = target;
        self.view = PageView::mount(target);
    }

    fn login_form(&mut self) -> Result<&mut Credentials, AppError> {
        match &mut self.view {
            PageView::Login(creds) => Ok(creds),
            _ => Err(AppError::PageNotMounted {
                required: PageState::Login,
                current: self.page,
            }),
        }
    }

    fn products_load(&mut self) -> Result<&mut LoadState, AppError> {
        match &mut self.view {
            PageView::Products { load } => Ok(load),
            _ => Err(AppError::PageNotMounted {
                required: PageState::Products,
                current: self.page,
            }),
        }
    }

    fn terms(&mut self) -> Result<&mut ModalGate, AppError> {
        match &mut self.view {
            PageView::Home { terms } => Ok(terms),
            _ => Err(AppError::PageNotMounted {
                required: PageState::Home,
                current: self.page,
            }),
        }
    }
}

#[async_trait]
impl ViewModel for AppState {
    type Command = AppCommand;
    type Event = AppEvent;
    type Snapshot = AppView;
    type Context = Timings;
    type Error = AppError;

    fn snapshot(&self) -> AppView {
        AppView {
            page: self.page,
            cart: self.cart,
            content: self.view.clone(),
        }
    }

    async fn handle_command(
        &mut self,
        command: AppCommand,
        timers: &mut Scheduler<Self>,
        timings: &Timings,
    ) -> Result<(), AppError> {
        self.apply(command, timers, timings)
    }

    async fn handle_event(
        &mut self,
        event: AppEvent,
        _timers: &mut Scheduler<Self>,
        _timings: &Timings,
    ) -> Result<(), AppError> {
        match (event, &mut self.view) {
            (AppEvent::ProductsLoaded, PageView::Products { load }) => {
                load.complete(catalog());
                info!(items = load.items().len(), "Products loaded");
            }
            (AppEvent::TermsRevealed, PageView::Home { terms }) => {
                terms.reveal();
                info!("Terms shown");
            }
            (event, _) => {
                debug!(?event, page = %self.page, "Completion for unmounted page ignored");
            }
        }
        Ok(())
    }
}
