//! # Render Model
//!
//! [`render`] turns an [`AppView`](crate::app_actor::AppView) into a [`Screen`]: the
//! headings, controls and markers an external driver can see. Styling is not
//! modelled.
//!
//! The visible labels in [`labels`] and the markers in [`markers`] are the contract
//! surface for anything driving the app from outside (tests included). Changing
//! one is a breaking change.

mod render;

pub use render::render;

use crate::app_actor::{AppCommand, FieldValue};
use crate::model::CredentialField;

/// Visible text of every control.
pub mod labels {
    pub const HOME: &str = "Home";
    pub const PRODUCTS: &str = "Products";
    pub const LOGIN: &str = "Login";
    pub const LOG_IN: &str = "Log In";
    pub const SHOW_TERMS: &str = "Show Terms";
    pub const CLOSE: &str = "Close";
    pub const ADD_TO_CART: &str = "Add to Cart";
    pub const REMOVE_FROM_CART: &str = "Remove from Cart";
    pub const LOAD_PRODUCTS: &str = "Load Products";
    pub const USERNAME: &str = "Username";
    pub const PASSWORD: &str = "Password";
}

/// Stable identifying markers.
pub mod markers {
    /// Present exactly while products are loading.
    pub const LOADING_SPINNER: &str = "loading-spinner";
    /// One per loaded product.
    pub const PRODUCT_ITEM: &str = "product-item";
    /// The running cart count, text `Cart (<n> items)`.
    pub const CART_BADGE: &str = "cart-badge";
}

pub mod headings {
    pub const APP_TITLE: &str = "Playwright Test App";
    pub const HOME_PAGE: &str = "Home Page";
    pub const SHOP_ITEMS: &str = "Shop Items";
    pub const LOGIN: &str = "Login";
    pub const PRODUCTS: &str = "Products";
    pub const WELCOME: &str = "Welcome, Test User";
    pub const TERMS: &str = "Terms and Conditions";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub enabled: bool,
    /// Dispatched when the button is clicked.
    pub on_click: AppCommand,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub label: &'static str,
    pub field: CredentialField,
    pub value: FieldValue,
    /// Rendered masked.
    pub secret: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Heading { level: u8, text: String },
    Paragraph(String),
    Button(Button),
    Input(Input),
    Spinner { id: &'static str },
    ListItem { class: &'static str, text: String },
    Badge { class: &'static str, text: String },
}

/// Everything visible at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Screen {
    pub header: Vec<Element>,
    pub main: Vec<Element>,
    /// Modal content, drawn over everything else.
    pub overlay: Option<Vec<Element>>,
}

impl Screen {
    /// All elements in document order: header, main, then overlay.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.header
            .iter()
            .chain(self.main.iter())
            .chain(self.overlay.iter().flatten())
    }

    /// Elements a pointer can reach. While an overlay is shown it covers the
    /// rest of the screen, so only its own elements are reachable.
    pub fn reachable(&self) -> impl Iterator<Item = &Element> {
        let (header, main) = match self.overlay {
            Some(_) => (&[][..], &[][..]),
            None => (&self.header[..], &self.main[..]),
        };
        header.iter().chain(main.iter()).chain(self.overlay.iter().flatten())
    }

    /// Button whose visible label is exactly `label`, covered or not.
    pub fn button(&self, label: &str) -> Option<&Button> {
        find_button(self.elements(), label)
    }

    pub fn input(&self, label: &str) -> Option<&Input> {
        find_input(self.elements(), label)
    }

    pub fn reachable_button(&self, label: &str) -> Option<&Button> {
        find_button(self.reachable(), label)
    }

    pub fn reachable_input(&self, label: &str) -> Option<&Input> {
        find_input(self.reachable(), label)
    }

    pub fn has_heading(&self, text: &str) -> bool {
        self.elements()
            .any(|element| matches!(element, Element::Heading { text: t, .. } if t == text))
    }

    pub fn has_marker(&self, id: &str) -> bool {
        self.elements()
            .any(|element| matches!(element, Element::Spinner { id: marker } if *marker == id))
    }

    /// Texts of list items and badges carrying `class`, in document order.
    pub fn texts_by_class(&self, class: &str) -> Vec<&str> {
        self.elements()
            .filter_map(|element| match element {
                Element::ListItem { class: c, text } | Element::Badge { class: c, text } if *c == class => {
                    Some(text.as_str())
                }
                _ => None,
            })
            .collect()
    }

    pub fn text_by_class(&self, class: &str) -> Option<&str> {
        self.texts_by_class(class).into_iter().next()
    }
}

fn find_button<'a>(mut elements: impl Iterator<Item = &'a Element>, label: &str) -> Option<&'a Button> {
    elements.find_map(|element| match element {
        Element::Button(button) if button.label == label => Some(button),
        _ => None,
    })
}

fn find_input<'a>(mut elements: impl Iterator<Item = &'a Element>, label: &str) -> Option<&'a Input> {
    elements.find_map(|element| match element {
        Element::Input(input) if input.label == label => Some(input),
        _ => None,
    })
}
