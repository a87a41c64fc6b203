use super::{headings, labels, markers, Button, Element, Input, Screen};
use crate::app_actor::{AppCommand, AppView, PageView};
use crate::model::{CredentialField, Credentials, LoadState, ModalGate, PageState};

/// Pure projection of the state onto what is visible.
pub fn render(view: &AppView) -> Screen {
    let mut screen = Screen {
        header: header(view),
        ..Screen::default()
    };

    match &view.content {
        PageView::Home { terms } => home(terms, &mut screen),
        PageView::Login(creds) => screen.main = login(creds),
        PageView::Dashboard => screen.main = dashboard(),
        PageView::Products { load } => screen.main = products(load),
    }
    screen
}

fn button(label: &'static str, on_click: AppCommand) -> Element {
    Element::Button(Button {
        label,
        enabled: true,
        on_click,
    })
}

fn heading(level: u8, text: &str) -> Element {
    Element::Heading {
        level,
        text: text.to_string(),
    }
}

fn header(view: &AppView) -> Vec<Element> {
    vec![
        heading(1, headings::APP_TITLE),
        button(labels::HOME, AppCommand::Navigate(PageState::Home)),
        button(labels::PRODUCTS, AppCommand::Navigate(PageState::Products)),
        button(labels::LOGIN, AppCommand::Navigate(PageState::Login)),
        Element::Badge {
            class: markers::CART_BADGE,
            text: view.cart_badge(),
        },
    ]
}

fn home(terms: &ModalGate, screen: &mut Screen) {
    screen.main = vec![
        heading(2, headings::HOME_PAGE),
        Element::Paragraph("This is the main page of our test application.".to_string()),
        button(labels::SHOW_TERMS, AppCommand::ShowTerms),
        heading(3, headings::SHOP_ITEMS),
        button(labels::ADD_TO_CART, AppCommand::IncrementCart),
        button(labels::REMOVE_FROM_CART, AppCommand::DecrementCart),
    ];
    if terms.is_visible() {
        screen.overlay = Some(vec![
            heading(3, headings::TERMS),
            Element::Paragraph("Here are the terms and conditions. They are very important.".to_string()),
            button(labels::CLOSE, AppCommand::HideTerms),
        ]);
    }
}

fn login(creds: &Credentials) -> Vec<Element> {
    let input = |label, field, secret| {
        Element::Input(Input {
            label,
            field,
            value: creds.get(field).into(),
            secret,
        })
    };
    vec![
        heading(2, headings::LOGIN),
        input(labels::USERNAME, CredentialField::Username, false),
        input(labels::PASSWORD, CredentialField::Password, true),
        Element::Button(Button {
            label: labels::LOG_IN,
            enabled: creds.can_submit(),
            on_click: AppCommand::SubmitLogin,
        }),
    ]
}

fn dashboard() -> Vec<Element> {
    vec![
        heading(1, headings::WELCOME),
        Element::Paragraph("You have successfully logged in.".to_string()),
    ]
}

fn products(load: &LoadState) -> Vec<Element> {
    let mut main = vec![
        heading(2, headings::PRODUCTS),
        button(labels::LOAD_PRODUCTS, AppCommand::RequestLoad),
    ];
    if load.is_loading() {
        main.push(Element::Spinner {
            id: markers::LOADING_SPINNER,
        });
    }
    main.extend(load.items().iter().map(|product| Element::ListItem {
        class: markers::PRODUCT_ITEM,
        text: product.name.clone(),
    }));
    main
}
