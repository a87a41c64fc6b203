use serde::{Deserialize, Serialize};

/// An entry of the simulated product catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// The fixed result of every simulated fetch, in display order.
pub fn catalog() -> Vec<Product> {
    vec![
        Product::new(1, "Laptop"),
        Product::new(2, "Mouse"),
        Product::new(3, "Keyboard"),
    ]
}

/// Progress of the simulated product fetch.
///
/// `Loading` carries no items, so "loading with a non-empty list" cannot be
/// represented.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Product>),
}

impl LoadState {
    /// Enters `Loading` from any state, discarding previously loaded items.
    pub fn begin(&mut self) {
        *self = LoadState::Loading;
    }

    pub fn complete(&mut self, items: Vec<Product>) {
        *self = LoadState::Loaded(items);
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn items(&self) -> &[Product] {
        match self {
            LoadState::Loaded(items) => items,
            LoadState::Idle | LoadState::Loading => &[],
        }
    }
}
