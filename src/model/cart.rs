use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Number of items in the cart. Never negative; decrementing at zero is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CartCount(u32);

impl CartCount {
    pub fn get(self) -> u32 {
        self.0
    }

    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }

    /// Text of the cart badge. Always "items", including for a count of 1.
    pub fn badge_text(self) -> String {
        format!("Cart ({} items)", self.0)
    }
}

impl Display for CartCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
