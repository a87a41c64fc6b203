//! Messages understood by the app actor.

use crate::model::{CredentialField, PageState};
use std::fmt::Debug;

/// Text typed into a form field. Its `Debug` output shows only the length.
#[derive(Clone, PartialEq, Eq)]
pub struct FieldValue(String);

impl FieldValue {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Debug for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FieldValue({} chars)", self.0.chars().count())
    }
}

/// User intent.
///
/// The first group maps one-to-one onto the controller operations. `Click` and
/// `Fill` address controls by their visible label and are resolved against the
/// screen rendered at the moment the command is processed. While a modal is open
/// only its own controls can be clicked; everything under it is covered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    Navigate(PageState),
    IncrementCart,
    DecrementCart,
    /// Login page only.
    EditCredential {
        field: CredentialField,
        value: FieldValue,
    },
    /// Login page only. Rejected unless both fields are filled.
    SubmitLogin,
    /// Products page only.
    RequestLoad,
    /// Home page only.
    ShowTerms,
    /// Home page only.
    HideTerms,
    Click(String),
    Fill {
        label: String,
        value: FieldValue,
    },
}

/// Timer completions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    ProductsLoaded,
    TermsRevealed,
}
