use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// The page currently rendered. A closed set: there is no "unknown" page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageState {
    #[default]
    Home,
    Login,
    Dashboard,
    Products,
}

impl PageState {
    pub const ALL: [PageState; 4] = [
        PageState::Home,
        PageState::Login,
        PageState::Dashboard,
        PageState::Products,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PageState::Home => "home",
            PageState::Login => "login",
            PageState::Dashboard => "dashboard",
            PageState::Products => "products",
        }
    }
}

impl Display for PageState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageState {
    type Err = AppError;

    /// Exact, case-sensitive match. Anything else is rejected, never defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageState::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| AppError::UnknownPage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_pages() {
        for page in PageState::ALL {
            assert_eq!(page.as_str().parse::<PageState>().unwrap(), page);
        }
    }

    #[test]
    fn test_unknown_page_rejected() {
        assert_eq!(
            "settings".parse::<PageState>(),
            Err(AppError::UnknownPage("settings".to_string()))
        );
        assert!("Home".parse::<PageState>().is_err());
        assert!("".parse::<PageState>().is_err());
    }

    #[test]
    fn test_default_is_home() {
        assert_eq!(PageState::default(), PageState::Home);
    }
}
