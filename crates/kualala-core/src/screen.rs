//! Screen identifiers.
//!
//! A [`Screen`] names one full-page view. Exactly one screen is current at a
//! time; which one is decided by [`crate::NavigationState`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownScreen;

/// One of the fixed full-page views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    Landing,
    Login,
    Signup,
    ForgotPassword,
    Discover,
    Books,
    Summary,
    Library,
    Premium,
    About,
    Profile,
    Settings,
    Collections,
    CollectionDetail,
    ReadSummary,
    Payment,
    CompletedBooks,
    MyFavorites,
    ContinueReading,
    Achievements,
    Terms,
    Privacy,
}

impl Screen {
    /// Every screen, in declaration order.
    pub const ALL: [Screen; 22] = [
        Screen::Landing,
        Screen::Login,
        Screen::Signup,
        Screen::ForgotPassword,
        Screen::Discover,
        Screen::Books,
        Screen::Summary,
        Screen::Library,
        Screen::Premium,
        Screen::About,
        Screen::Profile,
        Screen::Settings,
        Screen::Collections,
        Screen::CollectionDetail,
        Screen::ReadSummary,
        Screen::Payment,
        Screen::CompletedBooks,
        Screen::MyFavorites,
        Screen::ContinueReading,
        Screen::Achievements,
        Screen::Terms,
        Screen::Privacy,
    ];

    /// Screen shown at process start.
    pub const INITIAL: Screen = Screen::Landing;

    /// Screen a freshly authenticated session lands on.
    pub const HOME: Screen = Screen::Discover;

    /// Kebab-case name, e.g. `collection-detail`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Login => "login",
            Self::Signup => "signup",
            Self::ForgotPassword => "forgot-password",
            Self::Discover => "discover",
            Self::Books => "books",
            Self::Summary => "summary",
            Self::Library => "library",
            Self::Premium => "premium",
            Self::About => "about",
            Self::Profile => "profile",
            Self::Settings => "settings",
            Self::Collections => "collections",
            Self::CollectionDetail => "collection-detail",
            Self::ReadSummary => "read-summary",
            Self::Payment => "payment",
            Self::CompletedBooks => "completed-books",
            Self::MyFavorites => "my-favorites",
            Self::ContinueReading => "continue-reading",
            Self::Achievements => "achievements",
            Self::Terms => "terms",
            Self::Privacy => "privacy",
        }
    }

    /// Screens reachable without signing in.
    pub fn is_public(self) -> bool {
        matches!(
            self,
            Self::Landing
                | Self::Login
                | Self::Signup
                | Self::ForgotPassword
                | Self::Terms
                | Self::Privacy
        )
    }

    /// Screens that require an authenticated session.
    pub fn requires_auth(self) -> bool {
        !self.is_public()
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Screen {
    type Err = UnknownScreen;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|screen| screen.as_str() == s)
            .ok_or_else(|| UnknownScreen(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_parse_back() {
        for screen in Screen::ALL {
            assert_eq!(screen.as_str().parse::<Screen>(), Ok(screen));
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            "home".parse::<Screen>(),
            Err(UnknownScreen("home".to_string()))
        );
    }

    #[test]
    fn test_public_screens() {
        let public: Vec<_> = Screen::ALL.into_iter().filter(|s| s.is_public()).collect();
        assert_eq!(
            public,
            vec![
                Screen::Landing,
                Screen::Login,
                Screen::Signup,
                Screen::ForgotPassword,
                Screen::Terms,
                Screen::Privacy,
            ]
        );
        assert!(Screen::ReadSummary.requires_auth());
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&Screen::CollectionDetail).unwrap();
        assert_eq!(json, "\"collection-detail\"");
        let back: Screen = serde_json::from_str("\"read-summary\"").unwrap();
        assert_eq!(back, Screen::ReadSummary);
    }
}
