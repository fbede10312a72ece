//! Single-step navigation history.
//!
//! [`NavigationState`] remembers the current screen, the one before it, and
//! the last book/collection a screen was opened for. Back buttons on detail
//! screens are origin-aware: they consult `previous` instead of always
//! returning to a fixed parent.

use crate::screen::Screen;

/// Book identifier in the catalog.
pub type BookId = u32;

/// Parameter passed alongside a transition to pick what the target shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    /// Opens a book (summary, reader).
    Book(BookId),
    /// Opens a collection by slug.
    Collection(String),
}

impl From<BookId> for Selector {
    fn from(id: BookId) -> Self {
        Self::Book(id)
    }
}

impl From<&str> for Selector {
    fn from(id: &str) -> Self {
        Self::Collection(id.to_string())
    }
}

impl From<String> for Selector {
    fn from(id: String) -> Self {
        Self::Collection(id)
    }
}

/// Destination and caption of a back button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackLink {
    pub screen: Screen,
    pub label: &'static str,
}

impl BackLink {
    fn new(screen: Screen, label: &'static str) -> Self {
        Self { screen, label }
    }
}

/// Current and previous screen plus the active selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    pub current: Screen,
    pub previous: Screen,
    pub selected_book_id: Option<BookId>,
    pub selected_collection_id: Option<String>,
}

impl NavigationState {
    /// Starts on the landing screen with `discover` as the nominal previous
    /// screen, so a back button rendered before any transition still has a
    /// sensible target.
    pub fn new() -> Self {
        Self {
            current: Screen::INITIAL,
            previous: Screen::HOME,
            selected_book_id: None,
            selected_collection_id: None,
        }
    }

    /// Moves to `screen`, shifting the current screen into `previous`.
    ///
    /// A book selector only touches `selected_book_id`; a collection selector
    /// only touches `selected_collection_id`. No validation is done against
    /// the current screen: any screen is reachable from any other.
    pub fn navigate_to(&mut self, screen: Screen, selector: Option<Selector>) {
        self.previous = self.current;
        self.current = screen;
        match selector {
            Some(Selector::Book(id)) => self.selected_book_id = Some(id),
            Some(Selector::Collection(id)) => self.selected_collection_id = Some(id),
            None => {}
        }
    }

    /// Where the back button of the current screen leads, if it has one.
    pub fn back_link(&self) -> Option<BackLink> {
        let link = match self.current {
            Screen::Summary => match self.previous {
                Screen::Discover => BackLink::new(Screen::Discover, "Back to Discover"),
                Screen::Library => BackLink::new(Screen::Library, "Back to Library"),
                Screen::CollectionDetail => {
                    BackLink::new(Screen::CollectionDetail, "Back to Collection")
                }
                _ => BackLink::new(Screen::Books, "Back to Books"),
            },
            Screen::CollectionDetail => match self.previous {
                Screen::Discover => BackLink::new(Screen::Discover, "Back to Discover"),
                _ => BackLink::new(Screen::Collections, "Back to Collections"),
            },
            Screen::ReadSummary => BackLink::new(Screen::Summary, "Back"),
            Screen::Payment => BackLink::new(Screen::Premium, "Back to Plans"),
            Screen::Achievements => BackLink::new(Screen::Profile, "Back to Profile"),
            Screen::CompletedBooks | Screen::MyFavorites => {
                BackLink::new(Screen::Library, "Back to Library")
            }
            Screen::ContinueReading => BackLink::new(Screen::Discover, "Back to Discover"),
            Screen::ForgotPassword => BackLink::new(Screen::Login, "Back to Login"),
            _ => return None,
        };
        Some(link)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(current: Screen, previous: Screen) -> NavigationState {
        NavigationState {
            current,
            previous,
            ..NavigationState::new()
        }
    }

    #[test]
    fn test_initial_state() {
        let nav = NavigationState::new();
        assert_eq!(nav.current, Screen::Landing);
        assert_eq!(nav.previous, Screen::Discover);
        assert_eq!(nav.selected_book_id, None);
        assert_eq!(nav.selected_collection_id, None);
    }

    #[test]
    fn test_previous_tracks_one_step() {
        let mut nav = NavigationState::new();
        let path = [
            Screen::Login,
            Screen::Discover,
            Screen::Summary,
            Screen::ReadSummary,
            Screen::Summary,
            Screen::Summary,
            Screen::Books,
        ];
        for screen in path {
            let before = nav.current;
            nav.navigate_to(screen, None);
            assert_eq!(nav.previous, before);
            assert_eq!(nav.current, screen);
        }
    }

    #[test]
    fn test_book_selector_leaves_collection() {
        let mut nav = NavigationState::new();
        nav.navigate_to(Screen::CollectionDetail, Some("finance".into()));
        nav.navigate_to(Screen::Summary, Some(Selector::Book(6)));
        assert_eq!(nav.selected_book_id, Some(6));
        assert_eq!(nav.selected_collection_id.as_deref(), Some("finance"));
    }

    #[test]
    fn test_collection_selector_leaves_book() {
        let mut nav = NavigationState::new();
        nav.navigate_to(Screen::Summary, Some(Selector::Book(3)));
        nav.navigate_to(Screen::CollectionDetail, Some("leadership".into()));
        assert_eq!(nav.selected_book_id, Some(3));
        assert_eq!(nav.selected_collection_id.as_deref(), Some("leadership"));
    }

    #[test]
    fn test_no_selector_keeps_both() {
        let mut nav = NavigationState::new();
        nav.navigate_to(Screen::Summary, Some(Selector::Book(3)));
        nav.navigate_to(Screen::Library, None);
        assert_eq!(nav.selected_book_id, Some(3));
    }

    #[test]
    fn test_summary_back_is_origin_aware() {
        for origin in [Screen::Discover, Screen::Library, Screen::CollectionDetail] {
            let link = at(Screen::Summary, origin).back_link().unwrap();
            assert_eq!(link.screen, origin);
        }
        for origin in Screen::ALL.into_iter().filter(|s| {
            !matches!(
                s,
                Screen::Discover | Screen::Library | Screen::CollectionDetail
            )
        }) {
            let link = at(Screen::Summary, origin).back_link().unwrap();
            assert_eq!(link.screen, Screen::Books, "origin {origin}");
        }
    }

    #[test]
    fn test_collection_detail_back() {
        let link = at(Screen::CollectionDetail, Screen::Discover)
            .back_link()
            .unwrap();
        assert_eq!(link.screen, Screen::Discover);
        assert_eq!(link.label, "Back to Discover");

        let link = at(Screen::CollectionDetail, Screen::Summary)
            .back_link()
            .unwrap();
        assert_eq!(link.screen, Screen::Collections);
    }

    #[test]
    fn test_fixed_back_links() {
        assert_eq!(
            at(Screen::Payment, Screen::Premium).back_link().unwrap().screen,
            Screen::Premium
        );
        assert_eq!(
            at(Screen::MyFavorites, Screen::Library)
                .back_link()
                .unwrap()
                .label,
            "Back to Library"
        );
        assert!(at(Screen::Discover, Screen::Landing).back_link().is_none());
    }
}
