//! Root application state and its reducer.
//!
//! Every mutation of session-wide state goes through [`AppState::reduce`],
//! which returns the side effects the host must perform. [`AppState::dispatch`]
//! runs those effects against a [`Platform`] in order.

use std::cell::Cell;

use crate::catalog::SelectedPlan;
use crate::error::StorageError;
use crate::navigation::{NavigationState, Selector};
use crate::screen::Screen;
use crate::session::{DARK_MODE_KEY, FlagStore, MemoryFlagStore, SessionFlags, encode_flag};

// =============================================================================
// Actions and effects
// =============================================================================

/// Everything a screen can ask the root to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Navigate {
        screen: Screen,
        selector: Option<Selector>,
    },
    /// Follows the current screen's back link. No-op on screens without one.
    Back,
    Login,
    Signup,
    Logout,
    ToggleDarkMode,
    /// Stores the query and opens the books listing.
    Search(String),
    /// Stores the plan and opens the payment screen.
    ChoosePlan(SelectedPlan),
}

impl Action {
    pub fn navigate(screen: Screen) -> Self {
        Self::Navigate {
            screen,
            selector: None,
        }
    }

    pub fn open(screen: Screen, selector: impl Into<Selector>) -> Self {
        Self::Navigate {
            screen,
            selector: Some(selector.into()),
        }
    }
}

/// Host-side work requested by the reducer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    ScrollToTop,
    /// Write the dark-mode flag to the durable store.
    PersistDarkMode(bool),
    /// Add or remove the dark theme scope on the document root.
    SetDarkScope(bool),
}

/// Host capabilities the reducer's effects need.
pub trait Platform: FlagStore {
    fn scroll_to_top(&self);
    fn set_dark_scope(&self, enabled: bool);
}

/// What the router is showing: the visible screen plus the input it was
/// built from. Two equal keys render the same page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewKey {
    pub screen: Screen,
    /// Book or collection the screen was opened for, if it shows one.
    pub subject: Option<Selector>,
    /// Search query handed to the books listing.
    pub query: Option<String>,
}

// =============================================================================
// AppState
// =============================================================================

/// State owned by the application root and shared with every screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub nav: NavigationState,
    pub flags: SessionFlags,
    /// Last query submitted from the navbar search box.
    pub search_query: String,
    /// Plan carried from the premium screen to the payment screen.
    pub selected_plan: Option<SelectedPlan>,
}

impl AppState {
    /// Fresh session with the persisted dark-mode preference applied.
    pub fn restore(store: &(impl FlagStore + ?Sized)) -> Self {
        Self {
            flags: SessionFlags::load(store),
            ..Self::default()
        }
    }

    /// Effects that bring the host in line with a restored state.
    pub fn startup_effects(&self) -> Vec<Effect> {
        vec![Effect::SetDarkScope(self.flags.is_dark_mode)]
    }

    /// Restores from `platform` and applies the startup effects to it.
    pub fn boot<P>(platform: &P) -> Self
    where
        P: Platform + ?Sized,
    {
        let mut state = Self::restore(platform);
        let effects = state.startup_effects();
        if let Err(err) = state.run(effects, platform) {
            log::warn!("startup effects failed: {err}");
        }
        state
    }

    /// Screen the router shows. Auth-only screens fall back to landing for a
    /// signed-out session; navigation state is left as it is.
    pub fn visible_screen(&self) -> Screen {
        let current = self.nav.current;
        if current.requires_auth() && !self.flags.is_authenticated {
            Screen::Landing
        } else {
            current
        }
    }

    /// Key the router rebuilds on. Only the parameters the visible screen
    /// reads are part of it, so unrelated state changes keep the page.
    pub fn view_key(&self) -> ViewKey {
        let screen = self.visible_screen();
        let subject = match screen {
            Screen::Summary | Screen::ReadSummary => {
                self.nav.selected_book_id.map(Selector::Book)
            }
            Screen::CollectionDetail => self
                .nav
                .selected_collection_id
                .clone()
                .map(Selector::Collection),
            _ => None,
        };
        let query = (screen == Screen::Books).then(|| self.search_query.clone());
        ViewKey {
            screen,
            subject,
            query,
        }
    }

    /// Applies an action to in-memory state and returns the effects to run.
    pub fn reduce(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Navigate { screen, selector } => self.go(screen, selector),
            Action::Back => match self.nav.back_link() {
                Some(link) => self.go(link.screen, None),
                None => Vec::new(),
            },
            Action::Login | Action::Signup => {
                self.flags.is_authenticated = true;
                log::debug!("session authenticated");
                self.go(Screen::HOME, None)
            }
            Action::Logout => {
                self.flags.is_authenticated = false;
                self.search_query.clear();
                self.selected_plan = None;
                log::debug!("session signed out");
                self.go(Screen::Landing, None)
            }
            Action::ToggleDarkMode => {
                let enabled = !self.flags.is_dark_mode;
                self.flags.is_dark_mode = enabled;
                vec![Effect::PersistDarkMode(enabled), Effect::SetDarkScope(enabled)]
            }
            Action::Search(query) => {
                self.search_query = query;
                self.go(Screen::Books, None)
            }
            Action::ChoosePlan(plan) => {
                self.selected_plan = Some(plan);
                self.go(Screen::Payment, None)
            }
        }
    }

    /// Reduces `action` and runs its effects.
    ///
    /// A failed dark-mode write rolls the flag back and stops before the
    /// theme scope is touched, so flag, store and document stay in step.
    pub fn dispatch<P>(&mut self, action: Action, platform: &P) -> Result<(), StorageError>
    where
        P: Platform + ?Sized,
    {
        let effects = self.reduce(action);
        self.run(effects, platform)
    }

    fn run<P>(&mut self, effects: Vec<Effect>, platform: &P) -> Result<(), StorageError>
    where
        P: Platform + ?Sized,
    {
        for effect in effects {
            match effect {
                Effect::ScrollToTop => platform.scroll_to_top(),
                Effect::SetDarkScope(enabled) => platform.set_dark_scope(enabled),
                Effect::PersistDarkMode(enabled) => {
                    if let Err(err) = platform.write(DARK_MODE_KEY, encode_flag(enabled)) {
                        self.flags.is_dark_mode = !enabled;
                        log::warn!("dark mode not saved: {err}");
                        return Err(err);
                    }
                }
            }
        }
        Ok(())
    }

    fn go(&mut self, screen: Screen, selector: Option<Selector>) -> Vec<Effect> {
        // A chosen plan only lives for one visit to the payment screen.
        if self.nav.current == Screen::Payment && screen != Screen::Payment {
            self.selected_plan = None;
        }
        log::debug!("navigate {} -> {screen}", self.nav.current);
        self.nav.navigate_to(screen, selector);
        vec![Effect::ScrollToTop]
    }
}

// =============================================================================
// MemoryPlatform
// =============================================================================

/// Headless [`Platform`] that records what it was asked to do.
#[derive(Debug, Default)]
pub struct MemoryPlatform {
    pub store: MemoryFlagStore,
    scrolls: Cell<usize>,
    dark_scope: Cell<bool>,
}

impl MemoryPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: MemoryFlagStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    /// Number of scroll-to-top requests so far.
    pub fn scrolls(&self) -> usize {
        self.scrolls.get()
    }

    pub fn dark_scope(&self) -> bool {
        self.dark_scope.get()
    }
}

impl FlagStore for MemoryPlatform {
    fn read(&self, key: &str) -> Option<String> {
        self.store.read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.store.write(key, value)
    }
}

impl Platform for MemoryPlatform {
    fn scroll_to_top(&self) {
        self.scrolls.set(self.scrolls.get() + 1);
    }

    fn set_dark_scope(&self, enabled: bool) {
        self.dark_scope.set(enabled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> SelectedPlan {
        SelectedPlan {
            name: "Monthly".into(),
            price: "Rp49.000".into(),
            period: "/bulan".into(),
            original_price: None,
        }
    }

    fn signed_in() -> AppState {
        let mut state = AppState::default();
        state.reduce(Action::Login);
        state
    }

    #[test]
    fn test_restore_reads_dark_mode() {
        let store = MemoryFlagStore::with(DARK_MODE_KEY, "true");
        let state = AppState::restore(&store);
        assert!(state.flags.is_dark_mode);
        assert!(!state.flags.is_authenticated);
        assert_eq!(state.nav.current, Screen::Landing);
        assert_eq!(state.startup_effects(), vec![Effect::SetDarkScope(true)]);
    }

    #[test]
    fn test_boot_applies_dark_scope() {
        let platform = MemoryPlatform::with_store(MemoryFlagStore::with(DARK_MODE_KEY, "true"));
        let state = AppState::boot(&platform);
        assert!(state.flags.is_dark_mode);
        assert!(platform.dark_scope());
        assert_eq!(platform.scrolls(), 0);
    }

    #[test]
    fn test_login_and_signup_open_discover() {
        for action in [Action::Login, Action::Signup] {
            let mut state = AppState::default();
            let effects = state.reduce(action);
            assert!(state.flags.is_authenticated);
            assert_eq!(state.nav.current, Screen::Discover);
            assert_eq!(state.nav.previous, Screen::Landing);
            assert_eq!(effects, vec![Effect::ScrollToTop]);
        }
    }

    #[test]
    fn test_logout_returns_to_landing_and_clears_session_data() {
        let mut state = signed_in();
        state.reduce(Action::Search("habits".into()));
        state.reduce(Action::ChoosePlan(plan()));
        state.reduce(Action::Logout);
        assert!(!state.flags.is_authenticated);
        assert_eq!(state.nav.current, Screen::Landing);
        assert!(state.search_query.is_empty());
        assert!(state.selected_plan.is_none());
    }

    #[test]
    fn test_every_navigation_scrolls_to_top() {
        let platform = MemoryPlatform::new();
        let mut state = signed_in();
        state.dispatch(Action::navigate(Screen::Books), &platform).unwrap();
        state.dispatch(Action::open(Screen::Summary, 3_u32), &platform).unwrap();
        state.dispatch(Action::Back, &platform).unwrap();
        assert_eq!(platform.scrolls(), 3);
        assert_eq!(state.nav.current, Screen::Books);
    }

    #[test]
    fn test_back_without_link_is_noop() {
        let mut state = signed_in();
        let before = state.clone();
        assert!(state.reduce(Action::Back).is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn test_back_from_reader_keeps_book() {
        let mut state = signed_in();
        state.reduce(Action::open(Screen::Summary, 7_u32));
        state.reduce(Action::navigate(Screen::ReadSummary));
        state.reduce(Action::Back);
        assert_eq!(state.nav.current, Screen::Summary);
        assert_eq!(state.nav.selected_book_id, Some(7));
    }

    #[test]
    fn test_search_opens_books() {
        let mut state = signed_in();
        state.reduce(Action::Search("clear".into()));
        assert_eq!(state.search_query, "clear");
        assert_eq!(state.nav.current, Screen::Books);
    }

    #[test]
    fn test_plan_cleared_after_leaving_payment() {
        let mut state = signed_in();
        state.reduce(Action::navigate(Screen::Premium));
        state.reduce(Action::ChoosePlan(plan()));
        assert_eq!(state.nav.current, Screen::Payment);
        assert_eq!(state.selected_plan, Some(plan()));

        state.reduce(Action::Back);
        assert_eq!(state.nav.current, Screen::Premium);
        assert!(state.selected_plan.is_none());
    }

    #[test]
    fn test_toggle_dark_mode_persists_and_scopes() {
        let platform = MemoryPlatform::new();
        let mut state = AppState::restore(&platform);

        state.dispatch(Action::ToggleDarkMode, &platform).unwrap();
        assert!(state.flags.is_dark_mode);
        assert_eq!(platform.read(DARK_MODE_KEY).as_deref(), Some("true"));
        assert!(platform.dark_scope());

        state.dispatch(Action::ToggleDarkMode, &platform).unwrap();
        assert!(!state.flags.is_dark_mode);
        assert_eq!(platform.read(DARK_MODE_KEY).as_deref(), Some("false"));
        assert!(!platform.dark_scope());
    }

    #[test]
    fn test_failed_write_rolls_back() {
        let platform = MemoryPlatform::with_store(MemoryFlagStore::with(DARK_MODE_KEY, "false"));
        platform.store.fail_writes(true);
        let mut state = AppState::restore(&platform);

        let result = state.dispatch(Action::ToggleDarkMode, &platform);
        assert!(matches!(result, Err(StorageError::WriteFailed { .. })));
        assert!(!state.flags.is_dark_mode);
        assert_eq!(platform.read(DARK_MODE_KEY).as_deref(), Some("false"));
        assert!(!platform.dark_scope());
    }

    #[test]
    fn test_visible_screen_guards_auth_only_screens() {
        let mut state = AppState::default();
        state.reduce(Action::navigate(Screen::Library));
        assert_eq!(state.nav.current, Screen::Library);
        assert_eq!(state.visible_screen(), Screen::Landing);

        state.reduce(Action::navigate(Screen::Terms));
        assert_eq!(state.visible_screen(), Screen::Terms);

        state.reduce(Action::Login);
        assert_eq!(state.visible_screen(), Screen::Discover);
    }

    #[test]
    fn test_view_key_changes_for_another_book() {
        let mut state = signed_in();
        state.reduce(Action::open(Screen::Summary, 1_u32));
        let first = state.view_key();
        assert_eq!(first.subject, Some(Selector::Book(1)));

        state.reduce(Action::open(Screen::Summary, 5_u32));
        let second = state.view_key();
        assert_eq!(second.screen, first.screen);
        assert_eq!(second.subject, Some(Selector::Book(5)));
        assert_ne!(first, second);
    }

    #[test]
    fn test_view_key_changes_for_new_search_on_books() {
        let mut state = signed_in();
        state.reduce(Action::Search("habits".into()));
        let first = state.view_key();
        assert_eq!(first.screen, Screen::Books);
        assert_eq!(first.query.as_deref(), Some("habits"));

        state.reduce(Action::Search("money".into()));
        assert_eq!(state.view_key().query.as_deref(), Some("money"));
    }

    #[test]
    fn test_view_key_ignores_unrelated_state() {
        let platform = MemoryPlatform::new();
        let mut state = signed_in();
        state.reduce(Action::open(Screen::Summary, 3_u32));
        let key = state.view_key();

        state.dispatch(Action::ToggleDarkMode, &platform).unwrap();
        assert_eq!(state.view_key(), key);

        // Discover does not read the book selector.
        state.reduce(Action::navigate(Screen::Discover));
        assert_eq!(state.view_key().subject, None);
        assert_eq!(state.view_key().query, None);
    }

    #[test]
    fn test_view_key_for_collection_detail() {
        let mut state = signed_in();
        state.reduce(Action::open(Screen::CollectionDetail, "self-improvement"));
        assert_eq!(
            state.view_key().subject,
            Some(Selector::Collection("self-improvement".into()))
        );
    }
}
