//! Screen router.
//!
//! The current [`Screen`] in [`AppState`](kualala_core::AppState) is the
//! source of truth; there is no URL routing. Signed-in sessions get the
//! navbar and footer around every screen, signed-out sessions see bare
//! public screens.
//!
//! Pages read their selectors once when built. The router rebuilds the page
//! whenever the [`ViewKey`](kualala_core::ViewKey) changes, so opening
//! another book from a summary gets a fresh summary.

use kualala_core::Screen;
use leptos::prelude::*;

use crate::app::use_app;
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::pages::*;
use crate::components::reader::ReadSummary;

stylance::import_crate_style!(css, "src/components/router.module.css");

// ============================================================================
// Main Router
// ============================================================================

#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_app();

    let view = Memo::new(move |_| ctx.view_key());
    let authenticated = Memo::new(move |_| ctx.is_authenticated());

    view! {
        {move || {
            if authenticated.get() {
                view! {
                    <div class=css::shell>
                        <Navbar />
                        <main class=css::main>{move || view.with(|v| screen_view(v.screen))}</main>
                        <Footer />
                    </div>
                }
                .into_any()
            } else {
                view! { <div class=css::public>{move || view.with(|v| screen_view(v.screen))}</div> }
                    .into_any()
            }
        }}
    }
}

/// Renders one screen.
fn screen_view(screen: Screen) -> AnyView {
    match screen {
        Screen::Landing => view! { <LandingPage /> }.into_any(),
        Screen::Login => view! { <LoginPage /> }.into_any(),
        Screen::Signup => view! { <SignupPage /> }.into_any(),
        Screen::ForgotPassword => view! { <ForgotPasswordPage /> }.into_any(),
        Screen::Terms => view! { <TermsPage /> }.into_any(),
        Screen::Privacy => view! { <PrivacyPage /> }.into_any(),
        Screen::Discover => view! { <DiscoverPage /> }.into_any(),
        Screen::Books => view! { <BooksPage /> }.into_any(),
        Screen::Summary => view! { <SummaryPage /> }.into_any(),
        Screen::Library => view! { <LibraryPage /> }.into_any(),
        Screen::Premium => view! { <PremiumPage /> }.into_any(),
        Screen::About => view! { <AboutPage /> }.into_any(),
        Screen::Profile => view! { <ProfilePage /> }.into_any(),
        Screen::Settings => view! { <SettingsPage /> }.into_any(),
        Screen::Collections => view! { <CollectionsPage /> }.into_any(),
        Screen::CollectionDetail => view! { <CollectionDetailPage /> }.into_any(),
        Screen::ReadSummary => view! { <ReadSummary /> }.into_any(),
        Screen::Payment => view! { <PaymentPage /> }.into_any(),
        Screen::CompletedBooks => view! { <CompletedBooksPage /> }.into_any(),
        Screen::MyFavorites => view! { <FavoritesPage /> }.into_any(),
        Screen::ContinueReading => view! { <ContinueReadingPage /> }.into_any(),
        Screen::Achievements => view! { <AchievementsPage /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use kualala_core::{Action, AppState, Screen};
    use leptos::prelude::*;

    fn signed_in_on(screen: Screen, book: u32) -> RwSignal<AppState> {
        let state = RwSignal::new(AppState::default());
        state.update(|s| {
            s.reduce(Action::Login);
            s.reduce(Action::open(screen, book));
        });
        state
    }

    #[test]
    fn test_opening_another_book_rebuilds_summary() {
        let state = signed_in_on(Screen::Summary, 1);
        let view = Memo::new(move |_| state.with(AppState::view_key));
        // A page reads its selector untracked, once per build.
        let shown = Memo::new(move |_| {
            view.track();
            state.with_untracked(|s| s.nav.selected_book_id)
        });
        assert_eq!(shown.get(), Some(1));

        state.update(|s| {
            s.reduce(Action::open(Screen::Summary, 5));
        });
        assert_eq!(shown.get(), Some(5));
    }

    #[test]
    fn test_new_search_rebuilds_books() {
        let state = signed_in_on(Screen::Discover, 1);
        state.update(|s| {
            s.reduce(Action::Search("habits".into()));
        });
        let view = Memo::new(move |_| state.with(AppState::view_key));
        let shown = Memo::new(move |_| {
            view.track();
            state.with_untracked(|s| s.search_query.clone())
        });
        assert_eq!(shown.get(), "habits");

        state.update(|s| {
            s.reduce(Action::Search("money".into()));
        });
        assert_eq!(shown.get(), "money");
    }

    #[test]
    fn test_dark_mode_keeps_the_page() {
        let state = signed_in_on(Screen::Summary, 2);
        let view = Memo::new(move |_| state.with(AppState::view_key));
        let before = view.get();
        state.update(|s| s.flags.is_dark_mode = !s.flags.is_dark_mode);
        assert_eq!(view.get(), before);
    }
}
