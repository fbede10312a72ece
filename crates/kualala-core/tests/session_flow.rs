//! End-to-end session scenarios driven through the reducer.

use kualala_core::catalog::{BookFilter, SelectedPlan};
use kualala_core::session::DARK_MODE_KEY;
use kualala_core::{
    Action, AppState, Catalog, FlagStore, MemoryFlagStore, MemoryPlatform, MockCatalog, ReaderState,
    Screen,
};

#[test]
fn test_login_open_book_and_back() {
    let platform = MemoryPlatform::new();
    let mut state = AppState::boot(&platform);
    assert_eq!(state.nav.current, Screen::Landing);
    assert!(!state.flags.is_authenticated);

    state.dispatch(Action::Login, &platform).unwrap();
    assert!(state.flags.is_authenticated);
    assert_eq!(state.nav.current, Screen::Discover);

    state
        .dispatch(Action::open(Screen::Summary, 42_u32), &platform)
        .unwrap();
    assert_eq!(state.nav.selected_book_id, Some(42));
    assert_eq!(state.nav.previous, Screen::Discover);

    state.dispatch(Action::Back, &platform).unwrap();
    assert_eq!(state.nav.current, Screen::Discover);
}

#[test]
fn test_previous_tracks_last_screen() {
    let platform = MemoryPlatform::new();
    let mut state = AppState::boot(&platform);
    state.dispatch(Action::Login, &platform).unwrap();

    let route = [
        Screen::Books,
        Screen::Collections,
        Screen::Library,
        Screen::Profile,
        Screen::Achievements,
        Screen::Settings,
    ];
    for screen in route {
        let before = state.nav.current;
        state.dispatch(Action::navigate(screen), &platform).unwrap();
        assert_eq!(state.nav.previous, before);
        assert_eq!(state.nav.current, screen);
    }
}

#[test]
fn test_selectors_are_independent() {
    let mut state = AppState::default();
    state.reduce(Action::Login);
    state.reduce(Action::open(Screen::CollectionDetail, "finance"));
    state.reduce(Action::open(Screen::Summary, 6_u32));
    assert_eq!(state.nav.selected_book_id, Some(6));
    assert_eq!(state.nav.selected_collection_id.as_deref(), Some("finance"));

    state.reduce(Action::Back);
    assert_eq!(state.nav.current, Screen::CollectionDetail);
    assert_eq!(state.nav.selected_collection_id.as_deref(), Some("finance"));
}

#[test]
fn test_dark_mode_survives_reload() {
    let platform = MemoryPlatform::new();
    let mut state = AppState::boot(&platform);
    state.dispatch(Action::ToggleDarkMode, &platform).unwrap();

    let reloaded = MemoryPlatform::with_store(MemoryFlagStore::with(
        DARK_MODE_KEY,
        &platform.read(DARK_MODE_KEY).unwrap(),
    ));
    let state = AppState::boot(&reloaded);
    assert!(state.flags.is_dark_mode);
    assert!(reloaded.dark_scope());
    assert!(!state.flags.is_authenticated);
}

#[test]
fn test_search_then_filter_catalog() {
    let catalog = MockCatalog::embedded().unwrap();
    let mut state = AppState::default();
    state.reduce(Action::Login);
    state.reduce(Action::Search("sinek".into()));
    assert_eq!(state.nav.current, Screen::Books);

    let found = BookFilter::new("All Books", &state.search_query).apply(catalog.books());
    assert!(found.len() >= 2);
    assert!(found.iter().all(|b| b.author == "Simon Sinek"));
}

#[test]
fn test_choose_plan_and_pay() {
    use kualala_core::{CardDetails, DemoPayments, PaymentGateway, PaymentRequest, PaymentStatus};

    let catalog = MockCatalog::embedded().unwrap();
    let mut state = AppState::default();
    state.reduce(Action::Login);
    state.reduce(Action::navigate(Screen::Premium));

    let yearly = catalog.plan("yearly").unwrap();
    state.reduce(Action::ChoosePlan(SelectedPlan::from(yearly)));
    assert_eq!(state.nav.current, Screen::Payment);
    assert_eq!(state.selected_plan.as_ref().map(|p| p.price.as_str()), Some("Rp399.000"));

    let gateway = DemoPayments::new(catalog.payment_methods());
    let status = gateway.submit(&PaymentRequest {
        method: "credit-card".into(),
        card: Some(CardDetails {
            number: "4111111111111111".into(),
            holder: "Pengguna Kualala".into(),
            expiry: "12/28".into(),
            cvv: "321".into(),
        }),
    });
    assert_eq!(status, Ok(PaymentStatus::Processing));
    assert_eq!(state.nav.current, Screen::Payment);
}

#[test]
fn test_reader_over_catalog_chapters() {
    let catalog = MockCatalog::embedded().unwrap();
    let chapters = catalog.chapters(1);
    let mut reader = ReaderState::new(chapters.len());
    while !reader.is_last() {
        reader.next_chapter();
    }
    assert_eq!(reader.chapter(), chapters.len() - 1);
    reader.mark_completed();
    assert!(reader.completed());
}
