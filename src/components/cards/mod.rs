//! Shared building blocks used across screens.

use kualala_core::catalog::{Book, Collection};
use kualala_core::{BookId, Screen};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::use_app;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/cards/cards.module.css");

/// Looks up books by id, keeping catalog order of `ids`.
pub fn books_for(ids: &[BookId]) -> Vec<Book> {
    use_app().with_catalog(|c| c.books_by_ids(ids).into_iter().cloned().collect())
}

// ============================================================================
// Books
// ============================================================================

/// Cover tile that opens the book summary.
#[component]
pub fn BookCard(
    book: Book,
    /// Percent read, shown as a bar under the title.
    #[prop(optional)]
    progress: Option<u8>,
    /// Secondary caption, e.g. "2 hours ago".
    #[prop(optional, into)]
    caption: Option<String>,
) -> impl IntoView {
    let ctx = use_app();
    let id = book.id;
    let cover = book.cover.css();
    let minutes = book.reading_time();

    view! {
        <button class=css::bookCard on:click=move |_| ctx.open(Screen::Summary, id)>
            <div class=css::cover style=format!("background: {cover}")>
                <span class=css::coverTitle>{book.title.clone()}</span>
            </div>
            <div class=css::bookMeta>
                <span class=css::bookTitle>{book.title}</span>
                <span class=css::bookAuthor>{book.author}</span>
                <span class=css::bookInfo>
                    <Icon icon=ic::CLOCK />
                    {minutes}
                    {book.rating.map(|r| view! {
                        <span class=css::rating>
                            <Icon icon=ic::STAR />
                            {format!("{r:.1}")}
                        </span>
                    })}
                </span>
                {progress.map(|p| view! { <ProgressBar percent=u32::from(p) /> })}
                {caption.map(|c| view! { <span class=css::caption>{c}</span> })}
            </div>
        </button>
    }
}

/// Responsive grid of [`BookCard`]s with an empty-state message.
#[component]
pub fn BookGrid(books: Vec<Book>, #[prop(into)] empty: String) -> impl IntoView {
    if books.is_empty() {
        return view! { <p class=css::empty>{empty}</p> }.into_any();
    }
    view! {
        <div class=css::grid>
            {books.into_iter().map(|book| view! { <BookCard book=book /> }).collect_view()}
        </div>
    }
    .into_any()
}

// ============================================================================
// Collections
// ============================================================================

#[component]
pub fn CollectionCard(collection: Collection) -> impl IntoView {
    let ctx = use_app();
    let id = collection.id.clone();
    let banner = collection.tone.css();

    view! {
        <button
            class=css::collectionCard
            on:click=move |_| ctx.open(Screen::CollectionDetail, id.clone())
        >
            <div class=css::banner style=format!("background: {banner}")>
                <span class=css::bannerIcon>{collection.icon}</span>
            </div>
            <div class=css::collectionBody>
                <span class=css::collectionName>{collection.name}</span>
                <span class=css::collectionDesc>{collection.description}</span>
                <span class=css::collectionCount>
                    {format!("{} books", collection.count)}
                    <Icon icon=ic::ARROW_RIGHT />
                </span>
            </div>
        </button>
    }
}

// ============================================================================
// Small pieces
// ============================================================================

#[component]
pub fn ProgressBar(percent: u32) -> impl IntoView {
    let width = percent.min(100);
    view! {
        <div class=css::progressTrack>
            <div class=css::progressFill style=format!("width: {width}%")></div>
        </div>
    }
}

/// Origin-aware back button for detail screens.
///
/// Renders nothing on screens without a back destination.
#[component]
pub fn BackButton() -> impl IntoView {
    let ctx = use_app();
    let link = Memo::new(move |_| ctx.state.with(|s| s.nav.back_link()));

    move || {
        link.get().map(|link| {
            let screen = link.screen;
            view! {
                <button class=css::back on:click=move |_| ctx.navigate(screen)>
                    <Icon icon=ic::CHEVRON_LEFT />
                    {link.label}
                </button>
            }
        })
    }
}

/// Screen title with an optional subtitle.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <header class=css::pageHeader>
            <h1 class=css::pageTitle>{title}</h1>
            {subtitle.map(|s| view! { <p class=css::pageSubtitle>{s}</p> })}
        </header>
    }
}

/// Label + value tile used by stats rows.
#[component]
pub fn StatTile(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(default = None)] note: Option<String>,
) -> impl IntoView {
    view! {
        <div class=css::stat>
            <span class=css::statLabel>{label}</span>
            <span class=css::statValue>{value}</span>
            {note.map(|n| view! { <span class=css::statNote>{n}</span> })}
        </div>
    }
}
