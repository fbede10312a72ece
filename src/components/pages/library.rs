//! My Library and its sub-lists.

use kualala_core::Screen;
use kualala_core::catalog::{Book, ReadingProgress};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::use_app;
use crate::components::cards::{BackButton, BookGrid, PageHeader, ProgressBar, StatTile, books_for};
use crate::components::icons as ic;

stylance::import_crate_style!(page, "src/components/pages/pages.module.css");

/// Items previewed per library section.
const PREVIEW_LIMIT: usize = 4;

/// Reading entries joined with their books, skipping unknown ids.
fn reading_list(limit: usize) -> Vec<(Book, ReadingProgress)> {
    use_app().with_catalog(|c| {
        c.reading()
            .iter()
            .filter_map(|r| c.book(r.book_id).map(|b| (b.clone(), r.clone())))
            .take(limit)
            .collect()
    })
}

#[component]
pub fn LibraryPage() -> impl IntoView {
    let ctx = use_app();
    let stats = ctx.with_catalog(|c| c.library_stats().to_vec());
    let reading = reading_list(PREVIEW_LIMIT);
    let completed = ctx.with_catalog(|c| c.completed().to_vec());
    let favorites = ctx.with_catalog(|c| c.favorites().to_vec());
    let completed = books_for(&completed[..completed.len().min(PREVIEW_LIMIT)]);
    let favorites = books_for(&favorites[..favorites.len().min(PREVIEW_LIMIT)]);

    view! {
        <div class=page::page>
            <PageHeader title="Library" subtitle="Koleksi bacaan dan progres kamu" />

            <div class=page::stats>
                {stats
                    .into_iter()
                    .map(|s| view! { <StatTile label=s.label value=s.value note=s.note /> })
                    .collect_view()}
            </div>

            <LibrarySection title="Continue Reading" target=Screen::ContinueReading>
                <ReadingRows entries=reading />
            </LibrarySection>
            <LibrarySection title="Completed" target=Screen::CompletedBooks>
                <BookGrid books=completed empty="No completed books yet" />
            </LibrarySection>
            <LibrarySection title="Saved" target=Screen::MyFavorites>
                <BookGrid books=favorites empty="No saved books yet" />
            </LibrarySection>

            <div class=page::panel>
                <h2 class=page::sectionTitle>"Explore More Books!"</h2>
                <p class=page::muted>"Temukan ringkasan baru untuk dibaca minggu ini."</p>
                <button class=page::primary on:click=move |_| ctx.navigate(Screen::Discover)>
                    "Go to Discover"
                    <Icon icon=ic::ARROW_RIGHT />
                </button>
            </div>
        </div>
    }
}

#[component]
fn LibrarySection(title: &'static str, target: Screen, children: Children) -> impl IntoView {
    let ctx = use_app();
    view! {
        <section class=page::section>
            <div class=page::sectionHeader>
                <h2 class=page::sectionTitle>{title}</h2>
                <button class=page::seeAll on:click=move |_| ctx.navigate(target)>
                    "See all"
                    <Icon icon=ic::CHEVRON_RIGHT />
                </button>
            </div>
            {children()}
        </section>
    }
}

/// Book rows with a progress bar and last-read time.
#[component]
fn ReadingRows(entries: Vec<(Book, ReadingProgress)>) -> impl IntoView {
    let ctx = use_app();
    if entries.is_empty() {
        return view! { <p class=page::muted>"You are not reading anything yet."</p> }.into_any();
    }
    view! {
        <div class=page::rowList>
            {entries
                .into_iter()
                .map(|(book, progress)| {
                    let id = book.id;
                    let thumb = book.cover.css();
                    view! {
                        <button class=page::row on:click=move |_| ctx.open(Screen::Summary, id)>
                            <div class=page::thumb style=format!("background: {thumb}")></div>
                            <div class=page::rowBody>
                                <span class=page::rowTitle>{book.title}</span>
                                <span class=page::rowMeta>{book.author}</span>
                                <ProgressBar percent=u32::from(progress.progress) />
                                <span class=page::rowMeta>
                                    {format!("{}% · {}", progress.progress, progress.last_read)}
                                </span>
                            </div>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

// ============================================================================
// Sub-lists
// ============================================================================

#[component]
pub fn ContinueReadingPage() -> impl IntoView {
    let entries = reading_list(usize::MAX);
    view! {
        <div class=page::narrow>
            <BackButton />
            <PageHeader title="Continue Reading" subtitle="Lanjutkan dari terakhir kamu baca" />
            <ReadingRows entries=entries />
        </div>
    }
}

#[component]
pub fn CompletedBooksPage() -> impl IntoView {
    let ids = use_app().with_catalog(|c| c.completed().to_vec());
    let books = books_for(&ids);
    let subtitle = format!("{} books finished", books.len());
    view! {
        <div class=page::page>
            <BackButton />
            <PageHeader title="Completed Books" subtitle=subtitle />
            <BookGrid books=books empty="No completed books yet" />
        </div>
    }
}

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let ids = use_app().with_catalog(|c| c.favorites().to_vec());
    let books = books_for(&ids);
    let subtitle = format!("{} books saved", books.len());
    view! {
        <div class=page::page>
            <BackButton />
            <PageHeader title="My Favorites" subtitle=subtitle />
            <BookGrid books=books empty="No saved books yet" />
        </div>
    }
}
