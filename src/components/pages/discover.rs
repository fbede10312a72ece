//! Home feed for signed-in users.

use kualala_core::Screen;
use kualala_core::catalog::{Book, Collection};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::use_app;
use crate::components::cards::{BookCard, BookGrid, CollectionCard, PageHeader, books_for};
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/pages/discover.module.css");
stylance::import_crate_style!(page, "src/components/pages/pages.module.css");

/// Books in the continue-reading strip.
const CONTINUE_LIMIT: usize = 3;
/// Collections previewed on the feed.
const COLLECTION_LIMIT: usize = 4;
/// Books in the recommendation grid.
const RECOMMENDED_LIMIT: usize = 8;

#[component]
pub fn DiscoverPage() -> impl IntoView {
    let ctx = use_app();

    let reading = ctx.with_catalog(|c| {
        c.reading()
            .iter()
            .take(CONTINUE_LIMIT)
            .filter_map(|r| c.book(r.book_id).map(|b| (b.clone(), r.progress, r.last_read.clone())))
            .collect::<Vec<_>>()
    });
    let feed = ctx.with_catalog(|c| c.discover().clone());
    let free = books_for(&feed.free);
    let new_releases = books_for(&feed.new_releases);
    let book_of_the_day: Option<Book> = ctx.with_catalog(|c| c.book(feed.book_of_the_day).cloned());
    let collections: Vec<Collection> =
        ctx.with_catalog(|c| c.collections().iter().take(COLLECTION_LIMIT).cloned().collect());
    let recommended: Vec<Book> =
        ctx.with_catalog(|c| c.books().iter().take(RECOMMENDED_LIMIT).cloned().collect());

    view! {
        <div class=page::page>
            <PageHeader title="Discover" subtitle="Temukan ringkasan buku terbaik hari ini" />

            {book_of_the_day.map(|book| view! { <BookOfTheDay book=book /> })}

            {(!reading.is_empty()).then(|| view! {
                <section class=page::section>
                    <div class=page::sectionHeader>
                        <h2 class=page::sectionTitle><Icon icon=ic::CLOCK />"Continue Reading"</h2>
                        <button class=page::seeAll on:click=move |_| ctx.navigate(Screen::ContinueReading)>
                            "See all"
                            <Icon icon=ic::CHEVRON_RIGHT />
                        </button>
                    </div>
                    <div class=css::strip>
                        {reading
                            .into_iter()
                            .map(|(book, progress, last_read)| view! {
                                <BookCard book=book progress=progress caption=last_read />
                            })
                            .collect_view()}
                    </div>
                </section>
            })}

            <Shelf title="Free Books" books=free />
            <Shelf title="New Releases" books=new_releases />

            <section class=page::section>
                <div class=page::sectionHeader>
                    <h2 class=page::sectionTitle>"Collections"</h2>
                    <button class=page::seeAll on:click=move |_| ctx.navigate(Screen::Collections)>
                        "See all"
                        <Icon icon=ic::CHEVRON_RIGHT />
                    </button>
                </div>
                <div class=page::cardGrid>
                    {collections
                        .into_iter()
                        .map(|collection| view! { <CollectionCard collection=collection /> })
                        .collect_view()}
                </div>
            </section>

            <section class=page::section>
                <div class=page::sectionHeader>
                    <h2 class=page::sectionTitle>"Recommended for You"</h2>
                    <button class=page::seeAll on:click=move |_| ctx.navigate(Screen::Books)>
                        "Browse all"
                        <Icon icon=ic::CHEVRON_RIGHT />
                    </button>
                </div>
                <BookGrid books=recommended empty="No recommendations yet" />
            </section>
        </div>
    }
}

#[component]
fn Shelf(title: &'static str, books: Vec<Book>) -> impl IntoView {
    view! {
        <section class=page::section>
            <div class=page::sectionHeader>
                <h2 class=page::sectionTitle>{title}</h2>
            </div>
            <BookGrid books=books empty="Nothing here yet" />
        </section>
    }
}

#[component]
fn BookOfTheDay(book: Book) -> impl IntoView {
    let ctx = use_app();
    let id = book.id;
    let cover = book.cover.css();

    view! {
        <section class=css::spotlight>
            <div class=css::spotlightCover style=format!("background: {cover}")>
                <span>{book.title.clone()}</span>
            </div>
            <div class=css::spotlightBody>
                <span class=css::eyebrow><Icon icon=ic::STAR />"Book of The Day"</span>
                <h2 class=css::spotlightTitle>{book.title}</h2>
                <p class=page::muted>{book.author}</p>
                {book.blurb.map(|b| view! { <p class=css::blurb>{b}</p> })}
                <button class=page::primary on:click=move |_| ctx.open(Screen::Summary, id)>
                    "Read Summary"
                    <Icon icon=ic::ARROW_RIGHT />
                </button>
            </div>
        </section>
    }
}
