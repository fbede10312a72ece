//! Book detail screen.
//!
//! Books without detailed content show the catalog's placeholder summary;
//! an id the catalog does not know at all gets a placeholder book too.

use kualala_core::catalog::{Book, BookSummary, Tone};
use kualala_core::{BookId, Screen};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::use_app;
use crate::components::cards::{BackButton, books_for};
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/pages/summary.module.css");
stylance::import_crate_style!(page, "src/components/pages/pages.module.css");

fn placeholder_book(id: BookId) -> Book {
    Book {
        id,
        title: "Contoh Buku".to_string(),
        author: "Penulis".to_string(),
        category: "Pengembangan Diri".to_string(),
        minutes: 10,
        cover: Tone("#FDC448".to_string(), "#E3762B".to_string()),
        rating: None,
        blurb: None,
    }
}

#[component]
pub fn SummaryPage() -> impl IntoView {
    let ctx = use_app();
    let id = ctx
        .state
        .with_untracked(|s| s.nav.selected_book_id)
        .unwrap_or_default();

    let (book, summary): (Book, BookSummary) = ctx.with_catalog(|c| {
        let book = c.book(id).cloned().unwrap_or_else(|| placeholder_book(id));
        let summary = c.summary(id).unwrap_or_else(|| c.fallback_summary()).clone();
        (book, summary)
    });
    let related = books_for(&summary.related);
    let (favorite, set_favorite) = signal(false);

    let cover = book.cover.css();

    view! {
        <div class=page::narrow>
            <BackButton />

            <header class=css::hero>
                <div class=css::cover style=format!("background: {cover}")>
                    <span>{book.title.clone()}</span>
                </div>
                <div class=css::heroBody>
                    <span class=css::category>{book.category}</span>
                    <h1 class=css::title>{book.title}</h1>
                    <p class=css::author>{format!("oleh {}", book.author)}</p>
                    <p class=css::meta>
                        <Icon icon=ic::CLOCK />
                        {format!("{} menit", book.minutes)}
                    </p>
                    <div class=css::actions>
                        <button class=page::primary on:click=move |_| ctx.open(Screen::ReadSummary, id)>
                            <Icon icon=ic::DISCOVER />
                            "Baca Ringkasan"
                        </button>
                        <button
                            class=page::secondary
                            aria-pressed=move || favorite.get().to_string()
                            on:click=move |_| set_favorite.update(|f| *f = !*f)
                        >
                            {move || {
                                if favorite.get() {
                                    view! { <Icon icon=ic::HEART_FILL /> }
                                } else {
                                    view! { <Icon icon=ic::HEART /> }
                                }
                            }}
                            {move || if favorite.get() { "Saved" } else { "Save" }}
                        </button>
                    </div>
                </div>
            </header>

            <p class=css::description>{summary.description}</p>

            <section class=css::takeaway>
                <h2 class=page::sectionTitle>"Takeaway"</h2>
                <p>{summary.takeaway}</p>
            </section>

            <section class=page::section>
                <h2 class=page::sectionTitle>"Key Insights"</h2>
                <ol class=css::insights>
                    {summary
                        .key_insights
                        .into_iter()
                        .map(|insight| view! {
                            <li><Icon icon=ic::CHECK /><span>{insight}</span></li>
                        })
                        .collect_view()}
                </ol>
            </section>

            {(!related.is_empty()).then(|| view! {
                <section class=page::section>
                    <h2 class=page::sectionTitle>"Related Books"</h2>
                    <div class=page::rowList>
                        {related
                            .into_iter()
                            .map(|book| {
                                let related_id = book.id;
                                let thumb = book.cover.css();
                                view! {
                                    <button
                                        class=page::row
                                        on:click=move |_| ctx.open(Screen::Summary, related_id)
                                    >
                                        <div class=page::thumb style=format!("background: {thumb}")></div>
                                        <div class=page::rowBody>
                                            <span class=page::rowTitle>{book.title}</span>
                                            <span class=page::rowMeta>{book.author}</span>
                                        </div>
                                        <Icon icon=ic::CHEVRON_RIGHT />
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>
            })}
        </div>
    }
}
