//! Summary reader.
//!
//! Shows one chapter at a time with a contents/highlights sidebar and
//! typography controls. All reader state lives in a local
//! [`ReaderState`] signal and is discarded when the screen unmounts.

mod highlight;
mod sidebar;

use kualala_core::{ReaderState, TextAlign};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::use_app;
use crate::components::cards::BackButton;
use crate::components::icons as ic;
use crate::utils::markdown_to_html;

use highlight::use_highlight_capture;
use sidebar::Sidebar;

stylance::import_crate_style!(css, "src/components/reader/reader.module.css");

#[component]
pub fn ReadSummary() -> impl IntoView {
    let ctx = use_app();

    let book_id = ctx
        .state
        .with_untracked(|s| s.nav.selected_book_id)
        .unwrap_or_default();
    let (title, author) = ctx.with_catalog(|c| {
        c.book(book_id)
            .map(|b| (b.title.clone(), b.author.clone()))
            .unwrap_or_else(|| ("Book Summary".to_string(), String::new()))
    });
    let chapters = StoredValue::new(ctx.with_catalog(|c| c.chapters(book_id).to_vec()));

    let reader = RwSignal::new(ReaderState::new(chapters.with_value(Vec::len)));
    use_highlight_capture(reader);

    let chapter_html = Memo::new(move |_| {
        let index = reader.with(|r| r.chapter());
        chapters.with_value(|all| all.get(index).map(|c| markdown_to_html(&c.body)))
    });
    let chapter_title = Memo::new(move |_| {
        let index = reader.with(|r| r.chapter());
        chapters.with_value(|all| all.get(index).map(|c| c.title.clone()).unwrap_or_default())
    });
    let content_style = move || {
        reader.with(|r| {
            format!(
                "font-size: {}px; text-align: {}",
                r.font_size(),
                r.align.as_css()
            )
        })
    };

    view! {
        <div class=css::reader>
            <div class=css::topbar>
                <BackButton />
                <div class=css::heading>
                    <h1 class=css::bookTitle>{title}</h1>
                    <span class=css::bookAuthor>{author}</span>
                </div>
                <Toolbar reader=reader />
            </div>

            <Show when=move || reader.with(|r| r.highlight_mode)>
                <div class=css::modeBanner>
                    <Icon icon=ic::HIGHLIGHT />
                    "Highlight mode is on. Select text to save it."
                </div>
            </Show>

            <div class=css::layout>
                <Show when=move || reader.with(|r| r.sidebar_open)>
                    <Sidebar reader=reader chapters=chapters />
                </Show>

                <article class=css::content>
                    <h2 class=css::chapterTitle>{chapter_title}</h2>
                    <div
                        class=css::markdown
                        style=content_style
                        inner_html=move || chapter_html.get().unwrap_or_default()
                    ></div>
                    <ChapterNav reader=reader />
                </article>
            </div>
        </div>
    }
}

#[component]
fn Toolbar(reader: RwSignal<ReaderState>) -> impl IntoView {
    let tool_class = move |active: fn(&ReaderState) -> bool| {
        move || {
            if reader.with(active) {
                css::toolActive
            } else {
                css::tool
            }
        }
    };

    view! {
        <div class=css::toolbar role="toolbar">
            <button
                class=tool_class(|r| r.highlight_mode)
                title="Highlight mode"
                on:click=move |_| reader.update(ReaderState::toggle_highlight_mode)
            >
                <Icon icon=ic::HIGHLIGHT />
            </button>
            <button
                class=css::tool
                title="Smaller text"
                on:click=move |_| reader.update(ReaderState::decrease_font)
            >
                <Icon icon=ic::FONT_DECREASE />
            </button>
            <span class=css::fontSize>{move || format!("{}px", reader.with(|r| r.font_size()))}</span>
            <button
                class=css::tool
                title="Larger text"
                on:click=move |_| reader.update(ReaderState::increase_font)
            >
                <Icon icon=ic::FONT_INCREASE />
            </button>
            <button
                class=tool_class(|r| r.align == TextAlign::Justify)
                title="Justify text"
                on:click=move |_| reader.update(ReaderState::toggle_align)
            >
                <Icon icon=ic::ALIGN />
            </button>
            <button
                class=tool_class(|r| r.sidebar_open)
                title="Toggle sidebar"
                on:click=move |_| reader.update(ReaderState::toggle_sidebar)
            >
                <Icon icon=ic::SIDEBAR />
            </button>
            <button
                class=tool_class(|r| r.favorite)
                title="Favorite"
                on:click=move |_| reader.update(ReaderState::toggle_favorite)
            >
                {move || {
                    if reader.with(|r| r.favorite) {
                        view! { <Icon icon=ic::HEART_FILL /> }
                    } else {
                        view! { <Icon icon=ic::HEART /> }
                    }
                }}
            </button>
        </div>
    }
}

/// Previous/next controls, ending in the completion button.
#[component]
fn ChapterNav(reader: RwSignal<ReaderState>) -> impl IntoView {
    let position = move || {
        reader.with(|r| format!("Chapter {} of {}", r.chapter() + 1, r.chapter_count()))
    };

    view! {
        <nav class=css::chapterNav>
            <button
                class=css::navButton
                disabled=move || reader.with(|r| r.is_first())
                on:click=move |_| reader.update(ReaderState::prev_chapter)
            >
                <Icon icon=ic::CHEVRON_LEFT />
                "Previous"
            </button>
            <span class=css::position>{position}</span>
            {move || {
                if !reader.with(|r| r.is_last()) {
                    view! {
                        <button
                            class=css::navButton
                            on:click=move |_| reader.update(ReaderState::next_chapter)
                        >
                            "Next"
                            <Icon icon=ic::CHEVRON_RIGHT />
                        </button>
                    }
                    .into_any()
                } else if reader.with(|r| r.completed()) {
                    view! {
                        <span class=css::completed>
                            <Icon icon=ic::CHECK />
                            "Completed"
                        </span>
                    }
                    .into_any()
                } else {
                    view! {
                        <button
                            class=css::completeButton
                            on:click=move |_| reader.update(ReaderState::mark_completed)
                        >
                            <Icon icon=ic::CHECK />
                            "Mark as Completed"
                        </button>
                    }
                    .into_any()
                }
            }}
        </nav>
    }
}
