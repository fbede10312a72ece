//! Reader sidebar: chapter contents and captured highlights.

use kualala_core::catalog::Chapter;
use kualala_core::{Highlight, ReaderState, SidebarView};
use leptos::prelude::*;
use leptos_icons::Icon;

use super::css;
use crate::components::icons as ic;
use crate::utils::dom;

#[component]
pub fn Sidebar(reader: RwSignal<ReaderState>, chapters: StoredValue<Vec<Chapter>>) -> impl IntoView {
    let view_mode = Memo::new(move |_| reader.with(|r| r.sidebar_view));
    let tab_class = move |tab: SidebarView| {
        move || if view_mode.get() == tab { css::tabActive } else { css::tab }
    };

    view! {
        <aside class=css::sidebar>
            <div class=css::tabs>
                <button
                    class=tab_class(SidebarView::Contents)
                    on:click=move |_| reader.update(|r| r.show(SidebarView::Contents))
                >
                    <Icon icon=ic::CONTENTS />
                    "Contents"
                </button>
                <button
                    class=tab_class(SidebarView::Highlights)
                    on:click=move |_| reader.update(|r| r.show(SidebarView::Highlights))
                >
                    <Icon icon=ic::HIGHLIGHT />
                    {move || format!("Highlights ({})", reader.with(|r| r.highlights().len()))}
                </button>
            </div>
            {move || match view_mode.get() {
                SidebarView::Contents => view! { <Contents reader=reader chapters=chapters /> }.into_any(),
                SidebarView::Highlights => view! { <Highlights reader=reader /> }.into_any(),
            }}
        </aside>
    }
}

#[component]
fn Contents(reader: RwSignal<ReaderState>, chapters: StoredValue<Vec<Chapter>>) -> impl IntoView {
    let entries = chapters.with_value(|all| {
        all.iter()
            .enumerate()
            .map(|(index, chapter)| (index, chapter.clone()))
            .collect::<Vec<_>>()
    });

    view! {
        <ol class=css::contents>
            {entries
                .into_iter()
                .map(|(index, chapter)| {
                    let is_current = move || reader.with(|r| r.chapter() == index);
                    let is_expanded = move || reader.with(|r| r.is_expanded(index));
                    let has_sections = !chapter.sections.is_empty();
                    let sections = chapter
                        .sections
                        .iter()
                        .map(|section| (section.id.clone(), section.title.clone()))
                        .collect::<Vec<_>>();
                    view! {
                        <li class=css::chapterEntry>
                            <div class=css::chapterRow>
                                <button
                                    class=move || {
                                        if is_current() { css::chapterActive } else { css::chapterLink }
                                    }
                                    on:click=move |_| reader.update(|r| r.go_to(index))
                                >
                                    {chapter.title}
                                </button>
                                <Show when=move || has_sections>
                                    <button
                                        class=css::expand
                                        aria-label="Toggle sections"
                                        on:click=move |_| reader.update(|r| r.toggle_expanded(index))
                                    >
                                        {move || {
                                            if is_expanded() {
                                                view! { <Icon icon=ic::CHEVRON_DOWN /> }
                                            } else {
                                                view! { <Icon icon=ic::CHEVRON_RIGHT /> }
                                            }
                                        }}
                                    </button>
                                </Show>
                            </div>
                            <Show when=is_expanded>
                                <ul class=css::sections>
                                    {sections
                                        .clone()
                                        .into_iter()
                                        .map(|(anchor, title)| {
                                            view! {
                                                <li>
                                                    <button
                                                        class=css::sectionLink
                                                        on:click=move |_| jump_to(reader, index, anchor.clone())
                                                    >
                                                        {title}
                                                    </button>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </Show>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}

/// Opens `chapter` and scrolls to the section anchor once it is rendered.
fn jump_to(reader: RwSignal<ReaderState>, chapter: usize, anchor: String) {
    reader.update(|r| r.go_to(chapter));
    request_animation_frame(move || {
        if !dom::scroll_to_element(&anchor) {
            log::debug!("section anchor #{anchor} not found");
        }
    });
}

#[component]
fn Highlights(reader: RwSignal<ReaderState>) -> impl IntoView {
    let items = Memo::new(move |_| reader.with(|r| r.highlights().to_vec()));

    view! {
        <Show
            when=move || !items.with(Vec::is_empty)
            fallback=|| view! {
                <p class=css::sidebarEmpty>
                    "Turn on highlight mode and select text to save a passage."
                </p>
            }
        >
            <ul class=css::highlightList>
                <For
                    each=move || items.get()
                    key=|h: &Highlight| h.id.clone()
                    children=move |h: Highlight| {
                        let id = h.id.clone();
                        view! {
                            <li class=css::highlightItem>
                                <blockquote class=css::highlightText>{h.text}</blockquote>
                                <button
                                    class=css::removeHighlight
                                    aria-label="Remove highlight"
                                    on:click=move |_| {
                                        reader.update(|r| {
                                            r.remove_highlight(&id);
                                        });
                                    }
                                >
                                    <Icon icon=ic::TRASH />
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
        </Show>
    }
}
