//! Searchable book listing.
//!
//! The search box starts from the query handed over by the navbar. Edits
//! here stay local to the screen; a new navbar search rebuilds it.

use kualala_core::catalog::{ALL_CATEGORIES, BookFilter};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::use_app;
use crate::components::cards::{BookGrid, PageHeader};
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/pages/books.module.css");
stylance::import_crate_style!(page, "src/components/pages/pages.module.css");

#[component]
pub fn BooksPage() -> impl IntoView {
    let ctx = use_app();

    let initial_query = ctx.state.with_untracked(|s| s.search_query.clone());
    let (query, set_query) = signal(initial_query);
    let (category, set_category) = signal(ALL_CATEGORIES.to_string());

    let categories = ctx.with_catalog(|c| {
        std::iter::once(ALL_CATEGORIES.to_string())
            .chain(c.categories().iter().cloned())
            .collect::<Vec<_>>()
    });

    let results = Memo::new(move |_| {
        let filter = BookFilter::new(&category.get(), &query.get());
        ctx.with_catalog(|c| filter.apply(c.books()).into_iter().cloned().collect::<Vec<_>>())
    });

    view! {
        <div class=page::page>
            <PageHeader title="Browse Books" subtitle="Jelajahi semua ringkasan buku" />

            <label class=css::search>
                <Icon icon=ic::SEARCH />
                <input
                    class=css::searchInput
                    type="search"
                    placeholder="Search by title or author..."
                    prop:value=query
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
            </label>

            <div class=css::filters>
                <span class=page::muted>"Filter by category:"</span>
                {categories
                    .into_iter()
                    .map(|name| {
                        let label = name.clone();
                        let class = {
                            let name = name.clone();
                            move || category.with(|c| if *c == name { css::chipActive } else { css::chip })
                        };
                        view! {
                            <button class=class on:click=move |_| set_category.set(name.clone())>
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <p class=css::count>
                {move || {
                    let n = results.with(Vec::len);
                    if n == 1 { "1 book found".to_string() } else { format!("{n} books found") }
                }}
            </p>

            {move || view! { <BookGrid books=results.get() empty="No books found" /> }}
        </div>
    }
}
