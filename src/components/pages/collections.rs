//! Collection listing and detail.

use kualala_core::Screen;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::use_app;
use crate::components::cards::{BackButton, BookGrid, CollectionCard, PageHeader, books_for};
use crate::components::icons as ic;

stylance::import_crate_style!(page, "src/components/pages/pages.module.css");
stylance::import_crate_style!(css, "src/components/pages/collections.module.css");

#[component]
pub fn CollectionsPage() -> impl IntoView {
    let collections = use_app().with_catalog(|c| c.collections().to_vec());

    view! {
        <div class=page::page>
            <PageHeader
                title="Collections"
                subtitle="Kumpulan buku pilihan untuk setiap tujuan"
            />
            <div class=page::cardGrid>
                {collections
                    .into_iter()
                    .map(|collection| view! { <CollectionCard collection=collection /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn CollectionDetailPage() -> impl IntoView {
    let ctx = use_app();
    let selected = ctx.state.with_untracked(|s| s.nav.selected_collection_id.clone());
    let collection = selected
        .and_then(|id| ctx.with_catalog(|c| c.collection(&id).cloned()))
        .filter(|c| c.has_shelf());

    let Some(collection) = collection else {
        return view! {
            <div class=page::narrow>
                <BackButton />
                <div class=page::notFound>
                    <h1>"Collection not found"</h1>
                    <p class=page::muted>"Koleksi ini belum tersedia."</p>
                    <button class=page::primary on:click=move |_| ctx.navigate(Screen::Collections)>
                        "Browse Collections"
                    </button>
                </div>
            </div>
        }
        .into_any();
    };

    let books = books_for(&collection.books);
    let banner = collection.tone.css();

    view! {
        <div class=page::page>
            <BackButton />
            <header class=css::banner style=format!("background: {banner}")>
                <span class=css::icon>{collection.icon}</span>
                <div>
                    <h1 class=css::title>{collection.name}</h1>
                    <p class=css::description>{collection.description}</p>
                    <span class=css::count>
                        <Icon icon=ic::BOOKS />
                        {format!("{} books", collection.count)}
                    </span>
                </div>
            </header>
            <BookGrid books=books empty="No books in this collection yet" />
        </div>
    }
    .into_any()
}
