//! Site footer for signed-in screens.

use kualala_core::Screen;
use leptos::prelude::*;

use crate::app::use_app;
use crate::config::{APP_TAGLINE, APP_WORDMARK, COPYRIGHT, SOCIAL_LINKS, SUPPORT_EMAIL};

stylance::import_crate_style!(css, "src/components/footer/footer.module.css");

const EXPLORE: [(&str, Screen); 4] = [
    ("Discover", Screen::Discover),
    ("Books", Screen::Books),
    ("Collections", Screen::Collections),
    ("My Library", Screen::Library),
];

const COMPANY: [(&str, Screen); 3] = [
    ("About", Screen::About),
    ("Terms of Service", Screen::Terms),
    ("Privacy Policy", Screen::Privacy),
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class=css::footer>
            <div class=css::inner>
                <div class=css::brandColumn>
                    <span class=css::wordmark>{APP_WORDMARK}</span>
                    <p class=css::tagline>{APP_TAGLINE}</p>
                </div>
                <LinkColumn title="Explore" links=&EXPLORE />
                <LinkColumn title="Company" links=&COMPANY />
                <div class=css::column>
                    <h3 class=css::heading>"Follow"</h3>
                    {SOCIAL_LINKS
                        .iter()
                        .map(|(label, url)| view! {
                            <a class=css::link href=*url target="_blank" rel="noopener noreferrer">
                                {*label}
                            </a>
                        })
                        .collect_view()}
                    <a class=css::link href=format!("mailto:{SUPPORT_EMAIL}")>{SUPPORT_EMAIL}</a>
                </div>
            </div>
            <div class=css::bottom>{COPYRIGHT}</div>
        </footer>
    }
}

#[component]
fn LinkColumn(title: &'static str, links: &'static [(&'static str, Screen)]) -> impl IntoView {
    let ctx = use_app();

    view! {
        <div class=css::column>
            <h3 class=css::heading>{title}</h3>
            {links
                .iter()
                .map(|&(label, screen)| view! {
                    <button class=css::linkButton on:click=move |_| ctx.navigate(screen)>
                        {label}
                    </button>
                })
                .collect_view()}
        </div>
    }
}
