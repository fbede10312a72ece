//! Top navigation bar for signed-in screens.
//!
//! Hosts the primary nav items, the search hand-off, the premium shortcut,
//! the theme toggle and the user menu. Below [`MOBILE_QUERY`] the nav items
//! move into a collapsible row under the bar.

use kualala_core::Screen;
use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use leptos_use::use_media_query;

use crate::app::use_app;
use crate::components::icons as ic;
use crate::config::{APP_WORDMARK, DEMO_USER_NAME, MOBILE_QUERY};

stylance::import_crate_style!(css, "src/components/navbar/navbar.module.css");

/// Primary destinations: (label, screen, icon).
const NAV_ITEMS: [(&str, Screen, icondata::Icon); 4] = [
    ("Discover", Screen::Discover, ic::DISCOVER),
    ("Books", Screen::Books, ic::BOOKS),
    ("Collections", Screen::Collections, ic::COLLECTIONS),
    ("My Library", Screen::Library, ic::LIBRARY),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app();
    let is_mobile = use_media_query(MOBILE_QUERY);

    let (mobile_open, set_mobile_open) = signal(false);

    // Close the mobile row after any transition.
    Effect::new(move |_| {
        ctx.screen();
        set_mobile_open.set(false);
    });

    view! {
        <nav class=css::navbar>
            <div class=css::bar>
                <button class=css::brand on:click=move |_| ctx.navigate(Screen::Discover)>
                    {APP_WORDMARK}
                </button>

                <Show when=move || !is_mobile.get()>
                    <NavItems />
                </Show>

                <div class=css::actions>
                    <Show when=move || !is_mobile.get()>
                        <SearchBox />
                    </Show>
                    <button
                        class=css::premium
                        on:click=move |_| ctx.navigate(Screen::Premium)
                    >
                        <Icon icon=ic::PREMIUM />
                        <span class=css::premiumLabel>"Premium"</span>
                    </button>
                    <ThemeToggle />
                    <UserMenu />
                    <Show when=move || is_mobile.get()>
                        <button
                            class=css::iconButton
                            aria-label="Toggle navigation"
                            on:click=move |_| set_mobile_open.update(|open| *open = !*open)
                        >
                            {move || {
                                if mobile_open.get() {
                                    view! { <Icon icon=ic::CLOSE /> }
                                } else {
                                    view! { <Icon icon=ic::MENU /> }
                                }
                            }}
                        </button>
                    </Show>
                </div>
            </div>

            <Show when=move || is_mobile.get() && mobile_open.get()>
                <div class=css::mobileRow>
                    <SearchBox />
                    <NavItems />
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn NavItems() -> impl IntoView {
    let ctx = use_app();

    view! {
        <ul class=css::items>
            {NAV_ITEMS
                .into_iter()
                .map(|(label, screen, icon)| {
                    let class = move || {
                        if ctx.screen() == screen { css::itemActive } else { css::item }
                    };
                    view! {
                        <li>
                            <button class=class on:click=move |_| ctx.navigate(screen)>
                                <Icon icon=icon />
                                {label}
                            </button>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

/// Forwards the query to the books screen on Enter.
#[component]
fn SearchBox() -> impl IntoView {
    let ctx = use_app();
    let (query, set_query) = signal(String::new());

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            ctx.search(query.get_untracked());
        }
    };

    view! {
        <label class=css::search>
            <Icon icon=ic::SEARCH />
            <input
                class=css::searchInput
                type="search"
                placeholder="Search books or authors"
                prop:value=query
                on:input=move |ev| set_query.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
        </label>
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_app();

    view! {
        <button
            class=css::iconButton
            aria-label="Toggle dark mode"
            title=move || if ctx.is_dark_mode() { "Light mode" } else { "Dark mode" }
            on:click=move |_| ctx.toggle_dark_mode()
        >
            {move || {
                if ctx.is_dark_mode() {
                    view! { <Icon icon=ic::SUN /> }
                } else {
                    view! { <Icon icon=ic::MOON /> }
                }
            }}
        </button>
    }
}

// ============================================================================
// User menu
// ============================================================================

#[component]
fn UserMenu() -> impl IntoView {
    let ctx = use_app();
    let (open, set_open) = signal(false);
    let (confirm_logout, set_confirm_logout) = signal(false);

    let go = move |screen: Screen| {
        set_open.set(false);
        ctx.navigate(screen);
    };

    let entries: [(&str, Screen, icondata::Icon); 4] = [
        ("Profile", Screen::Profile, ic::USER),
        ("Settings", Screen::Settings, ic::SETTINGS),
        ("Premium", Screen::Premium, ic::PREMIUM),
        ("About", Screen::About, ic::HELP),
    ];

    view! {
        <div class=css::userMenu>
            <button
                class=css::avatarButton
                aria-haspopup="menu"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <span class=css::avatar><Icon icon=ic::USER /></span>
                <Icon icon=ic::CHEVRON_DOWN />
            </button>

            <Show when=move || open.get()>
                <div class=css::dropdown role="menu">
                    <div class=css::dropdownHeader>{DEMO_USER_NAME}</div>
                    {entries
                        .into_iter()
                        .map(|(label, screen, icon)| {
                            view! {
                                <button class=css::dropdownItem on:click=move |_| go(screen)>
                                    <Icon icon=icon />
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                    <button
                        class=css::dropdownDanger
                        on:click=move |_| {
                            set_open.set(false);
                            set_confirm_logout.set(true);
                        }
                    >
                        <Icon icon=ic::LOGOUT />
                        "Log out"
                    </button>
                </div>
            </Show>

            <Show when=move || confirm_logout.get()>
                <div class=css::backdrop on:click=move |_| set_confirm_logout.set(false)>
                    <div
                        class=css::dialog
                        role="alertdialog"
                        on:click=|ev: ev::MouseEvent| ev.stop_propagation()
                    >
                        <h2 class=css::dialogTitle>"Log out?"</h2>
                        <p class=css::dialogText>"Are you sure you want to log out?"</p>
                        <div class=css::dialogActions>
                            <button
                                class=css::secondary
                                on:click=move |_| set_confirm_logout.set(false)
                            >
                                "Cancel"
                            </button>
                            <button
                                class=css::danger
                                on:click=move |_| {
                                    set_confirm_logout.set(false);
                                    ctx.logout();
                                }
                            >
                                "Log out"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
