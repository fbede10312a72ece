//! Public landing page.

use kualala_core::Screen;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::use_app;
use crate::components::icons as ic;
use crate::components::navbar::ThemeToggle;
use crate::config::{APP_TAGLINE, APP_WORDMARK, COPYRIGHT};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/pages/landing.module.css");

/// Selling points: (icon, title, description).
const FEATURES: [(icondata::Icon, &str, &str); 3] = [
    (
        ic::TRENDING,
        "Cepat & Efisien",
        "Pahami inti buku dalam 10-15 menit. Hemat waktu, tetap dapet ilmunya!",
    ),
    (
        ic::BOOKS,
        "1000+ Ringkasan",
        "Koleksi lengkap dari berbagai kategori: bisnis, self-help, psikologi, dan lainnya.",
    ),
    (
        ic::HEART,
        "Bahasa Indonesia",
        "Interpretasi yang relate dengan kehidupan sehari-hari dalam Bahasa Indonesia.",
    ),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let ctx = use_app();
    let plans = ctx.with_catalog(|c| c.plans().to_vec());

    view! {
        <div class=css::landing>
            <header class=css::header>
                <span class=css::wordmark>{APP_WORDMARK}</span>
                <div class=css::headerActions>
                    <ThemeToggle />
                    <button class=css::ghost on:click=move |_| { dom::scroll_to_element("about"); }>
                        "About"
                    </button>
                    <button class=css::ghost on:click=move |_| { dom::scroll_to_element("pricing"); }>
                        "Pricing"
                    </button>
                    <button class=css::outline on:click=move |_| ctx.navigate(Screen::Login)>
                        "Login"
                    </button>
                    <button class=css::cta on:click=move |_| ctx.navigate(Screen::Signup)>
                        "Get Started"
                    </button>
                </div>
            </header>

            <section class=css::hero>
                <h1 class=css::heroTitle>
                    "Baca buku nggak ribet, "
                    <span class=css::accent>"cukup baca ala-ala!"</span>
                </h1>
                <p class=css::heroText>
                    "Kuala yang baca, lu yang paham. Pahami isi buku terbaik dunia dalam hitungan menit dengan ringkasan berkualitas dalam Bahasa Indonesia."
                </p>
                <div class=css::heroActions>
                    <button class=css::cta on:click=move |_| ctx.navigate(Screen::Signup)>
                        "Mulai Gratis"
                        <Icon icon=ic::ARROW_RIGHT />
                    </button>
                    <button class=css::outline on:click=move |_| { dom::scroll_to_element("about"); }>
                        "Learn More"
                    </button>
                </div>
            </section>

            <section id="about" class=css::band>
                <h2 class=css::bandTitle>"Kenapa Kualala?"</h2>
                <p class=css::bandText>"Cara paling efisien untuk belajar dari buku-buku terbaik"</p>
                <div class=css::features>
                    {FEATURES
                        .into_iter()
                        .map(|(icon, title, description)| view! {
                            <div class=css::feature>
                                <span class=css::featureIcon><Icon icon=icon /></span>
                                <h3>{title}</h3>
                                <p>{description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="pricing" class=css::band>
                <h2 class=css::bandTitle>"Pricing"</h2>
                <p class=css::bandText>"Pilih paket yang sesuai dengan kebutuhanmu"</p>
                <div class=css::plans>
                    {plans
                        .into_iter()
                        .map(|plan| {
                            let class = if plan.popular { css::planPopular } else { css::plan };
                            view! {
                                <div class=class on:click=move |_| ctx.navigate(Screen::Signup)>
                                    {plan.badge.map(|b| view! { <span class=css::badge>{b}</span> })}
                                    <h3>{plan.name}</h3>
                                    <p class=css::planDesc>{plan.description}</p>
                                    <div class=css::price>
                                        {plan.original_price.map(|p| view! { <s class=css::strike>{p}</s> })}
                                        <span class=css::amount>{plan.price}</span>
                                        <span class=css::period>{plan.period}</span>
                                    </div>
                                    <ul class=css::planFeatures>
                                        {plan.features
                                            .into_iter()
                                            .map(|f| view! { <li><Icon icon=ic::CHECK />{f}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class=css::closing>
                <h2>"Siap untuk mulai belajar?"</h2>
                <p>"Gabung dengan ribuan pembaca yang sudah menghemat waktu mereka"</p>
                <button class=css::cta on:click=move |_| ctx.navigate(Screen::Signup)>
                    "Mulai Sekarang - Gratis!"
                    <Icon icon=ic::ARROW_RIGHT />
                </button>
            </section>

            <footer class=css::footer>
                <span class=css::wordmark>{APP_WORDMARK}</span>
                <p>{APP_TAGLINE}</p>
                <div class=css::footerLinks>
                    <button class=css::ghost on:click=move |_| ctx.navigate(Screen::Terms)>
                        "Terms of Service"
                    </button>
                    <button class=css::ghost on:click=move |_| ctx.navigate(Screen::Privacy)>
                        "Privacy Policy"
                    </button>
                </div>
                <small>{COPYRIGHT}</small>
            </footer>
        </div>
    }
}
