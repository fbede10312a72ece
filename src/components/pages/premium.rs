//! Premium plans and checkout.

use kualala_core::catalog::{Faq, Plan, SelectedPlan};
use kualala_core::{CardDetails, PaymentRequest, PaymentStatus, Screen};
use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::use_app;
use crate::components::cards::{BackButton, PageHeader};
use crate::components::icons as ic;
use crate::config::PAYMENT_DEMO_NOTICE;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/pages/premium.module.css");
stylance::import_crate_style!(page, "src/components/pages/pages.module.css");

/// Trust figures under the hero: (value, label).
const HIGHLIGHTS: [(&str, &str); 4] = [
    ("1,000+", "Buku Tersedia"),
    ("15 Min", "Rata-rata Baca"),
    ("4.9/5", "Rating Pengguna"),
    ("10,000+", "Pembaca Aktif"),
];

const GUARANTEES: [&str; 3] = [
    "Pembayaran 100% Aman",
    "Cancel Kapan Saja",
    "Garansi 30 Hari",
];

// ============================================================================
// Premium
// ============================================================================

#[component]
pub fn PremiumPage() -> impl IntoView {
    let ctx = use_app();
    let plans = ctx.with_catalog(|c| c.plans().to_vec());

    view! {
        <div class=page::page>
            <div class=css::hero>
                <span class=css::crown><Icon icon=ic::PREMIUM /></span>
                <PageHeader
                    title="Premium"
                    subtitle="Akses tanpa batas ke semua ringkasan buku"
                />
            </div>

            <div class=css::highlights>
                {HIGHLIGHTS
                    .into_iter()
                    .map(|(value, label)| view! {
                        <div class=css::highlight>
                            <span class=css::highlightValue>{value}</span>
                            <span class=page::muted>{label}</span>
                        </div>
                    })
                    .collect_view()}
            </div>

            <div class=css::plans>
                {plans.into_iter().map(|plan| view! { <PlanCard plan=plan /> }).collect_view()}
            </div>

            <ul class=css::guarantees>
                {GUARANTEES
                    .into_iter()
                    .map(|g| view! { <li><Icon icon=ic::SHIELD />{g}</li> })
                    .collect_view()}
            </ul>

            <FaqList faqs=ctx.with_catalog(|c| c.faqs().to_vec()) />

            <p class=css::more>
                "Masih ada pertanyaan? "
                <button class=page::seeAll on:click=move |_| ctx.navigate(Screen::About)>
                    "Tentang Kualala"
                </button>
            </p>
        </div>
    }
}

#[component]
fn PlanCard(plan: Plan) -> impl IntoView {
    let ctx = use_app();
    let selected = SelectedPlan::from(&plan);
    let class = if plan.popular { css::planPopular } else { css::plan };

    view! {
        <div class=class>
            {plan.badge.map(|b| view! { <span class=css::badge>{b}</span> })}
            <h3 class=css::planName>{plan.name}</h3>
            <p class=page::muted>{plan.description}</p>
            <div class=css::price>
                {plan.original_price.map(|p| view! { <s class=page::muted>{p}</s> })}
                <span class=css::amount>{plan.price}</span>
                <span class=page::muted>{plan.period}</span>
            </div>
            <button class=page::primary on:click=move |_| ctx.choose_plan(selected.clone())>
                "Choose Plan"
            </button>
            <ul class=css::features>
                {plan
                    .features
                    .into_iter()
                    .map(|f| view! { <li><Icon icon=ic::CHECK />{f}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

/// FAQ accordion. Opening one entry closes the others.
#[component]
pub(super) fn FaqList(faqs: Vec<Faq>) -> impl IntoView {
    let (open, set_open) = signal(None::<usize>);

    view! {
        <section class=page::section>
            <h2 class=page::sectionTitle>"Frequently Asked Questions"</h2>
            <div class=css::faqs>
                {faqs
                    .into_iter()
                    .enumerate()
                    .map(|(index, faq)| {
                        let is_open = move || open.get() == Some(index);
                        view! {
                            <div class=css::faq>
                                <button
                                    class=css::question
                                    aria-expanded=move || is_open().to_string()
                                    on:click=move |_| {
                                        set_open.update(|o| {
                                            *o = if *o == Some(index) { None } else { Some(index) };
                                        });
                                    }
                                >
                                    {faq.question}
                                    {move || {
                                        if is_open() {
                                            view! { <Icon icon=ic::CHEVRON_DOWN /> }
                                        } else {
                                            view! { <Icon icon=ic::CHEVRON_RIGHT /> }
                                        }
                                    }}
                                </button>
                                <Show when=is_open>
                                    <p class=css::answer>{faq.answer.clone()}</p>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

// ============================================================================
// Payment
// ============================================================================

#[component]
pub fn PaymentPage() -> impl IntoView {
    let ctx = use_app();
    let plan = ctx.state.with_untracked(|s| s.selected_plan.clone());

    match plan {
        None => view! {
            <div class=page::narrow>
                <div class=page::notFound>
                    <h1>"No plan selected"</h1>
                    <p class=page::muted>"Pilih paket Premium dulu sebelum lanjut ke pembayaran."</p>
                    <button class=page::primary on:click=move |_| ctx.navigate(Screen::Premium)>
                        "Choose a Plan"
                    </button>
                </div>
            </div>
        }
        .into_any(),
        Some(plan) => view! { <Checkout plan=plan /> }.into_any(),
    }
}

#[component]
fn Checkout(plan: SelectedPlan) -> impl IntoView {
    let ctx = use_app();
    let methods = ctx.with_catalog(|c| c.payment_methods().to_vec());
    let card_methods: Vec<String> = methods
        .iter()
        .filter(|m| m.card)
        .map(|m| m.id.clone())
        .collect();

    let (method, set_method) = signal(methods.first().map(|m| m.id.clone()).unwrap_or_default());
    let card = RwSignal::new(CardDetails::default());
    let (error, set_error) = signal(None::<String>);

    let uses_card = Memo::new(move |_| method.with(|m| card_methods.contains(m)));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let request = PaymentRequest {
            method: method.get_untracked(),
            card: uses_card.get_untracked().then(|| card.get_untracked()),
        };
        match ctx.payments().submit(&request) {
            Ok(PaymentStatus::Processing) => {
                set_error.set(None);
                dom::alert(PAYMENT_DEMO_NOTICE);
            }
            Err(err) => set_error.set(Some(err.to_string())),
        }
    };

    let price = plan.price.clone();

    view! {
        <div class=page::page>
            <BackButton />
            <PageHeader title="Payment" subtitle="Selesaikan pembayaran untuk mengaktifkan Premium" />

            <form class=css::checkout on:submit=on_submit novalidate>
                <div class=css::checkoutMain>
                    <section class=page::panel>
                        <h2 class=page::sectionTitle>"Payment Method"</h2>
                        <div class=css::methods>
                            {methods
                                .into_iter()
                                .map(|m| {
                                    let id = m.id.clone();
                                    let current = m.id.clone();
                                    let class = move || {
                                        method.with(|sel| {
                                            if *sel == current { css::methodActive } else { css::method }
                                        })
                                    };
                                    view! {
                                        <button
                                            type="button"
                                            class=class
                                            on:click=move |_| {
                                                set_error.set(None);
                                                set_method.set(id.clone());
                                            }
                                        >
                                            <span class=css::methodIcon>{m.icon}</span>
                                            {m.name}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </section>

                    <Show when=move || uses_card.get()>
                        <CardFields card=card />
                    </Show>

                    {move || error.get().map(|msg| view! { <p class=page::error role="alert">{msg}</p> })}

                    <p class=css::secure>
                        <Icon icon=ic::LOCK />
                        "Your payment information is secure and encrypted"
                    </p>
                </div>

                <aside class=page::panel>
                    <h2 class=page::sectionTitle>"Order Summary"</h2>
                    <dl class=css::summary>
                        <dt>"Plan"</dt>
                        <dd>{plan.name}</dd>
                        <dt>"Billing Period"</dt>
                        <dd>{plan.period}</dd>
                        {plan.original_price.map(|p| view! {
                            <dt>"Original Price"</dt>
                            <dd><s>{p}</s></dd>
                        })}
                        <dt class=css::total>"Total"</dt>
                        <dd class=css::total>{plan.price}</dd>
                    </dl>
                    <button type="submit" class=page::primary>
                        <Icon icon=ic::CREDIT_CARD />
                        {format!("Pay {price}")}
                    </button>
                </aside>
            </form>
        </div>
    }
}

#[component]
fn CardFields(card: RwSignal<CardDetails>) -> impl IntoView {
    view! {
        <section class=page::panel>
            <div class=page::form>
                {card_field(card, "Card Number", "1234 5678 9012 3456", |c| &c.number, |c, v| c.number = v)}
                {card_field(card, "Cardholder Name", "John Doe", |c| &c.holder, |c, v| c.holder = v)}
                <div class=css::cardRow>
                    {card_field(card, "Expiry Date", "MM/YY", |c| &c.expiry, |c, v| c.expiry = v)}
                    {card_field(card, "CVV", "123", |c| &c.cvv, |c, v| c.cvv = v)}
                </div>
            </div>
        </section>
    }
}

fn card_field(
    card: RwSignal<CardDetails>,
    label: &'static str,
    placeholder: &'static str,
    get: fn(&CardDetails) -> &String,
    set: fn(&mut CardDetails, String),
) -> impl IntoView {
    view! {
        <label class=page::field>
            <span class=page::label>{label}</span>
            <input
                class=page::input
                type="text"
                placeholder=placeholder
                prop:value=move || card.with(|c| get(c).clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    card.update(|c| set(c, value));
                }
            />
        </label>
    }
}
