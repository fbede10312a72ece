//! Profile editor and achievements.
//!
//! Edits stay in component state; nothing is sent anywhere.

use kualala_core::Screen;
use kualala_core::catalog::{Achievement, Goal, percent};
use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::use_app;
use crate::components::cards::{BackButton, PageHeader, ProgressBar, StatTile};
use crate::components::icons as ic;
use crate::config::SETTINGS_DEMO_NOTICE;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/pages/profile.module.css");
stylance::import_crate_style!(page, "src/components/pages/pages.module.css");

/// Unlocked achievements previewed on the profile.
const ACHIEVEMENT_PREVIEW: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
struct ProfileDraft {
    name: String,
    email: String,
    bio: String,
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_app();
    let profile = ctx.with_catalog(|c| c.profile().clone());
    let achievements: Vec<Achievement> = ctx.with_catalog(|c| {
        c.achievements()
            .iter()
            .filter(|a| a.is_unlocked())
            .take(ACHIEVEMENT_PREVIEW)
            .cloned()
            .collect()
    });

    let saved = RwSignal::new(ProfileDraft {
        name: profile.name.clone(),
        email: profile.email.clone(),
        bio: profile.bio.clone(),
    });
    let draft = RwSignal::new(saved.get_untracked());
    let (editing, set_editing) = signal(false);

    let start_edit = move |_: ev::MouseEvent| {
        draft.set(saved.get_untracked());
        set_editing.set(true);
    };
    let save = move |_: ev::MouseEvent| {
        saved.set(draft.get_untracked());
        set_editing.set(false);
        dom::alert(SETTINGS_DEMO_NOTICE);
    };
    let cancel = move |_: ev::MouseEvent| set_editing.set(false);

    let total = profile
        .favorite_categories
        .iter()
        .map(|c| c.count)
        .sum::<u32>();

    view! {
        <div class=page::page>
            <section class=css::card>
                <div class=css::avatar><Icon icon=ic::USER /></div>
                <Show
                    when=move || editing.get()
                    fallback=move || view! {
                        <div class=css::identity>
                            <h1 class=css::name>{move || saved.with(|p| p.name.clone())}</h1>
                            <p class=page::muted>{move || saved.with(|p| p.email.clone())}</p>
                            <p class=css::bio>{move || saved.with(|p| p.bio.clone())}</p>
                            <button class=page::secondary on:click=start_edit>"Edit Profile"</button>
                        </div>
                    }
                >
                    <div class=css::identity>
                        <div class=page::form>
                            <label class=page::field>
                                <span class=page::label>"Name"</span>
                                <input
                                    class=page::input
                                    prop:value=move || draft.with(|d| d.name.clone())
                                    on:input=move |ev| {
                                        let v = event_target_value(&ev);
                                        draft.update(|d| d.name = v);
                                    }
                                />
                            </label>
                            <label class=page::field>
                                <span class=page::label>"Email"</span>
                                <input
                                    class=page::input
                                    type="email"
                                    prop:value=move || draft.with(|d| d.email.clone())
                                    on:input=move |ev| {
                                        let v = event_target_value(&ev);
                                        draft.update(|d| d.email = v);
                                    }
                                />
                            </label>
                            <label class=page::field>
                                <span class=page::label>"Bio"</span>
                                <textarea
                                    class=page::input
                                    rows="3"
                                    placeholder="Tell us about yourself"
                                    prop:value=move || draft.with(|d| d.bio.clone())
                                    on:input=move |ev| {
                                        let v = event_target_value(&ev);
                                        draft.update(|d| d.bio = v);
                                    }
                                ></textarea>
                            </label>
                            <div class=css::editActions>
                                <button class=page::secondary on:click=cancel>"Cancel"</button>
                                <button class=page::primary on:click=save>"Save"</button>
                            </div>
                        </div>
                    </div>
                </Show>
                <div class=css::since>
                    <span class=page::muted>"Member Since"</span>
                    <strong>{profile.joined}</strong>
                </div>
            </section>

            <div class=page::stats>
                {profile
                    .stats
                    .into_iter()
                    .map(|s| view! { <StatTile label=s.label value=s.value note=s.note /> })
                    .collect_view()}
            </div>

            <div class=css::columns>
                <GoalsEditor goals=profile.goals />

                <section class=page::panel>
                    <h2 class=page::sectionTitle>"Favorite Categories"</h2>
                    <ul class=css::categories>
                        {profile
                            .favorite_categories
                            .into_iter()
                            .map(|c| {
                                let share = percent(c.count, total);
                                view! {
                                    <li>
                                        <div class=css::categoryRow>
                                            <span>{c.name}</span>
                                            <span class=page::muted>{format!("{} books", c.count)}</span>
                                        </div>
                                        <ProgressBar percent=share />
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>
            </div>

            <section class=page::section>
                <div class=page::sectionHeader>
                    <h2 class=page::sectionTitle><Icon icon=ic::TROPHY />"Achievements"</h2>
                    <button class=page::seeAll on:click=move |_| ctx.navigate(Screen::Achievements)>
                        "View all"
                        <Icon icon=ic::CHEVRON_RIGHT />
                    </button>
                </div>
                <div class=css::badges>
                    {achievements
                        .into_iter()
                        .map(|a| view! { <AchievementCard achievement=a /> })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}

/// Reading goals with editable targets.
#[component]
fn GoalsEditor(goals: Vec<Goal>) -> impl IntoView {
    let goals = RwSignal::new(goals);
    let (editing, set_editing) = signal(false);

    view! {
        <section class=page::panel>
            <div class=page::sectionHeader>
                <h2 class=page::sectionTitle>"Reading Goals"</h2>
                <button class=page::seeAll on:click=move |_| set_editing.update(|e| *e = !*e)>
                    {move || if editing.get() { "Done" } else { "Edit" }}
                </button>
            </div>
            <ul class=css::goals>
                {move || {
                    goals
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, goal)| {
                            let pct = goal.percent();
                            view! {
                                <li>
                                    <div class=css::categoryRow>
                                        <span>{goal.title.clone()}</span>
                                        <Show
                                            when=move || editing.get()
                                            fallback=move || view! {
                                                <span class=page::muted>
                                                    {format!("{} / {}", goal.current, goal.target)}
                                                </span>
                                            }
                                        >
                                            <input
                                                class=css::goalInput
                                                type="number"
                                                min="1"
                                                prop:value=goal.target.to_string()
                                                on:change=move |ev| {
                                                    if let Ok(target) = event_target_value(&ev).parse::<u32>()
                                                        && target > 0
                                                    {
                                                        goals.update(|g| {
                                                            if let Some(goal) = g.get_mut(index) {
                                                                goal.target = target;
                                                            }
                                                        });
                                                    }
                                                }
                                            />
                                        </Show>
                                    </div>
                                    <ProgressBar percent=pct />
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </section>
    }
}

#[component]
fn AchievementCard(achievement: Achievement) -> impl IntoView {
    let unlocked = achievement.is_unlocked();
    let pct = achievement.percent();
    let class = if unlocked { css::badge } else { css::badgeLocked };

    view! {
        <div class=class>
            <span class=css::badgeIcon>{achievement.icon}</span>
            <strong>{achievement.title}</strong>
            <span class=page::muted>{achievement.description}</span>
            {match achievement.unlocked {
                Some(when) => view! { <span class=css::unlocked>{format!("Unlocked {when}")}</span> }.into_any(),
                None => view! {
                    <div class=css::locked>
                        <ProgressBar percent=pct />
                        <span class=page::muted>
                            {format!("{} / {}", achievement.progress, achievement.target)}
                        </span>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

// ============================================================================
// Achievements
// ============================================================================

#[component]
pub fn AchievementsPage() -> impl IntoView {
    let ctx = use_app();
    let achievements = ctx.with_catalog(|c| c.achievements().to_vec());
    let unlocked = achievements.iter().filter(|a| a.is_unlocked()).count();
    let total = achievements.len();
    let overall = percent(unlocked as u32, total as u32);

    view! {
        <div class=page::page>
            <BackButton />
            <PageHeader
                title="Achievements"
                subtitle=format!("{unlocked} of {total} unlocked")
            />

            <section class=page::panel>
                <div class=css::categoryRow>
                    <strong>"Progress"</strong>
                    <span class=page::muted>{format!("{overall}%")}</span>
                </div>
                <ProgressBar percent=overall />
            </section>

            <div class=css::badgeGrid>
                {achievements
                    .into_iter()
                    .map(|a| view! { <AchievementCard achievement=a /> })
                    .collect_view()}
            </div>

            <div class=page::notFound>
                <p class=page::muted>"Keep reading to unlock more."</p>
                <button class=page::primary on:click=move |_| ctx.navigate(Screen::Discover)>
                    "Find a Book"
                </button>
            </div>
        </div>
    }
}
