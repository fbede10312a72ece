//! Preferences screen.
//!
//! Dark mode goes through the session controller and is persisted. The
//! notification switch and password form are local only.

use kualala_core::services::MIN_PASSWORD_LEN;
use kualala_core::AuthError;
use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::use_app;
use crate::components::cards::PageHeader;
use crate::components::icons as ic;
use crate::config::SETTINGS_DEMO_NOTICE;
use crate::utils::dom;

stylance::import_crate_style!(page, "src/components/pages/pages.module.css");

/// Accessible on/off switch.
#[component]
fn Switch(
    #[prop(into)] on: Signal<bool>,
    #[prop(into)] label: String,
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class=move || if on.get() { page::switchOn } else { page::switch }
            role="switch"
            aria-label=label
            aria-checked=move || on.get().to_string()
            on:click=move |_| on_toggle.run(())
        ></button>
    }
}

#[derive(Clone, Default)]
struct PasswordChange {
    current: String,
    new: String,
    confirm: String,
}

impl PasswordChange {
    fn validate(&self) -> Result<(), AuthError> {
        if self.current.is_empty() {
            return Err(AuthError::MissingField("current password"));
        }
        if self.new.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::PasswordTooShort(MIN_PASSWORD_LEN));
        }
        if self.new != self.confirm {
            return Err(AuthError::PasswordMismatch);
        }
        Ok(())
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ctx = use_app();
    let (email_notifications, set_email_notifications) = signal(true);

    let dark = Signal::derive(move || ctx.is_dark_mode());

    view! {
        <div class=page::narrow>
            <PageHeader title="Settings" subtitle="Atur pengalaman membaca kamu" />

            <section class=page::section>
                <h2 class=page::sectionTitle><Icon icon=ic::MOON />"Appearance"</h2>
                <div class=page::switchRow>
                    <div>
                        <strong>"Dark Mode"</strong>
                        <p class=page::muted>"Nyaman untuk membaca di malam hari"</p>
                    </div>
                    <Switch
                        on=dark
                        label="Dark mode"
                        on_toggle=Callback::new(move |_| ctx.toggle_dark_mode())
                    />
                </div>
            </section>

            <section class=page::section>
                <h2 class=page::sectionTitle><Icon icon=ic::MAIL />"Notifications"</h2>
                <div class=page::switchRow>
                    <div>
                        <strong>"Email Notifications"</strong>
                        <p class=page::muted>"Rekomendasi buku dan update mingguan"</p>
                    </div>
                    <Switch
                        on=email_notifications
                        label="Email notifications"
                        on_toggle=Callback::new(move |_| set_email_notifications.update(|v| *v = !*v))
                    />
                </div>
            </section>

            <PasswordForm />
        </div>
    }
}

#[component]
fn PasswordForm() -> impl IntoView {
    let form = RwSignal::new(PasswordChange::default());
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(PasswordChange::validate) {
            Ok(()) => {
                set_error.set(None);
                form.set(PasswordChange::default());
                dom::alert(SETTINGS_DEMO_NOTICE);
            }
            Err(err) => set_error.set(Some(err.to_string())),
        }
    };

    view! {
        <section class=page::section>
            <h2 class=page::sectionTitle><Icon icon=ic::LOCK />"Security"</h2>
            <form class=page::form on:submit=on_submit novalidate>
                {move || error.get().map(|msg| view! { <p class=page::error role="alert">{msg}</p> })}
                {password_field(form, "Current Password", |f| &f.current, |f, v| f.current = v)}
                {password_field(form, "New Password", |f| &f.new, |f, v| f.new = v)}
                {password_field(form, "Confirm New Password", |f| &f.confirm, |f, v| f.confirm = v)}
                <button type="submit" class=page::primary>"Update Password"</button>
            </form>
        </section>
    }
}

fn password_field(
    form: RwSignal<PasswordChange>,
    label: &'static str,
    get: fn(&PasswordChange) -> &String,
    set: fn(&mut PasswordChange, String),
) -> impl IntoView {
    view! {
        <label class=page::field>
            <span class=page::label>{label}</span>
            <input
                class=page::input
                type="password"
                placeholder="••••••••"
                prop:value=move || form.with(|f| get(f).clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            />
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(current: &str, new: &str, confirm: &str) -> PasswordChange {
        PasswordChange {
            current: current.into(),
            new: new.into(),
            confirm: confirm.into(),
        }
    }

    #[test]
    fn test_password_change_valid() {
        assert_eq!(change("old", "secret1", "secret1").validate(), Ok(()));
    }

    #[test]
    fn test_password_change_requires_current() {
        assert_eq!(
            change("", "secret1", "secret1").validate(),
            Err(AuthError::MissingField("current password"))
        );
    }

    #[test]
    fn test_password_change_too_short() {
        assert_eq!(
            change("old", "abc", "abc").validate(),
            Err(AuthError::PasswordTooShort(MIN_PASSWORD_LEN))
        );
    }

    #[test]
    fn test_password_change_mismatch() {
        assert_eq!(
            change("old", "secret1", "secret2").validate(),
            Err(AuthError::PasswordMismatch)
        );
    }
}
