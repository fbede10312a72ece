//! Login, signup and password reset forms.
//!
//! Input is validated by the [`AuthService`](kualala_core::AuthService) from
//! the app context; a rejection keeps the user on the form with the error
//! shown inline.

use kualala_core::services::is_email_valid;
use kualala_core::{AuthError, Credentials, Screen, SignupForm};
use leptos::{ev, prelude::*};

use crate::app::use_app;
use crate::config::APP_WORDMARK;

stylance::import_crate_style!(css, "src/components/pages/auth.module.css");
stylance::import_crate_style!(page, "src/components/pages/pages.module.css");

/// Centered card with the wordmark above the form.
#[component]
fn AuthCard(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    children: Children,
) -> impl IntoView {
    let ctx = use_app();
    view! {
        <div class=css::screen>
            <div class=css::card>
                <button class=css::wordmark on:click=move |_| ctx.navigate(Screen::Landing)>
                    {APP_WORDMARK}
                </button>
                <h1 class=css::title>{title}</h1>
                <p class=css::subtitle>{subtitle}</p>
                {children()}
            </div>
        </div>
    }
}

/// Inline error paragraph, hidden while `error` is `None`.
#[component]
fn FormError(error: ReadSignal<Option<String>>) -> impl IntoView {
    move || error.get().map(|msg| view! { <p class=page::error role="alert">{msg}</p> })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        match ctx.auth().login(&credentials) {
            Ok(()) => ctx.login(),
            Err(err) => set_error.set(Some(err.to_string())),
        }
    };

    view! {
        <AuthCard title="Welcome back" subtitle="Masuk untuk lanjut membaca">
            <form class=page::form on:submit=on_submit novalidate>
                <FormError error=error />
                <label class=page::field>
                    <span class=page::label>"Email"</span>
                    <input
                        class=page::input
                        type="email"
                        placeholder="nama@email.com"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label class=page::field>
                    <span class=page::label>"Password"</span>
                    <input
                        class=page::input
                        type="password"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <button
                    type="button"
                    class=css::inlineLink
                    on:click=move |_| ctx.navigate(Screen::ForgotPassword)
                >
                    "Forgot password?"
                </button>
                <button type="submit" class=page::primary>"Login"</button>
            </form>
            <p class=css::switch>
                "Belum punya akun? "
                <button class=css::inlineLink on:click=move |_| ctx.navigate(Screen::Signup)>
                    "Sign up"
                </button>
            </p>
        </AuthCard>
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let ctx = use_app();
    let form = RwSignal::new(SignupForm::default());
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let result = form.with_untracked(|f| ctx.auth().signup(f));
        match result {
            Ok(()) => ctx.signup(),
            Err(err) => set_error.set(Some(err.to_string())),
        }
    };

    view! {
        <AuthCard title="Create your account" subtitle="Mulai baca ringkasan buku hari ini">
            <form class=page::form on:submit=on_submit novalidate>
                <FormError error=error />
                {text_field(form, "Name", "text", |f| &f.name, |f, v| f.name = v)}
                {text_field(form, "Email", "email", |f| &f.email, |f, v| f.email = v)}
                {text_field(form, "Password", "password", |f| &f.password, |f, v| f.password = v)}
                {text_field(
                    form,
                    "Confirm password",
                    "password",
                    |f| &f.confirm_password,
                    |f, v| f.confirm_password = v,
                )}
                <label class=css::checkbox>
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.accept_terms)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            form.update(|f| f.accept_terms = checked);
                        }
                    />
                    <span>
                        "I agree to the "
                        <button
                            type="button"
                            class=css::inlineLink
                            on:click=move |_| ctx.navigate(Screen::Terms)
                        >
                            "Terms of Service"
                        </button>
                        " and "
                        <button
                            type="button"
                            class=css::inlineLink
                            on:click=move |_| ctx.navigate(Screen::Privacy)
                        >
                            "Privacy Policy"
                        </button>
                    </span>
                </label>
                <button type="submit" class=page::primary>"Create Account"</button>
            </form>
            <p class=css::switch>
                "Sudah punya akun? "
                <button class=css::inlineLink on:click=move |_| ctx.navigate(Screen::Login)>
                    "Login"
                </button>
            </p>
        </AuthCard>
    }
}

/// Labelled input bound to one field of the signup form.
fn text_field(
    form: RwSignal<SignupForm>,
    label: &'static str,
    kind: &'static str,
    get: fn(&SignupForm) -> &String,
    set: fn(&mut SignupForm, String),
) -> impl IntoView {
    view! {
        <label class=page::field>
            <span class=page::label>{label}</span>
            <input
                class=page::input
                type=kind
                prop:value=move || form.with(|f| get(f).clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            />
        </label>
    }
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let ctx = use_app();
    let (email, set_email) = signal(String::new());
    let (submitted, set_submitted) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let address = email.get_untracked();
        let result = if address.trim().is_empty() {
            Err(AuthError::MissingField("email"))
        } else if !is_email_valid(&address) {
            Err(AuthError::InvalidEmail)
        } else {
            Ok(())
        };
        match result {
            Ok(()) => {
                set_error.set(None);
                set_submitted.set(true);
            }
            Err(err) => set_error.set(Some(err.to_string())),
        }
    };

    let reset = move |_: ev::MouseEvent| {
        set_email.set(String::new());
        set_submitted.set(false);
    };

    view! {
        <Show
            when=move || submitted.get()
            fallback=move || view! {
                <AuthCard
                    title="Reset Password"
                    subtitle="Masukkan email kamu dan kami akan kirim link untuk reset password"
                >
                    <form class=page::form on:submit=on_submit novalidate>
                        <FormError error=error />
                        <label class=page::field>
                            <span class=page::label>"Email"</span>
                            <input
                                class=page::input
                                type="email"
                                placeholder="nama@email.com"
                                prop:value=email
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </label>
                        <button type="submit" class=page::primary>"Send Reset Link"</button>
                    </form>
                    <p class=css::switch>
                        <button class=css::inlineLink on:click=move |_| ctx.navigate(Screen::Login)>
                            "Back to Login"
                        </button>
                    </p>
                </AuthCard>
            }
        >
            <AuthCard
                title="Check your email"
                subtitle=format!("We sent a reset link to {}", email.get_untracked())
            >
                <div class=page::form>
                    <button class=page::secondary on:click=reset>"Try another email"</button>
                    <button class=page::primary on:click=move |_| ctx.navigate(Screen::Login)>
                        "Back to Login"
                    </button>
                </div>
            </AuthCard>
        </Show>
    }
}
