//! Root application module.
//!
//! Contains the main App component, the AppContext definition, and
//! application-level setup logic following Leptos conventions.

use std::sync::Arc;

use kualala_core::catalog::SelectedPlan;
use kualala_core::{
    Action, AppState, AuthService, Catalog, DemoAuth, DemoPayments, MockCatalog, PaymentGateway,
    Screen, Selector, ViewKey,
};
use leptos::prelude::*;

use crate::components::AppRouter;
use crate::utils::BrowserPlatform;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read from any child with
/// `use_context::<AppContext>()`.
///
/// # Architecture
///
/// - **Session state**: one [`AppState`] signal, changed only through
///   [`AppContext::dispatch`] so every transition goes through the reducer
/// - **Catalog**: read-only book, collection and user data
/// - **Services**: authentication and payment seams
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals or stored
/// values, which are cheap to copy.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub state: RwSignal<AppState>,
    catalog: StoredValue<Arc<dyn Catalog>>,
    auth: StoredValue<Arc<dyn AuthService>>,
    payments: StoredValue<Arc<dyn PaymentGateway>>,
}

impl AppContext {
    /// Restores the session from the browser and wires the demo services.
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        let auth: Arc<dyn AuthService> = Arc::new(DemoAuth);
        let payments: Arc<dyn PaymentGateway> =
            Arc::new(DemoPayments::new(catalog.payment_methods()));
        Self {
            state: RwSignal::new(AppState::boot(&BrowserPlatform)),
            catalog: StoredValue::new(catalog),
            auth: StoredValue::new(auth),
            payments: StoredValue::new(payments),
        }
    }

    /// Runs `action` through the reducer and applies its effects.
    pub fn dispatch(&self, action: Action) {
        self.state.update(|state| {
            // The reducer has already logged and rolled back on failure.
            let _ = state.dispatch(action, &BrowserPlatform);
        });
    }

    pub fn navigate(&self, screen: Screen) {
        self.dispatch(Action::navigate(screen));
    }

    /// Navigates with a book or collection selector.
    pub fn open(&self, screen: Screen, selector: impl Into<Selector>) {
        self.dispatch(Action::open(screen, selector));
    }

    pub fn back(&self) {
        self.dispatch(Action::Back);
    }

    pub fn login(&self) {
        self.dispatch(Action::Login);
    }

    pub fn signup(&self) {
        self.dispatch(Action::Signup);
    }

    pub fn logout(&self) {
        self.dispatch(Action::Logout);
    }

    pub fn toggle_dark_mode(&self) {
        self.dispatch(Action::ToggleDarkMode);
    }

    pub fn search(&self, query: String) {
        self.dispatch(Action::Search(query));
    }

    pub fn choose_plan(&self, plan: SelectedPlan) {
        self.dispatch(Action::ChoosePlan(plan));
    }

    // ---- reactive reads ----

    /// Screen the router should render.
    pub fn screen(&self) -> Screen {
        self.state.with(|s| s.visible_screen())
    }

    /// Screen plus the parameters it renders from.
    pub fn view_key(&self) -> ViewKey {
        self.state.with(AppState::view_key)
    }

    pub fn is_dark_mode(&self) -> bool {
        self.state.with(|s| s.flags.is_dark_mode)
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.flags.is_authenticated)
    }

    // ---- catalog and services ----

    /// Borrows the catalog for the duration of `f`.
    pub fn with_catalog<R>(&self, f: impl FnOnce(&dyn Catalog) -> R) -> R {
        self.catalog.with_value(|catalog| f(catalog.as_ref()))
    }

    pub fn auth(&self) -> Arc<dyn AuthService> {
        self.auth.get_value()
    }

    pub fn payments(&self) -> Arc<dyn PaymentGateway> {
        self.payments.get_value()
    }
}

/// Reads the root context.
pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext must be provided at root")
}

/// Root application component with error boundary.
///
/// This component:
/// - Loads the catalog and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the screen router
#[component]
pub fn App() -> impl IntoView {
    let content = match MockCatalog::embedded() {
        Ok(catalog) => {
            provide_context(AppContext::new(Arc::new(catalog)));
            Ok(view! { <AppRouter /> })
        }
        Err(err) => {
            log::error!("catalog failed to load: {err}");
            Err(err)
        }
    };

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: 100vh;
                    padding: 2rem;
                    background: var(--bg);
                    color: var(--text);
                    font-family: var(--font-sans);
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: var(--accent-strong); margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: var(--text-muted); margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: var(--surface);
                            padding: 1rem;
                            border-radius: 8px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: var(--text-muted);">
                                "Error details"
                            </summary>
                            <ul style="margin: 1rem 0 0 0; padding-left: 1.5rem; font-size: 0.9rem;">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: linear-gradient(90deg, var(--accent), var(--accent-strong));
                                color: #111827;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 8px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            {content}
        </ErrorBoundary>
    }
}
