//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

use log::LevelFilter;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name.
pub const APP_NAME: &str = "Kualala";

/// Wordmark shown in the navbar, footer and landing header.
pub const APP_WORDMARK: &str = "KUALALA";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tagline under the footer wordmark.
pub const APP_TAGLINE: &str =
    "Platform ringkasan buku terbaik dalam Bahasa Indonesia. Belajar lebih cepat, lebih efisien.";

pub const COPYRIGHT: &str = "© 2024 Kualala. All rights reserved.";

/// Display name of the demo account shown in the user menu.
pub const DEMO_USER_NAME: &str = "Pengguna Kualala";

// =============================================================================
// Theme
// =============================================================================

/// Class toggled on `<html>` while dark mode is on.
pub const THEME_SCOPE_CLASS: &str = "dark";

/// Media query below which the navbar collapses into its mobile row.
pub const MOBILE_QUERY: &str = "(max-width: 768px)";

// =============================================================================
// Logging
// =============================================================================

/// Console log level. Debug builds also show navigation transitions.
pub const LOG_LEVEL: LevelFilter = if cfg!(debug_assertions) {
    LevelFilter::Debug
} else {
    LevelFilter::Info
};

// =============================================================================
// Demo Notices
// =============================================================================

/// Blocking notice raised when the demo gateway accepts a payment.
pub const PAYMENT_DEMO_NOTICE: &str = "Payment processing... (This is a demo)";

/// Notice raised by the local-only settings forms.
pub const SETTINGS_DEMO_NOTICE: &str = "Saved locally. (This is a demo)";

// =============================================================================
// Support
// =============================================================================

pub const SUPPORT_EMAIL: &str = "support@kualala.com";
pub const PRIVACY_EMAIL: &str = "privacy@kualala.com";
pub const LEGAL_EMAIL: &str = "legal@kualala.com";

/// Social links in the footer: (label, url).
pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Instagram", "https://instagram.com/kualala"),
    ("Twitter", "https://twitter.com/kualala"),
    ("YouTube", "https://youtube.com/@kualala"),
    ("Facebook", "https://facebook.com/kualala"),
];

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
