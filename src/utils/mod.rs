//! Utility modules for browser access and content rendering.
//!
//! Provides:
//! - [`dom`] - Window, storage, scrolling and selection helpers
//! - [`BrowserPlatform`] - `localStorage`-backed session platform
//! - [`markdown_to_html`] - Markdown rendering with XSS sanitization
//! - [`logging`] - Console sink for the `log` facade

pub mod dom;
pub mod logging;
mod markdown;
mod platform;

pub use markdown::markdown_to_html;
pub use platform::BrowserPlatform;
