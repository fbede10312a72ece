//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the current document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Scroll the window back to the top-left corner.
pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Smoothly scroll the element with `id` into view.
///
/// Returns `false` when no such element exists.
pub fn scroll_to_element(id: &str) -> bool {
    let Some(element) = document().and_then(|d| d.get_element_by_id(id)) else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Add or remove a class on the document root (`<html>`).
pub fn set_root_class(class: &str, enabled: bool) {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        let _ = root.class_list().toggle_with_force(class, enabled);
    }
}

/// Show a blocking browser notice.
pub fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

/// Text of the current page selection, if any.
pub fn selected_text() -> Option<String> {
    let selection = window()?.get_selection().ok()??;
    let text = String::from(selection.to_string());
    (!text.trim().is_empty()).then_some(text)
}

/// Drop the current page selection.
pub fn clear_selection() {
    if let Some(Ok(Some(selection))) = window().map(|w| w.get_selection()) {
        let _ = selection.remove_all_ranges();
    }
}
