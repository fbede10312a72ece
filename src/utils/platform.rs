//! Browser implementation of the core [`Platform`].

use kualala_core::error::StorageError;
use kualala_core::{FlagStore, Platform};

use super::dom;
use crate::config::THEME_SCOPE_CLASS;

/// `localStorage` flags, window scrolling and the root theme class.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPlatform;

impl FlagStore for BrowserPlatform {
    fn read(&self, key: &str) -> Option<String> {
        dom::local_storage()?.get_item(key).ok()?
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed {
                key: key.to_string(),
            })
    }
}

impl Platform for BrowserPlatform {
    fn scroll_to_top(&self) {
        dom::scroll_to_top();
    }

    fn set_dark_scope(&self, enabled: bool) {
        dom::set_root_class(THEME_SCOPE_CLASS, enabled);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use kualala_core::SessionFlags;
    use kualala_core::session::DARK_MODE_KEY;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn root_has_dark_class() -> bool {
        dom::document()
            .and_then(|d| d.document_element())
            .is_some_and(|root| root.class_list().contains(THEME_SCOPE_CLASS))
    }

    #[wasm_bindgen_test]
    fn dark_mode_flag_survives_reload() {
        let platform = BrowserPlatform;
        platform.write(DARK_MODE_KEY, "true").expect("write flag");
        assert!(SessionFlags::load(&platform).is_dark_mode);

        platform.write(DARK_MODE_KEY, "false").expect("write flag");
        assert!(!SessionFlags::load(&platform).is_dark_mode);
    }

    #[wasm_bindgen_test]
    fn dark_scope_toggles_root_class() {
        let platform = BrowserPlatform;
        platform.set_dark_scope(true);
        assert!(root_has_dark_class());
        platform.set_dark_scope(false);
        assert!(!root_has_dark_class());
    }
}
