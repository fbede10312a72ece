//! Text-selection capture for highlight mode.
//!
//! A window `pointerup` listener is attached only while highlight mode is on.
//! It is detached when the mode turns off or the reader unmounts.

use kualala_core::{ReaderState, Subscription, Unsubscribe};
use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::{ev, prelude::*};

use crate::utils::dom;

/// Window listener registration owned by a [`Subscription`].
pub struct PointerUpListener(WindowListenerHandle);

impl Unsubscribe for PointerUpListener {
    fn unsubscribe(self) {
        self.0.remove();
    }
}

/// Keeps the selection listener in step with `reader.highlight_mode`.
pub fn use_highlight_capture(reader: RwSignal<ReaderState>) {
    let listener = StoredValue::new_local(Subscription::<PointerUpListener>::new());
    let mode = Memo::new(move |_| reader.with(|r| r.highlight_mode));

    Effect::new(move |_| {
        if mode.get() {
            listener.update_value(|sub| sub.acquire(|| attach(reader)));
            log::debug!("highlight capture on");
        } else {
            listener.update_value(Subscription::release);
        }
    });

    on_cleanup(move || {
        listener.try_update_value(Subscription::release);
    });
}

fn attach(reader: RwSignal<ReaderState>) -> PointerUpListener {
    PointerUpListener(window_event_listener(ev::pointerup, move |_| {
        let Some(text) = dom::selected_text() else {
            return;
        };
        let captured = reader
            .try_update(|r| r.capture_selection(&text).is_some())
            .unwrap_or(false);
        if captured {
            dom::clear_selection();
        }
    }))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use leptos::task::{Executor, tick};
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn select_text(text: &str) {
        let document = dom::document().expect("document");
        let node = document.create_element("p").expect("create paragraph");
        node.set_text_content(Some(text));
        document
            .body()
            .expect("document body")
            .append_child(&node)
            .expect("append paragraph");
        let range = document.create_range().expect("create range");
        range.select_node_contents(&node).expect("select paragraph");
        let selection = dom::window()
            .and_then(|w| w.get_selection().ok().flatten())
            .expect("selection");
        selection.remove_all_ranges().expect("clear selection");
        selection.add_range(&range).expect("add range");
    }

    fn release_pointer() {
        let event = web_sys::Event::new("pointerup").expect("pointerup event");
        dom::window()
            .expect("window")
            .dispatch_event(&event)
            .expect("dispatch pointerup");
    }

    fn highlight_count(reader: RwSignal<ReaderState>) -> usize {
        reader.with_untracked(|r| r.highlights().len())
    }

    #[wasm_bindgen_test]
    async fn listener_is_detached_when_reader_unmounts() {
        let _ = Executor::init_wasm_bindgen();
        let reader = RwSignal::new(ReaderState::new(3));
        let owner = Owner::new();
        owner.with(|| use_highlight_capture(reader));

        reader.update(ReaderState::toggle_highlight_mode);
        tick().await;
        tick().await;
        select_text("foo");
        release_pointer();
        assert_eq!(highlight_count(reader), 1);

        // Highlight mode is still on; only the unmount stops capture.
        owner.cleanup();
        select_text("bar");
        release_pointer();
        assert_eq!(highlight_count(reader), 1);
    }
}
