//! Reading-screen state.
//!
//! One [`ReaderState`] lives for one visit to the reader. Nothing here is
//! persisted: highlights, font size and the completed flag are gone once the
//! reader is left.

use std::collections::BTreeSet;

/// Smallest reader font size in pixels.
pub const MIN_FONT_SIZE: u8 = 12;
/// Largest reader font size in pixels.
pub const MAX_FONT_SIZE: u8 = 24;
pub const DEFAULT_FONT_SIZE: u8 = 16;
/// Pixels added or removed per font-size step.
pub const FONT_SIZE_STEP: u8 = 2;

/// Prefix of generated highlight ids.
const HIGHLIGHT_PREFIX: &str = "highlight-";

/// A passage captured while highlight mode was on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Highlight {
    /// Unique within one reader session.
    pub id: String,
    pub text: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Justify,
}

impl TextAlign {
    /// CSS `text-align` value.
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Justify => "justify",
        }
    }
}

/// What the reader sidebar lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SidebarView {
    #[default]
    Contents,
    Highlights,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReaderState {
    chapter_count: usize,
    chapter: usize,
    expanded: BTreeSet<usize>,
    highlights: Vec<Highlight>,
    next_highlight: u64,
    pub highlight_mode: bool,
    font_size: u8,
    pub align: TextAlign,
    pub sidebar_open: bool,
    pub sidebar_view: SidebarView,
    completed: bool,
    pub favorite: bool,
}

impl ReaderState {
    /// Opens the reader on the first chapter. A zero count is treated as one
    /// chapter so the index is always valid.
    pub fn new(chapter_count: usize) -> Self {
        Self {
            chapter_count: chapter_count.max(1),
            chapter: 0,
            expanded: BTreeSet::from([0]),
            highlights: Vec::new(),
            next_highlight: 1,
            highlight_mode: false,
            font_size: DEFAULT_FONT_SIZE,
            align: TextAlign::default(),
            sidebar_open: true,
            sidebar_view: SidebarView::default(),
            completed: false,
            favorite: false,
        }
    }

    // ---- chapters ----

    pub fn chapter(&self) -> usize {
        self.chapter
    }

    pub fn chapter_count(&self) -> usize {
        self.chapter_count
    }

    pub fn is_first(&self) -> bool {
        self.chapter == 0
    }

    pub fn is_last(&self) -> bool {
        self.chapter + 1 == self.chapter_count
    }

    pub fn next_chapter(&mut self) {
        if !self.is_last() {
            self.chapter += 1;
        }
    }

    pub fn prev_chapter(&mut self) {
        self.chapter = self.chapter.saturating_sub(1);
    }

    /// Jumps to `index` (clamped) and expands it in the contents tree.
    pub fn go_to(&mut self, index: usize) {
        self.chapter = index.min(self.chapter_count - 1);
        self.expanded.insert(self.chapter);
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    pub fn toggle_expanded(&mut self, index: usize) {
        if !self.expanded.remove(&index) {
            self.expanded.insert(index);
        }
    }

    // ---- highlights ----

    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    pub fn toggle_highlight_mode(&mut self) {
        self.highlight_mode = !self.highlight_mode;
    }

    /// Records a selection made on the page. Ignored while highlight mode is
    /// off or when the selection is blank.
    pub fn capture_selection(&mut self, text: &str) -> Option<&Highlight> {
        let text = text.trim();
        if !self.highlight_mode || text.is_empty() {
            return None;
        }
        let id = format!("{HIGHLIGHT_PREFIX}{}", self.next_highlight);
        self.next_highlight += 1;
        self.highlights.push(Highlight {
            id,
            text: text.to_string(),
        });
        self.highlights.last()
    }

    /// Removes a highlight. Returns whether one was removed.
    pub fn remove_highlight(&mut self, id: &str) -> bool {
        let before = self.highlights.len();
        self.highlights.retain(|h| h.id != id);
        self.highlights.len() != before
    }

    // ---- typography ----

    pub fn font_size(&self) -> u8 {
        self.font_size
    }

    pub fn increase_font(&mut self) {
        self.font_size = (self.font_size + FONT_SIZE_STEP).min(MAX_FONT_SIZE);
    }

    pub fn decrease_font(&mut self) {
        self.font_size = self
            .font_size
            .saturating_sub(FONT_SIZE_STEP)
            .max(MIN_FONT_SIZE);
    }

    pub fn toggle_align(&mut self) {
        self.align = match self.align {
            TextAlign::Left => TextAlign::Justify,
            TextAlign::Justify => TextAlign::Left,
        };
    }

    // ---- sidebar ----

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn show(&mut self, view: SidebarView) {
        self.sidebar_view = view;
    }

    // ---- completion ----

    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Marks the book finished. There is no way back.
    pub fn mark_completed(&mut self) {
        self.completed = true;
    }

    pub fn toggle_favorite(&mut self) {
        self.favorite = !self.favorite;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let reader = ReaderState::new(4);
        assert_eq!(reader.chapter(), 0);
        assert_eq!(reader.font_size(), 16);
        assert_eq!(reader.align, TextAlign::Left);
        assert_eq!(reader.sidebar_view, SidebarView::Contents);
        assert!(reader.is_expanded(0));
        assert!(!reader.completed());
    }

    #[test]
    fn test_chapter_bounds() {
        let mut reader = ReaderState::new(3);
        reader.prev_chapter();
        assert_eq!(reader.chapter(), 0);
        for _ in 0..5 {
            reader.next_chapter();
        }
        assert_eq!(reader.chapter(), 2);
        assert!(reader.is_last());
        reader.go_to(99);
        assert_eq!(reader.chapter(), 2);
    }

    #[test]
    fn test_zero_chapters_still_valid() {
        let mut reader = ReaderState::new(0);
        assert_eq!(reader.chapter_count(), 1);
        reader.next_chapter();
        assert_eq!(reader.chapter(), 0);
        assert!(reader.is_first() && reader.is_last());
    }

    #[test]
    fn test_go_to_expands() {
        let mut reader = ReaderState::new(4);
        assert!(!reader.is_expanded(2));
        reader.go_to(2);
        assert_eq!(reader.chapter(), 2);
        assert!(reader.is_expanded(2));
        reader.toggle_expanded(2);
        assert!(!reader.is_expanded(2));
    }

    #[test]
    fn test_font_size_clamps() {
        let mut reader = ReaderState::new(1);
        for _ in 0..10 {
            reader.increase_font();
        }
        assert_eq!(reader.font_size(), MAX_FONT_SIZE);
        for _ in 0..10 {
            reader.decrease_font();
        }
        assert_eq!(reader.font_size(), MIN_FONT_SIZE);
    }

    #[test]
    fn test_highlight_only_while_mode_on() {
        let mut reader = ReaderState::new(1);
        reader.toggle_highlight_mode();
        reader.capture_selection("foo");
        reader.toggle_highlight_mode();
        reader.capture_selection("bar");

        assert_eq!(reader.highlights().len(), 1);
        assert_eq!(reader.highlights()[0].text, "foo");
    }

    #[test]
    fn test_blank_selection_ignored() {
        let mut reader = ReaderState::new(1);
        reader.highlight_mode = true;
        assert!(reader.capture_selection("   ").is_none());
        assert!(reader.highlights().is_empty());
    }

    #[test]
    fn test_highlight_ids_unique_after_removal() {
        let mut reader = ReaderState::new(1);
        reader.highlight_mode = true;
        let first = reader.capture_selection("one").unwrap().id.clone();
        assert!(reader.remove_highlight(&first));
        assert!(!reader.remove_highlight(&first));
        let second = reader.capture_selection("two").unwrap().id.clone();
        assert_ne!(first, second);
        assert!(second.starts_with("highlight-"));
    }

    #[test]
    fn test_completed_is_one_way() {
        let mut reader = ReaderState::new(1);
        reader.mark_completed();
        reader.mark_completed();
        assert!(reader.completed());
    }

    #[test]
    fn test_toggles() {
        let mut reader = ReaderState::new(1);
        reader.toggle_align();
        assert_eq!(reader.align.as_css(), "justify");
        reader.toggle_sidebar();
        assert!(!reader.sidebar_open);
        reader.show(SidebarView::Highlights);
        assert_eq!(reader.sidebar_view, SidebarView::Highlights);
        reader.toggle_favorite();
        assert!(reader.favorite);
    }
}
