//! Read-only data provider.
//!
//! Screens ask a [`Catalog`] for books, collections and user records instead
//! of embedding literals. [`MockCatalog`] serves an embedded JSON document;
//! a backend-backed provider can replace it without touching navigation or
//! session logic.

mod mock;
mod model;
mod query;

pub use mock::MockCatalog;
pub use model::{
    Achievement, Book, BookSummary, CategoryShare, Chapter, Collection, DiscoverFeed, Faq, Goal,
    PaymentMethod, Plan, Profile, ReadingProgress, Section, SelectedPlan, Stat, Tone, percent,
};
pub use query::{ALL_CATEGORIES, BookFilter};

use crate::navigation::BookId;

/// Source of catalog and mock user data.
pub trait Catalog: Send + Sync {
    /// Browsable categories, without the "All Books" pseudo-category.
    fn categories(&self) -> &[String];

    fn books(&self) -> &[Book];

    fn book(&self, id: BookId) -> Option<&Book> {
        self.books().iter().find(|book| book.id == id)
    }

    /// Resolves ids in order, skipping any the catalog does not know.
    fn books_by_ids(&self, ids: &[BookId]) -> Vec<&Book> {
        ids.iter().filter_map(|id| self.book(*id)).collect()
    }

    fn summary(&self, id: BookId) -> Option<&BookSummary>;

    /// Placeholder summary for books without detailed content.
    fn fallback_summary(&self) -> &BookSummary;

    fn collections(&self) -> &[Collection];

    fn collection(&self, id: &str) -> Option<&Collection> {
        self.collections().iter().find(|c| c.id == id)
    }

    fn discover(&self) -> &DiscoverFeed;

    /// Books the user has started, most recent first.
    fn reading(&self) -> &[ReadingProgress];

    fn completed(&self) -> &[BookId];

    fn favorites(&self) -> &[BookId];

    fn achievements(&self) -> &[Achievement];

    fn plans(&self) -> &[Plan];

    fn plan(&self, id: &str) -> Option<&Plan> {
        self.plans().iter().find(|plan| plan.id == id)
    }

    fn payment_methods(&self) -> &[PaymentMethod];

    fn faqs(&self) -> &[Faq];

    /// Reader chapters for a book. Never empty.
    fn chapters(&self, id: BookId) -> &[Chapter];

    fn profile(&self) -> &Profile;

    /// Headline numbers on the library screen.
    fn library_stats(&self) -> &[Stat];
}
