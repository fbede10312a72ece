//! Catalog served from an embedded JSON document.

use std::collections::HashMap;

use serde::Deserialize;

use super::Catalog;
use super::model::{
    Achievement, Book, BookSummary, Chapter, Collection, DiscoverFeed, Faq, PaymentMethod, Plan,
    Profile, ReadingProgress, Stat,
};
use crate::error::CatalogError;
use crate::navigation::BookId;

/// Catalog document compiled into the binary.
const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

/// In-memory catalog standing in for a backend.
#[derive(Debug, Deserialize)]
pub struct MockCatalog {
    categories: Vec<String>,
    books: Vec<Book>,
    summaries: Vec<BookSummary>,
    fallback_summary: BookSummary,
    collections: Vec<Collection>,
    discover: DiscoverFeed,
    reading: Vec<ReadingProgress>,
    completed: Vec<BookId>,
    favorites: Vec<BookId>,
    achievements: Vec<Achievement>,
    plans: Vec<Plan>,
    payment_methods: Vec<PaymentMethod>,
    faqs: Vec<Faq>,
    /// Chapters used for any book without its own entry.
    chapters: Vec<Chapter>,
    #[serde(default)]
    book_chapters: HashMap<BookId, Vec<Chapter>>,
    profile: Profile,
    library_stats: Vec<Stat>,
}

impl MockCatalog {
    /// Loads the catalog compiled into the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Parses and validates a catalog document.
    ///
    /// Every book id referenced from a shelf, collection or summary must
    /// exist in `books`, and the default chapter list must not be empty.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        log::debug!(
            "catalog loaded: {} books, {} collections",
            catalog.books.len(),
            catalog.collections.len()
        );
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let known = |id: &BookId| self.books.iter().any(|book| book.id == *id);

        let referenced = self
            .collections
            .iter()
            .flat_map(|c| c.books.iter())
            .chain(self.summaries.iter().flat_map(|s| s.related.iter()))
            .chain(self.summaries.iter().map(|s| &s.book_id))
            .chain(self.discover.free.iter())
            .chain(self.discover.new_releases.iter())
            .chain(std::iter::once(&self.discover.book_of_the_day))
            .chain(self.reading.iter().map(|r| &r.book_id))
            .chain(self.completed.iter())
            .chain(self.favorites.iter())
            .chain(self.book_chapters.keys());

        for id in referenced {
            if !known(id) {
                return Err(CatalogError::DanglingBook(*id));
            }
        }

        if self.chapters.is_empty() {
            return Err(CatalogError::NoChapters);
        }
        Ok(())
    }
}

impl Catalog for MockCatalog {
    fn categories(&self) -> &[String] {
        &self.categories
    }

    fn books(&self) -> &[Book] {
        &self.books
    }

    fn summary(&self, id: BookId) -> Option<&BookSummary> {
        self.summaries.iter().find(|s| s.book_id == id)
    }

    fn fallback_summary(&self) -> &BookSummary {
        &self.fallback_summary
    }

    fn collections(&self) -> &[Collection] {
        &self.collections
    }

    fn discover(&self) -> &DiscoverFeed {
        &self.discover
    }

    fn reading(&self) -> &[ReadingProgress] {
        &self.reading
    }

    fn completed(&self) -> &[BookId] {
        &self.completed
    }

    fn favorites(&self) -> &[BookId] {
        &self.favorites
    }

    fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    fn plans(&self) -> &[Plan] {
        &self.plans
    }

    fn payment_methods(&self) -> &[PaymentMethod] {
        &self.payment_methods
    }

    fn faqs(&self) -> &[Faq] {
        &self.faqs
    }

    fn chapters(&self, id: BookId) -> &[Chapter] {
        self.book_chapters
            .get(&id)
            .filter(|chapters| !chapters.is_empty())
            .unwrap_or(&self.chapters)
    }

    fn profile(&self) -> &Profile {
        &self.profile
    }

    fn library_stats(&self) -> &[Stat] {
        &self.library_stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ALL_CATEGORIES, BookFilter};

    fn catalog() -> MockCatalog {
        MockCatalog::embedded().expect("embedded catalog must parse")
    }

    #[test]
    fn test_embedded_catalog_is_valid() {
        let catalog = catalog();
        assert!(!catalog.books().is_empty());
        assert_eq!(catalog.collections().len(), 12);
        assert_eq!(catalog.plans().len(), 3);
        assert!(!catalog.categories().iter().any(|c| c == ALL_CATEGORIES));
    }

    #[test]
    fn test_book_ids_are_unique() {
        let catalog = catalog();
        let mut ids: Vec<_> = catalog.books().iter().map(|b| b.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.books().len());
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = catalog();
        assert_eq!(catalog.book(1).unwrap().title, "Atomic Habits");
        assert!(catalog.book(9999).is_none());
        assert!(catalog.collection("finance").is_some());
        assert!(catalog.collection("cooking").is_none());
        assert_eq!(catalog.plan("yearly").unwrap().badge.as_deref(), Some("BEST VALUE"));
    }

    #[test]
    fn test_books_by_ids_skips_unknown() {
        let catalog = catalog();
        let books = catalog.books_by_ids(&[1, 9999, 5]);
        let ids: Vec<_> = books.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 5]);
    }

    #[test]
    fn test_chapters_fall_back_to_default() {
        let catalog = catalog();
        assert!(!catalog.chapters(1).is_empty());
        assert_eq!(catalog.chapters(9999), catalog.chapters(1));
    }

    #[test]
    fn test_summary_falls_back() {
        let catalog = catalog();
        assert!(catalog.summary(1).is_some());
        assert!(catalog.summary(9999).is_none());
        assert!(!catalog.fallback_summary().key_insights.is_empty());
    }

    #[test]
    fn test_every_category_has_books() {
        let catalog = catalog();
        for category in catalog.categories() {
            let found = BookFilter::new(category, "").apply(catalog.books());
            assert!(!found.is_empty(), "no books in {category}");
        }
    }

    #[test]
    fn test_dangling_reference_rejected() {
        let json = EMBEDDED_CATALOG.replace("\"book_of_the_day\": 6", "\"book_of_the_day\": 4242");
        assert!(matches!(
            MockCatalog::from_json(&json),
            Err(CatalogError::DanglingBook(4242))
        ));
    }

    #[test]
    fn test_malformed_document_rejected() {
        assert!(matches!(
            MockCatalog::from_json("{\"books\": 3}"),
            Err(CatalogError::Parse(_))
        ));
    }
}
