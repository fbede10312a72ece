//! Book listing filter.

use super::model::Book;

/// Label of the pseudo-category that matches every book.
pub const ALL_CATEGORIES: &str = "All Books";

/// Category + free-text filter used by the books listing.
///
/// Text matches case-insensitively against title or author.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookFilter {
    /// `None` matches every category.
    pub category: Option<String>,
    pub text: String,
}

impl BookFilter {
    pub fn new(category: &str, text: &str) -> Self {
        let category = (category != ALL_CATEGORIES).then(|| category.to_string());
        Self {
            category,
            text: text.to_string(),
        }
    }

    pub fn matches(&self, book: &Book) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .is_none_or(|category| book.category == category);
        if !category_ok {
            return false;
        }

        let needle = self.text.trim().to_lowercase();
        needle.is_empty()
            || book.title.to_lowercase().contains(&needle)
            || book.author.to_lowercase().contains(&needle)
    }

    pub fn apply<'a>(&self, books: &'a [Book]) -> Vec<&'a Book> {
        books.iter().filter(|book| self.matches(book)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Tone;

    fn book(id: u32, title: &str, author: &str, category: &str) -> Book {
        Book {
            id,
            title: title.into(),
            author: author.into(),
            category: category.into(),
            minutes: 10,
            cover: Tone("#000".into(), "#fff".into()),
            rating: None,
            blurb: None,
        }
    }

    fn shelf() -> Vec<Book> {
        vec![
            book(1, "Atomic Habits", "James Clear", "Self-Help"),
            book(2, "Thinking, Fast and Slow", "Daniel Kahneman", "Psychology"),
            book(5, "Deep Work", "Cal Newport", "Self-Help"),
            book(10, "Start with Why", "Simon Sinek", "Business"),
        ]
    }

    fn ids(books: Vec<&Book>) -> Vec<u32> {
        books.into_iter().map(|b| b.id).collect()
    }

    #[test]
    fn test_all_books_no_text() {
        let books = shelf();
        assert_eq!(ids(BookFilter::new(ALL_CATEGORIES, "").apply(&books)), vec![1, 2, 5, 10]);
    }

    #[test]
    fn test_category_only() {
        let books = shelf();
        assert_eq!(ids(BookFilter::new("Self-Help", "").apply(&books)), vec![1, 5]);
    }

    #[test]
    fn test_text_matches_title_or_author_case_insensitive() {
        let books = shelf();
        assert_eq!(ids(BookFilter::new(ALL_CATEGORIES, "HABITS").apply(&books)), vec![1]);
        assert_eq!(ids(BookFilter::new(ALL_CATEGORIES, "newport").apply(&books)), vec![5]);
    }

    #[test]
    fn test_category_and_text_combine() {
        let books = shelf();
        assert!(BookFilter::new("Business", "habits").apply(&books).is_empty());
        assert_eq!(ids(BookFilter::new("Business", "sinek").apply(&books)), vec![10]);
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        let books = shelf();
        assert_eq!(ids(BookFilter::new(ALL_CATEGORIES, "  deep ").apply(&books)), vec![5]);
    }
}
