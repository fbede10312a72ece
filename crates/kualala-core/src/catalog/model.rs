//! Read-only catalog records.

use serde::{Deserialize, Serialize};

use crate::navigation::BookId;

/// Two-stop gradient used for a book cover or collection banner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tone(pub String, pub String);

impl Tone {
    /// CSS `background` value for the gradient.
    pub fn css(&self) -> String {
        format!("linear-gradient(135deg, {} 0%, {} 100%)", self.0, self.1)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub category: String,
    /// Reading time of the summary.
    pub minutes: u32,
    pub cover: Tone,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub blurb: Option<String>,
}

impl Book {
    pub fn reading_time(&self) -> String {
        format!("{} min", self.minutes)
    }
}

/// Long-form content shown on the book summary screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    pub book_id: BookId,
    pub description: String,
    pub key_insights: Vec<String>,
    pub takeaway: String,
    #[serde(default)]
    pub related: Vec<BookId>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Slug used as the collection selector.
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub tone: Tone,
    /// Advertised size of the full collection.
    pub count: u32,
    /// Books shown on the detail screen. Empty when the collection has
    /// no detail page yet.
    #[serde(default)]
    pub books: Vec<BookId>,
}

impl Collection {
    pub fn has_shelf(&self) -> bool {
        !self.books.is_empty()
    }
}

/// Curated shelves on the discover screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoverFeed {
    pub free: Vec<BookId>,
    pub new_releases: Vec<BookId>,
    pub book_of_the_day: BookId,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingProgress {
    pub book_id: BookId,
    /// Percent read, 0..=100.
    pub progress: u8,
    pub last_read: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub icon: String,
    pub title: String,
    pub description: String,
    /// Month the achievement was unlocked, `None` while locked.
    #[serde(default)]
    pub unlocked: Option<String>,
    pub progress: u32,
    pub target: u32,
}

impl Achievement {
    pub fn is_unlocked(&self) -> bool {
        self.unlocked.is_some()
    }

    pub fn percent(&self) -> u32 {
        percent(self.progress, self.target)
    }
}

/// Subscription plan offered on the premium screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub price: String,
    pub period: String,
    #[serde(default)]
    pub original_price: Option<String>,
    pub description: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub popular: bool,
}

/// Plan carried from the premium screen to the payment screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedPlan {
    pub name: String,
    pub price: String,
    pub period: String,
    pub original_price: Option<String>,
}

impl From<&Plan> for SelectedPlan {
    fn from(plan: &Plan) -> Self {
        Self {
            name: plan.name.clone(),
            price: plan.price.clone(),
            period: plan.period.clone(),
            original_price: plan.original_price.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: String,
    pub name: String,
    pub icon: String,
    /// Whether the method collects card details.
    #[serde(default)]
    pub card: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
}

/// One reader chapter. `body` is markdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    pub body: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub title: String,
    pub current: u32,
    pub target: u32,
}

impl Goal {
    pub fn percent(&self) -> u32 {
        percent(self.current, self.target)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub name: String,
    pub count: u32,
}

/// Mock signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub bio: String,
    pub joined: String,
    pub stats: Vec<Stat>,
    pub goals: Vec<Goal>,
    pub favorite_categories: Vec<CategoryShare>,
}

/// Integer percentage, clamped to 100. A zero target reads as 0%.
pub fn percent(current: u32, target: u32) -> u32 {
    if target == 0 {
        return 0;
    }
    (current.saturating_mul(100) / target).min(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent() {
        assert_eq!(percent(8, 10), 80);
        assert_eq!(percent(24, 100), 24);
        assert_eq!(percent(12, 365), 3);
        assert_eq!(percent(150, 100), 100);
        assert_eq!(percent(5, 0), 0);
    }

    #[test]
    fn test_selected_plan_from_plan() {
        let plan = Plan {
            id: "yearly".into(),
            name: "Yearly".into(),
            price: "Rp399.000".into(),
            period: "/tahun".into(),
            original_price: Some("Rp588.000".into()),
            description: String::new(),
            features: vec![],
            badge: None,
            popular: true,
        };
        let selected = SelectedPlan::from(&plan);
        assert_eq!(selected.name, "Yearly");
        assert_eq!(selected.original_price.as_deref(), Some("Rp588.000"));
    }

    #[test]
    fn test_tone_css() {
        let tone = Tone("#60a5fa".into(), "#2563eb".into());
        assert_eq!(
            tone.css(),
            "linear-gradient(135deg, #60a5fa 0%, #2563eb 100%)"
        );
    }
}
