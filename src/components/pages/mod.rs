//! One component per screen.
//!
//! - [`landing`] - Public landing page
//! - [`auth`] - Login, signup and password reset forms
//! - [`discover`] - Home feed for signed-in users
//! - [`books`] - Searchable, filterable book listing
//! - [`summary`] - Book detail
//! - [`library`] - Reading stats and the library sub-lists
//! - [`premium`] - Plans and checkout
//! - [`profile`] - Profile editor and achievements
//! - [`settings`] - Local preferences
//! - [`collections`] - Collection listing and detail
//! - [`info`] - About and legal pages

mod auth;
mod books;
mod collections;
mod discover;
mod info;
mod landing;
mod library;
mod premium;
mod profile;
mod settings;
mod summary;

pub use auth::{ForgotPasswordPage, LoginPage, SignupPage};
pub use books::BooksPage;
pub use collections::{CollectionDetailPage, CollectionsPage};
pub use discover::DiscoverPage;
pub use info::{AboutPage, PrivacyPage, TermsPage};
pub use landing::LandingPage;
pub use library::{CompletedBooksPage, ContinueReadingPage, FavoritesPage, LibraryPage};
pub use premium::{PaymentPage, PremiumPage};
pub use profile::{AchievementsPage, ProfilePage};
pub use settings::SettingsPage;
pub use summary::SummaryPage;
