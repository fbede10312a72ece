//! Kualala core: navigation, session flags, reader state and catalog access.
//!
//! Everything here is platform-neutral. The browser crate supplies a
//! [`Platform`] backed by `localStorage` and the DOM; tests use
//! [`MemoryPlatform`].

pub mod catalog;
pub mod error;
pub mod navigation;
pub mod reader;
pub mod screen;
pub mod services;
pub mod session;
pub mod state;
pub mod subscription;

pub use catalog::{Catalog, MockCatalog};
pub use error::{AuthError, CatalogError, PaymentError, StorageError, UnknownScreen};
pub use navigation::{BackLink, BookId, NavigationState, Selector};
pub use reader::{Highlight, ReaderState, SidebarView, TextAlign};
pub use screen::Screen;
pub use services::{
    AuthService, CardDetails, Credentials, DemoAuth, DemoPayments, PaymentGateway,
    PaymentRequest, PaymentStatus, SignupForm,
};
pub use session::{FlagStore, MemoryFlagStore, SessionFlags};
pub use state::{Action, AppState, Effect, MemoryPlatform, Platform, ViewKey};
pub use subscription::{Subscription, Unsubscribe};
