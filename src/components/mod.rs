//! UI components built with Leptos.
//!
//! - [`router`] - Screen dispatch and the authenticated shell (main entry point)
//! - [`navbar`] / [`footer`] - Shell chrome around authenticated screens
//! - [`cards`] - Book, collection and layout building blocks shared by pages
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`pages`] - One component per screen
//! - [`reader`] - Chapter reader with highlights and table of contents

pub mod cards;
pub mod footer;
pub mod icons;
pub mod navbar;
pub mod pages;
pub mod reader;
pub mod router;

pub use router::AppRouter;
