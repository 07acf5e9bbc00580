//! Navigation Registry
//!
//! Immutable, process-wide primary and footer navigation lists for the
//! application shell, plus the loading and checking tools around them.

pub mod config;
pub mod error;
pub mod icon;
pub mod menu;

pub use error::{NavError, NavResult};
pub use menu::{NavItem, NavRegistry, NavSection, footer_items, primary_items};
