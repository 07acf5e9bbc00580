//! Navigation menus for the application shell.
//!
//! Two ordered lists are exposed to the rendering layer:
//! - Primary navigation (the main in-app menu)
//! - Footer navigation (secondary, often external links)

mod builtin;
pub mod check;
mod item;
mod registry;

pub use check::{NavIssue, check};
pub use item::{IconRef, NavItem, NavSection, Target, TargetKind};
pub use registry::{NavRegistry, footer_items, global, install, primary_items};
