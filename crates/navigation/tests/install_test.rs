#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Installing a registry into the process-wide slot.
//!
//! Kept to a single test: the slot is per process and set at most once.

use nav_registry::menu::{self, NavItem, NavRegistry};
use nav_registry::{NavError, footer_items, primary_items};

#[test]
fn test_install_once_then_fixed() {
    let custom = NavRegistry::new(
        vec![NavItem::new("Home", "/", "House")],
        vec![NavItem::new(
            "Docs",
            "https://docs.example.com",
            "BookOpen",
        )],
    );

    let installed = menu::install(custom.clone()).unwrap();
    assert_eq!(installed, &custom);
    assert_eq!(primary_items()[0].title, "Home");
    assert_eq!(footer_items()[0].title, "Docs");

    let err = menu::install(NavRegistry::builtin()).unwrap_err();
    assert!(matches!(err, NavError::AlreadyInstalled));
    assert_eq!(primary_items().len(), 1);
}
