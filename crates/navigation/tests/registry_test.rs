#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Process-wide registry tests (built-in navigation, nothing installed).

use std::thread;

use nav_registry::menu::{self, NavRegistry, TargetKind};
use nav_registry::{footer_items, primary_items};
use regex::Regex;

#[test]
fn test_primary_items_builtin() {
    let items = primary_items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "Dashboard");
    assert_eq!(items[0].target.as_str(), "/dashboard");
    assert_eq!(items[1].title, "Users");
    assert_eq!(items[1].target.as_str(), "/users");
}

#[test]
fn test_footer_items_builtin() {
    let items = footer_items();
    assert_eq!(items.len(), 3);
    let github = Regex::new(r"^https://github\.com/bjornleonhenry/").unwrap();
    for item in items {
        assert!(github.is_match(item.target.as_str()), "{}", item.target);
        assert_eq!(item.target.kind(), TargetKind::External);
    }
}

#[test]
fn test_titles_and_targets_non_empty() {
    for item in primary_items().iter().chain(footer_items()) {
        assert!(!item.title.is_empty());
        assert!(!item.target.is_empty());
    }
}

#[test]
fn test_targets_are_routes_or_urls() {
    let route = Regex::new(r"^/").unwrap();
    let url = Regex::new(r"^[a-z]+://").unwrap();
    for item in primary_items().iter().chain(footer_items()) {
        let target = item.target.as_str();
        assert!(route.is_match(target) || url.is_match(target), "{target}");
    }
}

#[test]
fn test_reads_are_stable() {
    assert_eq!(primary_items(), primary_items());
    assert_eq!(footer_items(), footer_items());
    assert!(std::ptr::eq(primary_items(), primary_items()));
}

#[test]
fn test_sections_are_distinct_and_populated() {
    assert!(!primary_items().is_empty());
    assert!(!footer_items().is_empty());
    assert_ne!(primary_items(), footer_items());
}

#[test]
fn test_global_matches_builtin() {
    assert_eq!(menu::global(), &NavRegistry::builtin());
}

#[test]
fn test_concurrent_readers() {
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| (primary_items().len(), footer_items().len())))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), (2, 3));
    }
}

#[test]
fn test_builtin_passes_check() {
    let issues = menu::check(menu::global(), Some(&nav_registry::icon::LucideIcons));
    assert!(issues.is_empty(), "{issues:?}");
}
