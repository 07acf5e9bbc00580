//! Structural check for authoring defects.
//!
//! The registry never validates its own entries. This pass is what a test
//! suite or the `navreg check` command runs over a loaded registry.

use thiserror::Error;
use tracing::debug;
use url::Url;

use super::item::{NavSection, TargetKind};
use super::registry::NavRegistry;
use crate::icon::IconResolver;

/// One authoring defect, located by section and display index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavIssue {
    #[error("{section}[{index}]: empty title")]
    EmptyTitle { section: NavSection, index: usize },

    #[error("{section}[{index}] '{title}': empty target")]
    EmptyTarget {
        section: NavSection,
        index: usize,
        title: String,
    },

    #[error("{section}[{index}] '{title}': target '{target}' is neither a route nor an absolute URL")]
    MalformedTarget {
        section: NavSection,
        index: usize,
        title: String,
        target: String,
    },

    #[error("{section}[{index}] '{title}': empty icon")]
    EmptyIcon {
        section: NavSection,
        index: usize,
        title: String,
    },

    #[error("{section}[{index}] '{title}': unknown icon '{icon}'")]
    UnknownIcon {
        section: NavSection,
        index: usize,
        title: String,
        icon: String,
    },
}

/// Check every entry and return all defects, primary first, in display order.
///
/// Icon names are only looked up when `icons` is given.
pub fn check(registry: &NavRegistry, icons: Option<&dyn IconResolver>) -> Vec<NavIssue> {
    let mut issues = Vec::new();

    for section in NavSection::ALL {
        for (index, item) in registry.section(section).iter().enumerate() {
            let title = item.title.clone();

            if item.title.trim().is_empty() {
                issues.push(NavIssue::EmptyTitle { section, index });
            }

            if item.target.is_empty() {
                issues.push(NavIssue::EmptyTarget {
                    section,
                    index,
                    title: title.clone(),
                });
            } else if !target_is_well_formed(item.target.as_str(), item.target.kind()) {
                issues.push(NavIssue::MalformedTarget {
                    section,
                    index,
                    title: title.clone(),
                    target: item.target.to_string(),
                });
            }

            if item.icon.name().trim().is_empty() {
                issues.push(NavIssue::EmptyIcon {
                    section,
                    index,
                    title,
                });
            } else if let Some(icons) = icons
                && icons.resolve(&item.icon).is_none()
            {
                issues.push(NavIssue::UnknownIcon {
                    section,
                    index,
                    title,
                    icon: item.icon.to_string(),
                });
            }
        }
    }

    if !issues.is_empty() {
        debug!(issues = issues.len(), "navigation authoring defects found");
    }

    issues
}

fn target_is_well_formed(raw: &str, kind: TargetKind) -> bool {
    match kind {
        TargetKind::Internal => !raw.starts_with("//"),
        TargetKind::External => Url::parse(raw).is_ok_and(|url| url.has_host()),
        TargetKind::Unrecognized => false,
    }
}
