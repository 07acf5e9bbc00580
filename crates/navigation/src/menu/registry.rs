//! Navigation registry - holds the primary and footer menu lists.
//!
//! A registry is built once (from the built-in table or a TOML manifest)
//! and read thereafter. There is no API to add, remove, or reorder
//! entries after construction.

use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::builtin;
use super::item::{NavItem, NavSection};
use crate::error::{NavError, NavResult};

/// Process-wide registry, set at most once.
static GLOBAL: OnceLock<NavRegistry> = OnceLock::new();

/// Two ordered, independent navigation lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavRegistry {
    /// Main in-app menu, in display order.
    #[serde(default)]
    primary: Vec<NavItem>,
    /// Footer links, in display order.
    #[serde(default)]
    footer: Vec<NavItem>,
}

impl NavRegistry {
    /// Create a registry from already-ordered lists.
    pub fn new(primary: Vec<NavItem>, footer: Vec<NavItem>) -> Self {
        Self { primary, footer }
    }

    /// The navigation shipped with the application.
    pub fn builtin() -> Self {
        Self::new(rows(builtin::PRIMARY), rows(builtin::FOOTER))
    }

    /// Parse a registry from a TOML manifest with `[[primary]]` and
    /// `[[footer]]` tables. Missing sections are empty.
    ///
    /// Entries are taken as written: nothing is merged, deduplicated, or
    /// validated. Run [`crate::menu::check`] for authoring defects.
    pub fn from_toml_str(content: &str) -> NavResult<Self> {
        let registry: NavRegistry = toml::from_str(content)?;
        debug!(
            primary = registry.primary.len(),
            footer = registry.footer.len(),
            "parsed navigation manifest"
        );
        Ok(registry)
    }

    /// Load a registry from a TOML manifest on disk.
    pub fn load(path: &Path) -> NavResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| NavError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content)
    }

    /// Primary navigation, in display order.
    pub fn primary_items(&self) -> &[NavItem] {
        &self.primary
    }

    /// Footer navigation, in display order.
    pub fn footer_items(&self) -> &[NavItem] {
        &self.footer
    }

    /// Items of the given section, in display order.
    pub fn section(&self, section: NavSection) -> &[NavItem] {
        match section {
            NavSection::Primary => &self.primary,
            NavSection::Footer => &self.footer,
        }
    }

    /// Total entry count across both sections.
    pub fn len(&self) -> usize {
        self.primary.len() + self.footer.len()
    }

    /// Check if both sections are empty.
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.footer.is_empty()
    }

    /// Render as `{"primary": [...], "footer": [...]}` for the rendering layer.
    pub fn to_json(&self) -> NavResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn rows(table: &[(&str, &str, &str)]) -> Vec<NavItem> {
    table
        .iter()
        .map(|&(title, target, icon)| NavItem::new(title, target, icon))
        .collect()
}

/// Install the process-wide registry.
///
/// Must happen before the first read; afterwards the slot is fixed and
/// this returns [`NavError::AlreadyInstalled`].
pub fn install(registry: NavRegistry) -> NavResult<&'static NavRegistry> {
    let primary = registry.primary.len();
    let footer = registry.footer.len();

    GLOBAL
        .set(registry)
        .map_err(|_| NavError::AlreadyInstalled)?;

    info!(primary, footer, "navigation registry installed");
    Ok(global())
}

/// The process-wide registry, falling back to [`NavRegistry::builtin`]
/// when nothing was installed before the first read.
pub fn global() -> &'static NavRegistry {
    GLOBAL.get_or_init(NavRegistry::builtin)
}

/// Primary navigation of the process-wide registry.
pub fn primary_items() -> &'static [NavItem] {
    global().primary_items()
}

/// Footer navigation of the process-wide registry.
pub fn footer_items() -> &'static [NavItem] {
    global().footer_items()
}
