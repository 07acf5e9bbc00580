//! Icon resolution seam.
//!
//! Navigation entries only carry a symbolic icon name. Turning that name
//! into something drawable belongs to the rendering layer, which plugs in
//! through [`IconResolver`].

use crate::menu::IconRef;

/// Resolves a symbolic icon name to whatever the renderer draws.
pub trait IconResolver: Send + Sync {
    /// Returns `None` when the icon set has no glyph by that name.
    fn resolve(&self, icon: &IconRef) -> Option<String>;
}

/// Lucide component names known to the frontend bundle.
const LUCIDE_KNOWN: &[&str] = &[
    // Built-in navigation
    "LayoutGrid",
    "User",
    "CirclePlay",
    "SquareCode",
    "Tractor",
    // Other icons manifests commonly use
    "Users",
    "House",
    "Settings",
    "BookOpen",
    "Github",
    "ExternalLink",
    "Building2",
];

/// Resolver for the Lucide icon set.
///
/// Maps a PascalCase component name (`LayoutGrid`) to its kebab-case
/// icon slug (`layout-grid`).
#[derive(Debug, Clone, Copy, Default)]
pub struct LucideIcons;

impl LucideIcons {
    pub fn is_known(&self, name: &str) -> bool {
        LUCIDE_KNOWN.contains(&name)
    }
}

impl IconResolver for LucideIcons {
    fn resolve(&self, icon: &IconRef) -> Option<String> {
        self.is_known(icon.name()).then(|| kebab_slug(icon.name()))
    }
}

/// `SquareCode` -> `square-code`, `Building2` -> `building-2`.
fn kebab_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    for ch in name.chars() {
        let starts_word = ch.is_ascii_uppercase()
            || (ch.is_ascii_digit() && prev.is_some_and(|p| !p.is_ascii_digit()));
        if starts_word && prev.is_some() {
            slug.push('-');
        }
        slug.push(ch.to_ascii_lowercase());
        prev = Some(ch);
    }
    slug
}
