//! Navigation entry types.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::NavError;

/// Absolute URL prefix: a URI scheme followed by `://`.
///
/// # Panics
///
/// Panics if the hard-coded regex literal is invalid (impossible in practice).
#[allow(clippy::expect_used)]
static ABSOLUTE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9+.-]*://").expect("valid regex literal"));

/// A single navigation menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Human-readable label.
    pub title: String,
    /// Internal route or absolute external URL.
    #[serde(rename = "to")]
    pub target: Target,
    /// Symbolic icon name, resolved by the rendering layer.
    pub icon: IconRef,
}

impl NavItem {
    pub fn new(
        title: impl Into<String>,
        target: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            target: Target::new(target),
            icon: IconRef::new(icon),
        }
    }
}

/// Destination of a navigation entry.
///
/// Stored verbatim; nothing is validated when an entry is built. Use
/// [`Target::kind`] or the structural check to classify it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Target(String);

/// How a target is interpreted by the routing collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// In-app route, starts with `/`.
    Internal,
    /// Absolute URL with a scheme, opened via standard navigation.
    External,
    /// Neither of the above (an authoring defect).
    Unrecognized,
}

impl Target {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn kind(&self) -> TargetKind {
        if self.0.starts_with('/') {
            TargetKind::Internal
        } else if ABSOLUTE_URL.is_match(&self.0) {
            TargetKind::External
        } else {
            TargetKind::Unrecognized
        }
    }

    pub fn is_internal(&self) -> bool {
        self.kind() == TargetKind::Internal
    }

    pub fn is_external(&self) -> bool {
        self.kind() == TargetKind::External
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Opaque icon reference, e.g. `LayoutGrid`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(String);

impl IconRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// The two named navigation collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavSection {
    Primary,
    Footer,
}

impl NavSection {
    pub const ALL: [NavSection; 2] = [NavSection::Primary, NavSection::Footer];

    pub fn as_str(self) -> &'static str {
        match self {
            NavSection::Primary => "primary",
            NavSection::Footer => "footer",
        }
    }
}

impl fmt::Display for NavSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for NavSection {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "primary" => Ok(NavSection::Primary),
            "footer" => Ok(NavSection::Footer),
            other => Err(NavError::UnknownSection(other.to_string())),
        }
    }
}
