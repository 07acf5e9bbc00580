//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::icon::{IconResolver, LucideIcons};

/// Navigation tool configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// TOML manifest to load instead of the built-in navigation (NAV_MANIFEST).
    pub manifest: Option<PathBuf>,

    /// Whether `check` verifies icon names against the Lucide set (default: true).
    pub icon_check: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let manifest = env::var("NAV_MANIFEST")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let icon_check = parse_bool(env::var("NAV_ICON_CHECK").ok().as_deref())
            .context("NAV_ICON_CHECK must be true or false")?;

        Ok(Self {
            manifest,
            icon_check,
        })
    }

    /// Apply command-line flags; a flag that is given wins over the environment.
    pub fn apply_overrides(&mut self, manifest: Option<PathBuf>, no_icons: bool) {
        if manifest.is_some() {
            self.manifest = manifest;
        }
        if no_icons {
            self.icon_check = false;
        }
    }

    /// Resolver `check` verifies icon names against, if any.
    pub fn icon_resolver(&self) -> Option<&'static dyn IconResolver> {
        if self.icon_check {
            Some(&LucideIcons)
        } else {
            None
        }
    }
}

fn parse_bool(value: Option<&str>) -> Result<bool> {
    match value.map(|v| v.trim().to_lowercase()).as_deref() {
        None | Some("") => Ok(true),
        Some("true" | "1" | "yes" | "on") => Ok(true),
        Some("false" | "0" | "no" | "off") => Ok(false),
        Some(other) => anyhow::bail!("unrecognized boolean '{other}'"),
    }
}
