//! navreg - inspect and check the application navigation.
//!
//! Usage:
//!   navreg show --section footer --json
//!   navreg --manifest nav.toml check

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use nav_registry::config::Config;
use nav_registry::menu::{self, NavItem, NavRegistry, NavSection};

/// Navigation registry tool.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML manifest to load instead of the built-in navigation.
    #[arg(long, global = true)]
    manifest: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print navigation entries in display order.
    Show {
        /// Only print one section (primary or footer).
        #[arg(long)]
        section: Option<NavSection>,

        /// Emit JSON for the rendering layer.
        #[arg(long)]
        json: bool,
    },
    /// Report authoring defects; exits non-zero if any are found.
    Check {
        /// Skip icon name lookup.
        #[arg(long)]
        no_icons: bool,
    },
}

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    init_tracing();

    let args = Args::parse();
    let mut config = Config::from_env().context("failed to load configuration")?;
    let no_icons = matches!(args.command, Command::Check { no_icons: true });
    config.apply_overrides(args.manifest, no_icons);

    let registry = match &config.manifest {
        Some(path) => NavRegistry::load(path)
            .with_context(|| format!("failed to load manifest {}", path.display()))?,
        None => NavRegistry::builtin(),
    };
    let registry = menu::install(registry).context("failed to install navigation registry")?;

    match args.command {
        Command::Show { section, json } => {
            show(registry, section, json)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { .. } => {
            let issues = menu::check(registry, config.icon_resolver());
            if issues.is_empty() {
                info!(entries = registry.len(), "navigation is clean");
                return Ok(ExitCode::SUCCESS);
            }

            for issue in &issues {
                println!("{issue}");
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

fn show(registry: &NavRegistry, section: Option<NavSection>, json: bool) -> Result<()> {
    if json {
        let out = match section {
            Some(section) => serde_json::to_string_pretty(registry.section(section))?,
            None => registry.to_json()?,
        };
        println!("{out}");
        return Ok(());
    }

    let sections = section.map_or(NavSection::ALL.to_vec(), |s| vec![s]);
    for section in sections {
        println!("[{section}]");
        for item in registry.section(section) {
            print_item(item);
        }
    }
    Ok(())
}

fn print_item(item: &NavItem) {
    println!("  {:<24} {:<12} {}", item.title, item.icon, item.target);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
