//! # todo-landing
//!
//! Static site generator for the Floating Todo App landing page.
//!
//! ## Usage
//!
//! ```bash
//! # Write dist/index.html
//! todo-landing build
//!
//! # Custom output dir + site config
//! todo-landing build --out public --config landing.toml
//!
//! # Print the feature list
//! todo-landing features --json
//! ```

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use floating_todo_landing::config::{self, SiteConfig};
use floating_todo_landing::content::FEATURES;
use floating_todo_landing::render_page;
use floating_todo_landing::types::PageConfig;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "todo-landing")]
#[command(about = "Render the Floating Todo App landing page to static HTML")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the page to <OUT>/index.html
    Build {
        /// Output directory (created if missing)
        #[arg(long, short, default_value = "dist")]
        out: PathBuf,

        /// Site config file (TOML)
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Copyright year shown in the footer (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,

        /// Print the HTML to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
    /// List the features shown on the page, in display order
    Features {
        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr, stdout carries HTML/feature output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Build {
            out,
            config,
            year,
            stdout,
        } => build(out, config, year, stdout),
        Command::Features { json } => list_features(json),
    }
}

fn build(out: PathBuf, config_path: Option<PathBuf>, year: Option<i32>, stdout: bool) -> Result<()> {
    let mut page = match config_path {
        Some(path) => {
            debug!(path = %path.display(), "loading site config");
            SiteConfig::load_from_path(&path)?.into_page_config()?
        }
        None => PageConfig::default(),
    };

    page.copyright_year = year
        .or(page.copyright_year)
        .or_else(|| Some(chrono::Local::now().year()));
    config::validate(&page)?;

    let html = render_page(FEATURES, &page);

    if stdout {
        let mut out = std::io::stdout().lock();
        out.write_all(html.as_bytes())
            .context("Failed to write HTML to stdout")?;
        out.flush().context("Failed to flush stdout")?;
        return Ok(());
    }

    std::fs::create_dir_all(&out)
        .with_context(|| format!("Failed to create output directory {}", out.display()))?;
    let index = out.join("index.html");
    std::fs::write(&index, &html)
        .with_context(|| format!("Failed to write {}", index.display()))?;

    info!(
        path = %index.display(),
        bytes = html.len(),
        cards = FEATURES.len(),
        "landing page written"
    );
    Ok(())
}

fn list_features(json: bool) -> Result<()> {
    let mut out = std::io::stdout().lock();

    if json {
        let body = serde_json::to_string_pretty(FEATURES).context("Failed to serialize features")?;
        writeln!(out, "{}", body)?;
        return Ok(());
    }

    for (i, feature) in FEATURES.iter().enumerate() {
        writeln!(
            out,
            "{}. [{}] {} - {}",
            i + 1,
            feature.icon.glyph.name(),
            feature.title,
            feature.description
        )?;
    }
    Ok(())
}
