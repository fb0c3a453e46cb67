//! Render the digital-twin system prompt and print it to stdout.
//!
//! Loads `facts.json`, `summary.txt`, `linkedin.txt` and `style.txt` from a
//! resource directory. Logs go to stderr.
//!
//! # Examples
//!
//! ```sh
//! # Render with the current time
//! twin-prompt --resources ./resources
//!
//! # Reproducible render at a fixed instant
//! twin-prompt --resources ./resources --at "2025-01-02 12:00:00"
//!
//! # Non-default file names
//! twin-prompt --resources ./me --facts me.json --style voice.md --verbose
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use twin_prompt::{FixedClock, PromptComposer, ResourceSource, TwinConfig};

/// Render the digital-twin system prompt.
#[derive(Parser)]
#[command(name = "twin-prompt")]
struct Cli {
    /// Directory holding the resource files.
    #[arg(long, default_value = "resources")]
    resources: PathBuf,

    /// Facts JSON file name inside the resource directory.
    #[arg(long, default_value = "facts.json")]
    facts: String,

    /// Summary notes file name.
    #[arg(long, default_value = "summary.txt")]
    summary: String,

    /// LinkedIn profile file name.
    #[arg(long, default_value = "linkedin.txt")]
    linkedin: String,

    /// Communication style notes file name.
    #[arg(long, default_value = "style.txt")]
    style: String,

    /// Render at this instant ("YYYY-MM-DD HH:MM:SS") instead of now.
    #[arg(long, value_parser = parse_instant)]
    at: Option<FixedClock>,

    /// Log at debug level.
    #[arg(long)]
    verbose: bool,
}

fn parse_instant(s: &str) -> Result<FixedClock, String> {
    FixedClock::parse(s).map_err(|e| format!("expected \"YYYY-MM-DD HH:MM:SS\": {e}"))
}

fn main() -> Result<(), String> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::registry()
        .with(level)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = TwinConfig::new(&cli.resources)
        .with_facts_file(cli.facts)
        .with_summary_file(cli.summary)
        .with_linkedin_file(cli.linkedin)
        .with_style_file(cli.style);

    let resources = config.resource_dir().load().map_err(|e| e.to_string())?;
    info!(dir = %config.resources_dir.display(), facts = resources.facts.len(), "resources loaded");

    let composer = PromptComposer::new(resources);
    let prompt = match cli.at {
        Some(clock) => composer.with_clock(clock).compose(),
        None => composer.compose(),
    }
    .map_err(|e| e.to_string())?;

    println!("{prompt}");
    Ok(())
}
