#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

use clap::Parser;

use jobdocs::cli::commands::{Cli, Command};
use jobdocs::cli::output;
use jobdocs::config::{Config, Mode, UserSettings};
use jobdocs::emitter;
use jobdocs::error::Result;

fn main() {
    let cli = Cli::parse();
    init_logging();

    if let Err(e) = run(cli) {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}

/// Progress goes to stderr so stdout only carries the JSON summary.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let settings = cli
        .config
        .as_deref()
        .map(UserSettings::load)
        .transpose()?;

    let (mode, overrides) = match cli.command {
        Command::Ingest {
            common,
            progress_every,
        } => {
            let mut overrides = common.to_overrides();
            overrides.progress_every = progress_every;
            (Mode::Composite, overrides)
        }
        Command::Split {
            common,
            column,
            progress_every,
        } => {
            let mut overrides = common.to_overrides();
            overrides.column = column;
            overrides.progress_every = progress_every;
            (Mode::Sequential, overrides)
        }
    };

    let config = Config::resolve(mode, settings.as_ref(), &overrides);
    let result = emitter::run_emit(&config)?;
    println!("{}", output::format_json(&result));
    Ok(())
}
