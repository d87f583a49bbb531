use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use trip_cli::commands::{edit, rebuild, recalc};
use trip_cli::{Cli, Commands, Config, Document};

/// Load config and the input document, applying global output flags.
fn load(cli: &Cli) -> Result<(Document, Config)> {
    let mut config =
        Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    if cli.compact {
        config.pretty = false;
    }
    tracing::debug!(?config, "loaded configuration");

    let document = Document::read(cli.input.as_deref())?;
    tracing::debug!(days = document.itinerary().days.len(), "loaded itinerary");
    Ok((document, config))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support; stdout is reserved for the document
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let Some(command) = &cli.command else {
        // No subcommand, show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let (document, config) = load(&cli)?;
    let mut stdout = std::io::stdout().lock();

    match command {
        Commands::Recalc(args) => recalc::run(&mut stdout, &document, args, &config)?,
        Commands::Rebuild(args) => rebuild::run(&mut stdout, &document, args, &config)?,
        Commands::Drag(args) => edit::drag(&mut stdout, &document, args, &config)?,
        Commands::SetDuration(args) => edit::set_duration(&mut stdout, &document, args, &config)?,
        Commands::Add(args) => edit::add(&mut stdout, &document, args, &config)?,
        Commands::Remove(args) => edit::remove(&mut stdout, &document, args, &config)?,
    }

    Ok(())
}
