use anyhow::Context;
use clap::Parser;
use targetscope::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let settings = cli.effective_settings().context("failed to load settings")?;
    tracing::debug!(?settings, "effective settings");

    match &cli.command {
        Commands::Classify(cmd) => cmd.execute(settings, cli.quiet)?,
        Commands::Settings(cmd) => cmd.execute(settings, cli.config.as_deref(), cli.quiet)?,
    }

    Ok(())
}

/// Log to stderr so stdout stays parseable. `RUST_LOG` overrides the flags.
fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
