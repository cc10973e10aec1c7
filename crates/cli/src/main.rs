//! crewforge - agent configuration generator.
//!
//! CLI entry point. Results go to stdout, logs and warnings to stderr.

#![forbid(unsafe_code)]

use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("crewforge=debug,cf_core=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("crewforge=info,cf_core=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let _ = dotenvy::dotenv();

    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);

    cli::run(cli).await
}
