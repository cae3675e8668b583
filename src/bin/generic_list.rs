use anyhow::{Context, Result};
use generic_list::cli::Cli;
use generic_list::demo;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_directive()));
    let subscriber = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::Layer::default().with_writer(std::io::stderr))
        .with(filter);
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install the tracing subscriber")?;

    let scenario = cli.scenario();
    let lines = demo::run(&scenario)
        .with_context(|| format!("Walkthrough failed for {:?}", scenario))?;
    for line in lines {
        println!("{}", line);
    }

    Ok(())
}
