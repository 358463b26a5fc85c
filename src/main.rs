use anyhow::Context;
use clap::Parser;

use mobifacil::cli::Cli;
use mobifacil::config::{Config, ConfigStore};
use mobifacil::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let path = cli.config_path();
    let mut config = Config::load_from(&path)?;
    cli.apply(&mut config);

    init_tracing(&config.log)?;
    tracing::info!(config = %path.display(), "starting mobifacil");

    let overrides = cli.clone();
    let store = ConfigStore::new(config, path).with_overrides(move |config| overrides.apply(config));

    mobifacil::ui::run(store).context("terminal UI failed")?;
    tracing::info!("bye");
    Ok(())
}
