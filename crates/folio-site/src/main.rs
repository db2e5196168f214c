//! Main entry point for the `folio` command.

use anyhow::{Context, Result};
use clap::Parser;
use folio_common::init_logging;
use folio_config::ConfigLoader;
use folio_site::{Args, Site};
use tracing::{debug, error};

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
    if let Some(dir) = &args.locales_dir {
        config.i18n.locales_dir = dir.clone();
    }

    init_logging(config.logging.to_logging_config())?;
    debug!("Configuration loaded: {:?}", config);

    let site = Site::from_config(config).context("failed to load translations")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = site.run(&args.command, &mut out) {
        error!("{}", e);
        return Err(e.into());
    }

    Ok(())
}
