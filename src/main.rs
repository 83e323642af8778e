//! IFS Studio CLI - Fractal Workbench
//!
//! Command-line front end for the IFS Studio fractal generator.

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;

use ifs_studio::cli::commands::Workbench;
use ifs_studio::cli::Cli;
use ifs_studio::session::Session;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    info!("IFS Studio v{}", env!("CARGO_PKG_VERSION"));

    let config = cli
        .session_config()
        .context("could not build session configuration")?;
    let preview = (!cli.no_preview).then_some((cli.width, cli.height));
    let mut workbench = Workbench::new(Session::new(config), io::stdout().lock(), preview);

    match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("could not open script {}", path.display()))?;
            workbench.run(BufReader::new(file))?;
        }
        None => {
            println!(
                "IFS Studio v{} - type 'help' for commands",
                env!("CARGO_PKG_VERSION")
            );
            workbench.run(io::stdin().lock())?;
        }
    }

    Ok(())
}
