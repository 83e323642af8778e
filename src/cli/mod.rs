//! CLI Module
//!
//! Command-line interface: a line-oriented workbench that feeds typed
//! commands to a [`Session`](crate::session::Session) and previews each
//! frame in the terminal.

pub mod commands;

use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::session::SessionConfig;

/// IFS Studio - interactive iterated-function-system fractal workbench
#[derive(Parser, Debug)]
#[command(name = "ifs-studio")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Read commands from a file instead of stdin
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Fixed RNG seed for reproducible colors and sprays
    #[arg(long)]
    pub seed: Option<u64>,

    /// Initial fractalization level
    #[arg(long)]
    pub level: Option<u32>,

    /// Points per spray
    #[arg(long)]
    pub points: Option<usize>,

    /// Preview width in characters
    #[arg(long, default_value_t = 64)]
    pub width: usize,

    /// Preview height in characters
    #[arg(long, default_value_t = 32)]
    pub height: usize,

    /// Do not draw a preview after each command
    #[arg(long)]
    pub no_preview: bool,
}

impl Cli {
    /// Config file (or defaults) with command-line overrides applied
    pub fn session_config(&self) -> Result<SessionConfig> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::load(path)?,
            None => SessionConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.rng_seed = Some(seed);
        }
        if let Some(level) = self.level {
            config.initial_level = level;
        }
        if let Some(points) = self.points {
            config.spray_points = points;
        }
        config.validate()?;
        Ok(config)
    }
}
