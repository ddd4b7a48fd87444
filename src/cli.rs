// pwa-icon-resize/src/cli.rs
use crate::core::{ResizeConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};
use clap::Parser;
use std::path::PathBuf;

/// Upscale the 192x192 PWA icon to 512x512 with Lanczos resampling.
#[derive(Parser, Debug)]
#[command(name = "pwa-icon-resize")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Source image
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Destination image; its extension selects the output format
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn to_config(&self) -> ResizeConfig {
        ResizeConfig::new(&self.input, &self.output)
    }
}
