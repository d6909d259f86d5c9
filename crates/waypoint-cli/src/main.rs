//! Waypoint CLI Application
//!
//! Command-line interface for rendering shipment timelines.

mod args;
mod cli;
mod renderer;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;

fn main() -> Result<()> {
    env_logger::init();

    let Args { no_color, command } = Args::parse();

    let cli = Cli::new(TerminalRenderer::new(!no_color));

    info!("Waypoint started");

    match command {
        Commands::Show { file } => cli.show(&file),
        Commands::Step { file, index } => cli.show_step(&file, index),
        Commands::Export { file } => cli.export(&file),
    }
}
