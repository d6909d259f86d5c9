use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Main command-line interface for the Waypoint timeline viewer
///
/// Waypoint renders shipment timelines in the terminal: each step shows
/// a status caption, a type title, and the deduplicated description
/// lines resolved from the step and its folded sub-steps. Timelines are
/// read from JSON documents produced by upstream fetch services.
#[derive(Parser)]
#[command(version, about, name = "wp")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Waypoint CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Render a full timeline
    #[command(alias = "s")]
    Show {
        /// Path to the timeline JSON file
        file: PathBuf,
    },
    /// Render a single step of a timeline
    Step {
        /// Path to the timeline JSON file
        file: PathBuf,
        /// 1-based display index of the step
        index: usize,
    },
    /// Export resolved view-models as JSON
    Export {
        /// Path to the timeline JSON file
        file: PathBuf,
    },
}
