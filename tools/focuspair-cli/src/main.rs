//! FocusPair CLI — compare the focus quality of two camera feeds.
//!
//! Usage:
//!   focuspair score <IMAGE0> <IMAGE1>        Score two stills against each other
//!   focuspair compose <IMAGE0> <IMAGE1>      Write a composite diagnostic view
//!   focuspair run <FEED0> <FEED1> [OPTIONS]  Paced tick loop over frame sources
//!   focuspair check                          Show resolved configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "focuspair",
    about = "Dual-feed focus comparison diagnostics",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score two stills against each other and print the result
    Score {
        image0: PathBuf,
        image1: PathBuf,

        /// Emit a machine-readable JSON report instead of text
        #[arg(long)]
        json: bool,
    },

    /// Compose a diagnostic view from two stills and write it to disk
    Compose {
        image0: PathBuf,
        image1: PathBuf,

        /// Output image path
        #[arg(short, long, default_value = "composite.png")]
        output: PathBuf,

        /// Layout: quad | side-by-side
        #[arg(long, default_value = "quad")]
        layout: String,
    },

    /// Run a paced tick loop over two frame sources, writing composites
    Run {
        /// First feed: a still image or a directory of frames
        feed0: PathBuf,

        /// Second feed: a still image or a directory of frames
        feed1: PathBuf,

        /// Output directory for composite frames
        #[arg(short, long, default_value = "composites")]
        output: PathBuf,

        /// Tick rate
        #[arg(long, default_value = "30")]
        fps: u32,

        /// Stop after this many ticks (0 = run until a source is exhausted)
        #[arg(long, default_value = "0")]
        ticks: u64,

        /// Layout: quad | side-by-side
        #[arg(long, default_value = "quad")]
        layout: String,

        /// Render the history chart pane
        #[arg(long)]
        graph: bool,
    },

    /// Show resolved configuration and capture launch strings
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    focuspair_common::logging::init_logging(&focuspair_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
        file: None,
    });

    match cli.command {
        Commands::Score {
            image0,
            image1,
            json,
        } => commands::score::run(image0, image1, json),
        Commands::Compose {
            image0,
            image1,
            output,
            layout,
        } => commands::compose::run(image0, image1, output, &layout),
        Commands::Run {
            feed0,
            feed1,
            output,
            fps,
            ticks,
            layout,
            graph,
        } => commands::run::run(feed0, feed1, output, fps, ticks, &layout, graph).await,
        Commands::Check => commands::check::run(),
    }
}
