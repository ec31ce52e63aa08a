//! Command implementations for the launch records CLI.
//!
//! Every command loads the launch dataset from `--csv`, evaluates part of the
//! dashboard natively and prints the result as JSON on stdout.

use clap::Subcommand;
use std::io::Write;
use std::path::PathBuf;
use sxl_data::{ALL_SITES, DEFAULT_DATASET_FILE};

pub mod render;

#[derive(Subcommand)]
pub enum Command {
    /// Print record count, payload bounds and launch site options
    Summary {
        /// Path to the launch records CSV
        #[arg(short = 'c', long, default_value = DEFAULT_DATASET_FILE)]
        csv: PathBuf,
    },

    /// Print the dashboard layout
    Layout {
        /// Path to the launch records CSV
        #[arg(short = 'c', long, default_value = DEFAULT_DATASET_FILE)]
        csv: PathBuf,
    },

    /// Evaluate the launch outcome pie chart for a site
    Pie {
        /// Path to the launch records CSV
        #[arg(short = 'c', long, default_value = DEFAULT_DATASET_FILE)]
        csv: PathBuf,

        /// Launch site, or "All sites"
        #[arg(short = 's', long, default_value = ALL_SITES)]
        site: String,
    },

    /// Evaluate the payload vs. outcome scatter chart
    Scatter {
        /// Path to the launch records CSV
        #[arg(short = 'c', long, default_value = DEFAULT_DATASET_FILE)]
        csv: PathBuf,

        /// Launch site, or "All sites"
        #[arg(short = 's', long, default_value = ALL_SITES)]
        site: String,

        /// Lower payload bound in kg (defaults to the dataset minimum)
        #[arg(long)]
        low: Option<f64>,

        /// Upper payload bound in kg (defaults to the dataset maximum)
        #[arg(long)]
        high: Option<f64>,
    },

    /// Render every chart output with the default control values
    Render {
        /// Path to the launch records CSV
        #[arg(short = 'c', long, default_value = DEFAULT_DATASET_FILE)]
        csv: PathBuf,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match command {
        Command::Summary { csv } => render::run_summary(&csv, &mut out),
        Command::Layout { csv } => render::run_layout(&csv, &mut out),
        Command::Pie { csv, site } => render::run_pie(&csv, &site, &mut out),
        Command::Scatter {
            csv,
            site,
            low,
            high,
        } => render::run_scatter(&csv, &site, low, high, &mut out),
        Command::Render { csv } => render::run_render(&csv, &mut out),
    }?;
    out.flush()?;
    Ok(())
}
