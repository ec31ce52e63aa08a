//! SXL CLI - evaluate the launch records dashboard from the command line.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "sxl-cli",
    version,
    about = "SpaceX launch records dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: sxl_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("sxl-cli starting");
    sxl_cmd::run(cli.command)
}
