//! HDS CLI - Command line tool for reservoir drought monitoring.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "hds-cli",
    version,
    about = "Hidrossistema drought monitoring toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: hds_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("starting hds-cli");
    hds_cmd::run(cli.command).await
}
