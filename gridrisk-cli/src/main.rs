//! Grid risk CLI - run a consumer dataset through the analysis service, or
//! inspect a saved response, and print the dashboard report as text.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "gridrisk-cli",
    version,
    about = "Electricity theft and grid risk analysis toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: gridrisk_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    gridrisk_cmd::run(cli.command).await
}
