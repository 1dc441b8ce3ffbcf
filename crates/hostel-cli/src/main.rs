use clap::Parser;
use hostel_cli_lib::config::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    hostel_cli_lib::run(cli).await
}
