use clap::Parser;
use es256k_gateway::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run().await,
        Command::Keygen => cli::keygen::run(),
        Command::Issue(args) => cli::issue::run(args),
    }
}
