mod browse;
mod games;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "stackplay")]
#[command(version = "0.1.0")]
enum Cli {
    Browse(browse::RunBrowse),
    Games(games::RunGames),
}

impl Cli {
    async fn run(&self) {
        match self {
            Self::Browse(cmd) => cmd.run().await,
            Self::Games(cmd) => cmd.run().await,
        }
    }
}

pub async fn cli_main() {
    Cli::parse().run().await;
}
