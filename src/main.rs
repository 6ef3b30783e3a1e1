use tracing_subscriber::EnvFilter;

use stackplay::cli;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    cli::cli_main().await;
}
