use clap::Parser;
use gradbar::{Config, GradientServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    let server = GradientServer::new(config)?;
    server.start().await
}
