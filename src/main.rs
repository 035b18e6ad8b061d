//! tunewave server binary

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tunewave::{run_server, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "tunewave", version, about = "Music library HTTP API")]
struct Args {
    /// Address to bind to (default: 127.0.0.1:3030)
    #[arg(long, short = 'b', default_value = "127.0.0.1:3030")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up DATABASE_URL from a .env file in development
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();

    let args = Args::parse();
    let config = ServerConfig {
        bind_addr: args.bind,
    };

    run_server(config).await.context("Server error")?;

    Ok(())
}
