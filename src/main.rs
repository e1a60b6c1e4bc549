use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use libris::api;

#[derive(Parser)]
#[command(name = "libris")]
#[command(about = "In-memory library catalog web application")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the catalog server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port for the HTTP server
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "libris=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Default invocation serves on localhost:3000
    let (host, port) = match cli.command {
        Some(Commands::Serve { host, port }) => (host, port),
        None => ("127.0.0.1".to_string(), 3000),
    };

    serve(&host, port).await
}

async fn serve(host: &str, port: u16) -> anyhow::Result<()> {
    tracing::info!("Starting Libris server on port {}", port);

    let state = Arc::new(api::AppState::new());
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Libris server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;

    Ok(())
}
