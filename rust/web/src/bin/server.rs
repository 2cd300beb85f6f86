//! Standalone web server binary
//!
//! Usage: cargo run -p handeval_web --bin handeval-web-server -- --port 8080

use clap::Parser;
use handeval_web::{ServerConfig, WebServer, DEFAULT_HOST, DEFAULT_PORT};

#[derive(Debug, Parser)]
#[command(
    name = "handeval-web-server",
    version,
    about = "Poker hand evaluation over HTTP"
)]
struct Args {
    /// Host to bind to
    #[arg(long, env = "HANDEVAL_HOST", default_value = DEFAULT_HOST)]
    host: String,
    /// Port to bind to
    #[arg(short, long, env = "HANDEVAL_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    handeval_web::init_logging()?;
    let args = Args::parse();

    let config = ServerConfig::new(args.host, args.port);
    tracing::info!(
        host = config.host(),
        port = config.port(),
        "starting handeval web server"
    );

    let handle = WebServer::new(config).start().await?;
    println!("Server running at http://{}", handle.address());
    println!("Press Ctrl+C to stop");

    tokio::signal::ctrl_c().await?;

    tracing::info!("shutting down server");
    handle.shutdown().await?;
    tracing::info!("server stopped cleanly");

    Ok(())
}
