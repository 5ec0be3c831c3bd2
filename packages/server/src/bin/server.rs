//! WebSocket chat relay with broadcast functionality.
//!
//! Receives frames from clients and broadcasts them to all other
//! connected clients.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hiroba-server
//! ```

use clap::Parser;

use hiroba_server::ServerConfig;
use hiroba_shared::logger::setup_logger;

/// Hiroba chat relay server
#[derive(Parser, Debug)]
#[command(name = "hiroba-server", version, about)]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8090)]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();
    let config = ServerConfig {
        host: args.host,
        port: args.port,
    };

    // Run the relay
    if let Err(e) = hiroba_server::run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
