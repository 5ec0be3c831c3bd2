//! CLI chat client for the Hiroba relay.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hiroba-client -- --name alice
//! ```

use clap::Parser;
use tokio::sync::{mpsc, watch};

use hiroba_client::{SessionConfig, capture_identity, input, run_session};
use hiroba_shared::logger::setup_logger;

/// Hiroba CLI chat client
#[derive(Parser, Debug)]
#[command(name = "hiroba-client", version, about)]
struct Args {
    /// WebSocket URL of the relay
    #[arg(short, long, default_value = "ws://127.0.0.1:8090")]
    server: String,

    /// Display name (prompted interactively when omitted)
    #[arg(short, long)]
    name: Option<String>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    // Identity is captured exactly once; without it we never connect
    let identity = match capture_identity(args.name) {
        Ok(name) => name,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    println!("Chatting as '{}'. Press Ctrl-C or Ctrl-D to leave.", identity);

    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let input_handle = input::spawn_input_loop(input_tx);

    // Held for the whole session so the reconnect loop stays cancellable
    let (_shutdown_tx, shutdown_rx) = watch::channel(false);

    let config = SessionConfig {
        server_url: args.server,
        identity,
    };
    run_session(config, input_rx, shutdown_rx).await;

    let _ = input_handle.join();
    println!("Bye!");
}
