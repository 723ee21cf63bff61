//! Command line and environment configuration.

use clap::Parser;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "aizu-server")]
#[command(about = "Room/session coordinator over WebSocket", long_about = None)]
pub struct ServerArgs {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "AIZU_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "AIZU_PORT", default_value = "8080")]
    pub port: u16,

    /// Default log level (overridden by RUST_LOG)
    #[arg(long, env = "AIZU_LOG_LEVEL", default_value = "debug")]
    pub log_level: String,
}
