//! Room/session coordinator server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin aizu-server
//! cargo run --bin aizu-server -- --host 0.0.0.0 --port 3000
//! ```

use std::{collections::HashMap, sync::Arc};

use aizu_server::{
    config::ServerArgs,
    infrastructure::{message_pusher::WebSocketMessagePusher, repository::InMemoryRoomRepository},
    ui::{AppState, Server},
};
use aizu_shared::logger::setup_logger;
use clap::Parser;
use tokio::sync::Mutex;

#[tokio::main]
async fn main() {
    let args = ServerArgs::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    // Initialize dependencies in order:
    // 1. Repository
    // 2. MessagePusher
    // 3. AppState (UseCases)
    // 4. Server

    // 1. Create Repository (in-memory coordinator)
    let repository = Arc::new(InMemoryRoomRepository::new());

    // 2. Create MessagePusher (WebSocket implementation)
    let message_pusher_clients = Arc::new(Mutex::new(HashMap::new()));
    let message_pusher = Arc::new(WebSocketMessagePusher::new(message_pusher_clients));

    // 3. Create UseCases
    let app_state = AppState::new(repository, message_pusher);

    // Room state never survives a restart
    let cleared = app_state.reset_rooms_usecase.execute().await;
    tracing::info!("Cleared {} rooms on server startup", cleared);

    // 4. Create and run the server
    let server = Server::new(app_state);
    if let Err(e) = server.run(&args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
