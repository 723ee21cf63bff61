//! UI layer: axum server, WebSocket/HTTP handlers and the event router.

mod handler;
pub mod router;
mod server;
mod signal;
pub mod state;

pub use router::EventRouter;
pub use server::Server;
pub use state::AppState;
