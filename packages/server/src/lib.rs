//! Room/session coordinator server.
//!
//! Participants create or join rooms over WebSocket, exchange gesture events
//! scoped to their room, and resume their role after reconnecting with the
//! same session ID.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub mod config;
