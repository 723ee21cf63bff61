//! Data Transfer Objects (DTOs) for the room coordinator.
//!
//! DTOs are organized by protocol:
//! - `websocket`: WebSocket event envelopes (inbound and outbound)
//! - `http`: HTTP API response DTOs
//! - `conversion`: Domain Model → DTO conversions

pub mod conversion;
pub mod http;
pub mod websocket;
