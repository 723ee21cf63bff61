//! Utilities shared by the Aizu binaries and libraries.

pub mod logger;
pub mod time;
