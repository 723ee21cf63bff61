//! In-memory repositories. State is volatile and lost on restart.

pub mod room;

pub use room::InMemoryRoomRepository;
