mod buzz;
mod connection;
mod room;
mod round;
mod score;

pub use connection::Connection;
pub use room::normalize_code;

use crate::types::*;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Why a client action was not applied. The websocket boundary decides which
/// of these are surfaced to the caller and which are dropped silently.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("Missing room code")]
    EmptyRoomCode,
    #[error("Room not found")]
    RoomNotFound,
    #[error("Only the host can do that")]
    NotHost,
    #[error("You are not in this room")]
    NotMember,
    #[error("Buzzers are locked")]
    BuzzersLocked,
}

impl ActionError {
    /// Validation and lookup failures go back to the caller as an
    /// `error_message`. Authority failures are dropped without a reply so a
    /// probing client learns nothing about the room.
    pub fn is_surfaced(&self) -> bool {
        matches!(self, Self::EmptyRoomCode | Self::RoomNotFound)
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Authoritative room table. Mutations take the write lock, so each one
    /// is fully applied and broadcast before the next begins.
    pub rooms: Arc<RwLock<HashMap<RoomCode, Room>>>,
    /// Registry of live connections and the room each is attached to.
    pub connections: Arc<RwLock<HashMap<ConnectionId, Connection>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            rooms: Arc::new(RwLock::new(HashMap::new())),
            connections: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get a copy of a room by (already normalized) code
    pub async fn get_room(&self, code: &str) -> Option<Room> {
        self.rooms.read().await.get(code).cloned()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
