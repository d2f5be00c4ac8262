//! Fan-out of server messages to the connections attached to a room.
//!
//! Delivery is best-effort and fire-and-forget per recipient: each connection
//! has an unbounded channel drained by its own socket task, so a slow or gone
//! receiver never stalls the room that is broadcasting.

use crate::protocol::{RoomSnapshot, ServerMessage};
use crate::state::AppState;
use crate::types::*;

impl AppState {
    /// Send a message to a single connection, if it is still registered.
    pub async fn send_to(&self, conn_id: &ConnectionId, msg: ServerMessage) {
        if let Some(conn) = self.connections.read().await.get(conn_id) {
            let _ = conn.sender.send(msg);
        }
    }

    /// Send a message to every connection attached to a room.
    pub async fn broadcast_to_room(&self, code: &RoomCode, msg: &ServerMessage) {
        let connections = self.connections.read().await;
        for conn in connections
            .values()
            .filter(|c| c.room.as_deref() == Some(code.as_str()))
        {
            let _ = conn.sender.send(msg.clone());
        }
    }

    /// Snapshot a room and broadcast it. The snapshot is recomputed from the
    /// room table on every call since any field may have changed.
    pub async fn broadcast_room_update(&self, room: &Room) {
        self.broadcast_to_room(
            &room.code,
            &ServerMessage::RoomUpdate {
                room: RoomSnapshot::from(room),
            },
        )
        .await;
    }
}
