use super::AppState;
use crate::protocol::ServerMessage;
use crate::types::*;
use tokio::sync::mpsc;

/// A live connection's entry in the registry: its outbound channel plus the
/// room it is currently attached to. The socket task owns the receiving end;
/// sends here never block.
#[derive(Debug)]
pub struct Connection {
    pub sender: mpsc::UnboundedSender<ServerMessage>,
    pub room: Option<RoomCode>,
}

impl AppState {
    /// Register a freshly accepted connection and mint its id. The id doubles
    /// as the player id in room state and protocol messages.
    pub async fn register_connection(
        &self,
        sender: mpsc::UnboundedSender<ServerMessage>,
    ) -> ConnectionId {
        let conn_id = ulid::Ulid::new().to_string();
        self.connections
            .write()
            .await
            .insert(conn_id.clone(), Connection { sender, room: None });
        conn_id
    }

    /// Point a connection's fan-out at a room. A connection views one room at
    /// a time; attaching again simply moves it.
    pub(crate) async fn attach(&self, conn_id: &ConnectionId, code: &RoomCode) {
        if let Some(conn) = self.connections.write().await.get_mut(conn_id) {
            conn.room = Some(code.clone());
        }
    }

    /// Reconcile a dropped connection: deregister it, remove its player
    /// record from every room, clear a buzz it held, and tear down any room
    /// it hosted. Remaining members of a hosted room get `room_closed`; there
    /// is no host migration.
    pub async fn handle_disconnect(&self, conn_id: &ConnectionId) {
        self.connections.write().await.remove(conn_id);

        let mut rooms = self.rooms.write().await;
        let mut closed: Vec<RoomCode> = Vec::new();

        for room in rooms.values_mut() {
            if room.is_member(conn_id) {
                room.players.retain(|p| p.id != *conn_id);
                room.buzz_queue.retain(|id| id != conn_id);
                if room.buzz_winner.as_ref() == Some(conn_id) {
                    // Reopen the round rather than leaving it stuck on a ghost
                    room.buzz_winner = None;
                }
                tracing::info!(code = %room.code, player = %conn_id, "player disconnected");
                self.broadcast_room_update(room).await;
            }

            if room.is_host(conn_id) {
                tracing::info!(code = %room.code, "host disconnected, closing room");
                self.broadcast_to_room(&room.code, &ServerMessage::RoomClosed)
                    .await;
                closed.push(room.code.clone());
            }
        }

        for code in closed {
            rooms.remove(&code);
            // Detach survivors so stale fan-out stops immediately
            let mut connections = self.connections.write().await;
            for conn in connections.values_mut() {
                if conn.room.as_ref() == Some(&code) {
                    conn.room = None;
                }
            }
        }
    }
}
