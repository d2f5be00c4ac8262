use super::{ActionError, AppState};
use crate::protocol::{RoomSnapshot, ServerMessage};
use crate::types::*;
use rand::Rng;

/// Safe character set for room codes (excludes 0/O, 1/I/L to avoid confusion)
const CODE_CHARS: &[u8] = b"ABCDEFGHJKMNPQRSTUVWXYZ23456789";
const CODE_LENGTH: usize = 5;

/// Codes are compared case-insensitively and ignore surrounding whitespace,
/// so "abc12" and " ABC12 " address the same room.
pub fn normalize_code(raw: &str) -> RoomCode {
    raw.trim().to_ascii_uppercase()
}

fn generate_code() -> RoomCode {
    let mut rng = rand::rng();
    (0..CODE_LENGTH)
        .map(|_| CODE_CHARS[rng.random_range(0..CODE_CHARS.len())] as char)
        .collect()
}

impl AppState {
    /// Create a room, or re-claim an existing one. Re-claiming moves host
    /// authority to the caller; a host disconnect later still destroys the
    /// room for everyone (there is no host migration on the way out).
    pub async fn create_room(
        &self,
        conn_id: &ConnectionId,
        requested_code: Option<&str>,
    ) -> Result<RoomCode, ActionError> {
        let mut rooms = self.rooms.write().await;

        let code = match requested_code {
            Some(raw) => {
                let code = normalize_code(raw);
                if code.is_empty() {
                    return Err(ActionError::EmptyRoomCode);
                }
                code
            }
            // No code supplied: generate one, retrying on collision
            None => loop {
                let code = generate_code();
                if !rooms.contains_key(&code) {
                    break code;
                }
            },
        };

        let room = rooms
            .entry(code.clone())
            .and_modify(|room| {
                tracing::info!(code = %room.code, new_host = %conn_id, "room re-claimed, host reassigned");
                room.host = conn_id.clone();
            })
            .or_insert_with(|| {
                tracing::info!(code = %code, host = %conn_id, "room created");
                Room::new(code.clone(), conn_id.clone())
            });

        self.attach(conn_id, &code).await;
        self.send_to(
            conn_id,
            ServerMessage::RoomUpdate {
                room: RoomSnapshot::from(&*room),
            },
        )
        .await;

        Ok(code)
    }

    /// Join a room as a player. Re-joining with the same connection updates
    /// the display name instead of duplicating the player.
    pub async fn join_room(
        &self,
        conn_id: &ConnectionId,
        raw_code: &str,
        player_name: Option<String>,
    ) -> Result<RoomCode, ActionError> {
        let code = normalize_code(raw_code);
        let mut rooms = self.rooms.write().await;
        let room = rooms.get_mut(&code).ok_or(ActionError::RoomNotFound)?;

        let name = player_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "Player".to_string());

        match room.player_mut(conn_id) {
            Some(player) => player.name = name,
            None => {
                tracing::info!(code = %code, player = %conn_id, name = %name, "player joined");
                room.players.push(Player::new(conn_id.clone(), name));
            }
        }

        self.attach(conn_id, &code).await;
        self.broadcast_room_update(room).await;

        Ok(code)
    }
}
