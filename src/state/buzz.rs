use super::{normalize_code, ActionError, AppState};
use crate::protocol::ServerMessage;
use crate::types::*;

impl AppState {
    /// Race for the buzzer. The first accepted buzz per round wins; receipt
    /// order at the server is the arbiter, client timestamps play no part.
    /// Once a winner is set, further buzzes are no-ops and nothing is
    /// broadcast, so exactly one room update reflects the none-to-winner
    /// transition.
    pub async fn buzz(&self, conn_id: &ConnectionId, raw_code: &str) -> Result<(), ActionError> {
        let code = normalize_code(raw_code);
        let mut rooms = self.rooms.write().await;
        let room = rooms.get_mut(&code).ok_or(ActionError::RoomNotFound)?;

        if !room.is_member(conn_id) {
            return Err(ActionError::NotMember);
        }
        if room.buzz_locked {
            return Err(ActionError::BuzzersLocked);
        }
        if room.buzz_winner.is_some() {
            // Round already won, late buzzes are absorbed
            return Ok(());
        }

        room.buzz_winner = Some(conn_id.clone());
        room.buzz_queue.push(conn_id.clone());
        tracing::debug!(code = %code, winner = %conn_id, "buzz accepted");

        self.broadcast_to_room(
            &room.code,
            &ServerMessage::QueueUpdate {
                queue: room.buzz_queue.clone(),
            },
        )
        .await;
        self.broadcast_room_update(room).await;

        Ok(())
    }

    /// Host-only: clear the winner and queue, reopening the round.
    pub async fn reset_buzz(
        &self,
        conn_id: &ConnectionId,
        raw_code: &str,
    ) -> Result<(), ActionError> {
        let code = normalize_code(raw_code);
        let mut rooms = self.rooms.write().await;
        let room = rooms.get_mut(&code).ok_or(ActionError::RoomNotFound)?;

        if !room.is_host(conn_id) {
            return Err(ActionError::NotHost);
        }

        room.buzz_winner = None;
        room.buzz_queue.clear();

        self.broadcast_to_room(
            &room.code,
            &ServerMessage::QueueUpdate { queue: Vec::new() },
        )
        .await;
        self.broadcast_room_update(room).await;

        Ok(())
    }

    /// Host-only: toggle the global buzz gate. Orthogonal to the winner
    /// state; while locked, buzzes are rejected outright.
    pub async fn set_buzz_locked(
        &self,
        conn_id: &ConnectionId,
        raw_code: &str,
        locked: bool,
    ) -> Result<(), ActionError> {
        let code = normalize_code(raw_code);
        let mut rooms = self.rooms.write().await;
        let room = rooms.get_mut(&code).ok_or(ActionError::RoomNotFound)?;

        if !room.is_host(conn_id) {
            return Err(ActionError::NotHost);
        }

        room.buzz_locked = locked;

        let signal = if locked {
            ServerMessage::LockAll
        } else {
            ServerMessage::UnlockAll
        };
        self.broadcast_to_room(&room.code, &signal).await;
        self.broadcast_room_update(room).await;

        Ok(())
    }
}
