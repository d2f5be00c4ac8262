use super::{normalize_code, ActionError, AppState};
use crate::protocol::ServerMessage;
use crate::types::*;

impl AppState {
    /// Host-only: begin play. Dismisses any score popup, clears the buzz
    /// state and unlocks the buzzers.
    pub async fn start_game(
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
        room.buzz_locked = false;

        self.broadcast_to_room(&room.code, &ServerMessage::CloseScorePopup)
            .await;
        self.broadcast_to_room(
            &room.code,
            &ServerMessage::QueueUpdate { queue: Vec::new() },
        )
        .await;
        self.broadcast_room_update(room).await;

        Ok(())
    }

    /// Host-only: round boundary. Shows the score popup with the current
    /// team totals, then reopens the buzzer for the next round.
    pub async fn start_next_round(
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
            &ServerMessage::ShowScorePopup {
                teams: room.teams.clone(),
            },
        )
        .await;
        self.broadcast_to_room(
            &room.code,
            &ServerMessage::QueueUpdate { queue: Vec::new() },
        )
        .await;
        self.broadcast_room_update(room).await;

        Ok(())
    }
}
