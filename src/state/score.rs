use super::{normalize_code, ActionError, AppState};
use crate::types::*;

impl AppState {
    /// Host-only: adjust a player's score by `points` (may be negative).
    /// Player scores never go below zero. The player's team aggregate, if
    /// any, takes the raw delta without clamping, so a team total can be
    /// negative while every member sits at zero.
    pub async fn award_points(
        &self,
        conn_id: &ConnectionId,
        raw_code: &str,
        player_id: &ConnectionId,
        points: i64,
    ) -> Result<(), ActionError> {
        let code = normalize_code(raw_code);
        let mut rooms = self.rooms.write().await;
        let room = rooms.get_mut(&code).ok_or(ActionError::RoomNotFound)?;

        if !room.is_host(conn_id) {
            return Err(ActionError::NotHost);
        }

        // Awards to departed players are no-ops, not errors
        let Some(player) = room.player_mut(player_id) else {
            return Ok(());
        };

        player.score = (player.score + points).max(0);
        let team = player.team;

        if let Some(slot) = team {
            room.teams.slot_mut(slot).score += points;
        }

        self.broadcast_room_update(room).await;
        Ok(())
    }

    /// Host-only: name both teams and switch the room to team mode.
    /// Re-calling overwrites the names.
    pub async fn set_teams(
        &self,
        conn_id: &ConnectionId,
        raw_code: &str,
        team_a: String,
        team_b: String,
    ) -> Result<(), ActionError> {
        let code = normalize_code(raw_code);
        let mut rooms = self.rooms.write().await;
        let room = rooms.get_mut(&code).ok_or(ActionError::RoomNotFound)?;

        if !room.is_host(conn_id) {
            return Err(ActionError::NotHost);
        }

        room.teams.a.name = Some(team_a);
        room.teams.b.name = Some(team_b);
        room.mode = GameMode::Teams;

        self.broadcast_room_update(room).await;
        Ok(())
    }

    /// Host-only: set or clear one player's team membership.
    pub async fn assign_team(
        &self,
        conn_id: &ConnectionId,
        raw_code: &str,
        player_id: &ConnectionId,
        team: Option<TeamSlot>,
    ) -> Result<(), ActionError> {
        let code = normalize_code(raw_code);
        let mut rooms = self.rooms.write().await;
        let room = rooms.get_mut(&code).ok_or(ActionError::RoomNotFound)?;

        if !room.is_host(conn_id) {
            return Err(ActionError::NotHost);
        }

        let Some(player) = room.player_mut(player_id) else {
            return Ok(());
        };
        player.team = team;

        self.broadcast_room_update(room).await;
        Ok(())
    }
}
