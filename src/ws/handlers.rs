//! WebSocket message dispatch
//!
//! One arm per client-initiated action. Each state entry point validates
//! authority and preconditions itself and returns a discriminated
//! `ActionError` on rejection; this boundary decides what the caller gets to
//! see. Validation and lookup failures are surfaced as `error_message`,
//! authority failures are dropped without a reply.

use crate::protocol::{ClientMessage, ServerMessage};
use crate::state::AppState;
use crate::types::ConnectionId;
use std::sync::Arc;

/// Handle a client message and return an optional direct reply. Broadcasts
/// to the room happen inside the state mutations themselves.
pub async fn handle_message(
    msg: ClientMessage,
    conn_id: &ConnectionId,
    state: &Arc<AppState>,
) -> Option<ServerMessage> {
    let result = match msg {
        ClientMessage::CreateRoom { room_code } => state
            .create_room(conn_id, room_code.as_deref())
            .await
            .map(|_| ()),

        ClientMessage::JoinRoom {
            room_code,
            player_name,
        } => state
            .join_room(conn_id, &room_code, player_name)
            .await
            .map(|_| ()),

        ClientMessage::Buzz { room_code } => state.buzz(conn_id, &room_code).await,

        ClientMessage::ResetBuzz { room_code } => state.reset_buzz(conn_id, &room_code).await,

        ClientMessage::LockBuzzers { room_code } => {
            state.set_buzz_locked(conn_id, &room_code, true).await
        }

        ClientMessage::UnlockBuzzers { room_code } => {
            state.set_buzz_locked(conn_id, &room_code, false).await
        }

        ClientMessage::SetTeams {
            room_code,
            team_a,
            team_b,
        } => state.set_teams(conn_id, &room_code, team_a, team_b).await,

        ClientMessage::AssignTeam {
            room_code,
            player_id,
            team,
        } => {
            state
                .assign_team(conn_id, &room_code, &player_id, team)
                .await
        }

        ClientMessage::AwardPoints {
            room_code,
            player_id,
            points,
        } => {
            state
                .award_points(conn_id, &room_code, &player_id, points)
                .await
        }

        ClientMessage::StartGame { room_code } => state.start_game(conn_id, &room_code).await,

        ClientMessage::StartNextRound { room_code } => {
            state.start_next_round(conn_id, &room_code).await
        }
    };

    match result {
        Ok(()) => None,
        Err(e) if e.is_surfaced() => Some(ServerMessage::ErrorMessage {
            text: e.to_string(),
        }),
        Err(e) => {
            tracing::debug!(conn = %conn_id, error = %e, "dropping rejected action");
            None
        }
    }
}
