use crate::types::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Create (or re-claim) a room. With no code given, the server generates
    /// one. Re-claiming an existing code moves host authority to the caller.
    CreateRoom {
        #[serde(default)]
        room_code: Option<String>,
    },
    JoinRoom {
        room_code: String,
        #[serde(default)]
        player_name: Option<String>,
    },
    Buzz {
        room_code: String,
    },
    // Host-only messages
    ResetBuzz {
        room_code: String,
    },
    LockBuzzers {
        room_code: String,
    },
    UnlockBuzzers {
        room_code: String,
    },
    SetTeams {
        room_code: String,
        team_a: String,
        team_b: String,
    },
    AssignTeam {
        room_code: String,
        player_id: ConnectionId,
        #[serde(default)]
        team: Option<TeamSlot>,
    },
    AwardPoints {
        room_code: String,
        player_id: ConnectionId,
        points: i64,
    },
    StartGame {
        room_code: String,
    },
    StartNextRound {
        room_code: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Broadcast to the whole room after every accepted mutation.
    RoomUpdate {
        room: RoomSnapshot,
    },
    /// Buzz arrival order since the last reset.
    QueueUpdate {
        queue: Vec<ConnectionId>,
    },
    ShowScorePopup {
        teams: Teams,
    },
    CloseScorePopup,
    LockAll,
    UnlockAll,
    /// Sent only to the originating connection on a validation failure.
    ErrorMessage {
        text: String,
    },
    /// Broadcast once to remaining members when the host disconnects.
    RoomClosed,
}

/// Denormalized, read-only view of a room. Recomputed from the room table on
/// every broadcast, never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSnapshot {
    pub code: RoomCode,
    pub host: ConnectionId,
    pub mode: GameMode,
    pub players: Vec<Player>,
    pub buzz_winner: Option<ConnectionId>,
    pub buzz_locked: bool,
    pub buzz_queue: Vec<ConnectionId>,
    pub teams: Teams,
}

impl From<&Room> for RoomSnapshot {
    fn from(room: &Room) -> Self {
        Self {
            code: room.code.clone(),
            host: room.host.clone(),
            mode: room.mode,
            players: room.players.clone(),
            buzz_winner: room.buzz_winner.clone(),
            buzz_locked: room.buzz_locked,
            buzz_queue: room.buzz_queue.clone(),
            teams: room.teams.clone(),
        }
    }
}
