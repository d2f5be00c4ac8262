use serde::{Deserialize, Serialize};

/// Opaque ID types for type safety
pub type ConnectionId = String;
pub type RoomCode = String;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Freeplay,
    Teams,
}

/// The two fixed team slots. Serialized as "A" / "B" on the wire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TeamSlot {
    A,
    B,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: ConnectionId,
    pub name: String,
    pub score: i64,
    pub team: Option<TeamSlot>,
}

impl Player {
    pub fn new(id: ConnectionId, name: String) -> Self {
        Self {
            id,
            name,
            score: 0,
            team: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub name: Option<String>,
    /// Running total of point awards to members. Unlike player scores this is
    /// not clamped at zero.
    pub score: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Teams {
    pub a: Team,
    pub b: Team,
}

impl Teams {
    pub fn slot_mut(&mut self, slot: TeamSlot) -> &mut Team {
        match slot {
            TeamSlot::A => &mut self.a,
            TeamSlot::B => &mut self.b,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub code: RoomCode,
    pub host: ConnectionId,
    pub mode: GameMode,
    /// Join order preserved; rooms are small enough that lookups scan.
    pub players: Vec<Player>,
    pub buzz_winner: Option<ConnectionId>,
    pub buzz_locked: bool,
    /// Everyone who buzzed since the last reset, in arrival order.
    pub buzz_queue: Vec<ConnectionId>,
    pub teams: Teams,
}

impl Room {
    pub fn new(code: RoomCode, host: ConnectionId) -> Self {
        Self {
            code,
            host,
            mode: GameMode::Freeplay,
            players: Vec::new(),
            buzz_winner: None,
            buzz_locked: false,
            buzz_queue: Vec::new(),
            teams: Teams::default(),
        }
    }

    pub fn is_host(&self, conn_id: &ConnectionId) -> bool {
        self.host == *conn_id
    }

    pub fn is_member(&self, conn_id: &ConnectionId) -> bool {
        self.players.iter().any(|p| p.id == *conn_id)
    }

    pub fn player_mut(&mut self, conn_id: &ConnectionId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == *conn_id)
    }
}
