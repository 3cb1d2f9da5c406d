use serde::{Deserialize, Serialize};

/// Winning side of a round, derived from the SFUI notice lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    #[serde(rename = "Terrorists")]
    Terrorists,
    #[serde(rename = "Counter Terrorists")]
    CounterTerrorists,
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::Terrorists => write!(f, "Terrorists"),
            Winner::CounterTerrorists => write!(f, "Counter Terrorists"),
        }
    }
}

/// One completed round. Immutable once emitted by the accumulator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    /// Round length in seconds. Zero when no usable start anchor was seen.
    pub length: u64,
    pub ct_team: String,
    pub terrorist_team: String,
    /// The announcer's score string, stored verbatim (e.g. `NAVI [1 - 0] VP`).
    pub score: String,
    /// None when no win-condition notice preceded the score announcement.
    pub winner: Option<Winner>,
    /// Human-readable kill descriptions in chronological order.
    pub kill_feed: Vec<String>,
}
