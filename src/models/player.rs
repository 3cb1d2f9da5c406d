use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Cross-round aggregate for a single player. Created lazily the first time a
/// name shows up in a statistic-bearing line, never removed afterwards. All
/// counters only ever increase while the log is walked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub kills: u32,
    pub assists: u32,
    pub headshots: u32,
    pub objects_destroyed: u32,
    pub money_spent: u32,
    /// Equipment carried when leaving the buy zone, keyed by round number.
    /// Last write wins if a player re-enters and leaves again.
    pub left_buy_zone_with: HashMap<u32, String>,
}

impl Player {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kills: 0,
            assists: 0,
            headshots: 0,
            objects_destroyed: 0,
            money_spent: 0,
            left_buy_zone_with: HashMap::new(),
        }
    }
}
