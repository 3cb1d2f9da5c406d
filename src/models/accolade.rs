use serde::{Deserialize, Serialize};

/// End-of-match award record, either parsed from an ACCOLADE line or
/// synthesized from the final player aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accolade {
    pub name: String,
    pub player: String,
    pub value: u32,
    pub pos: u32,
    pub score: u32,
}

impl Accolade {
    pub fn new(name: &str, player: &str, value: u32, pos: u32, score: u32) -> Self {
        Self {
            name: name.to_string(),
            player: player.to_string(),
            value,
            pos,
            score,
        }
    }
}
