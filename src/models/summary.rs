use serde::{Deserialize, Serialize};

use crate::models::{Accolade, Player, Round, Weapon};

/// The complete output model of one parse run. Players and weapons keep
/// first-observation order; rounds keep log order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    pub rounds: Vec<Round>,
    pub players: Vec<Player>,
    pub weapons: Vec<Weapon>,
    pub spectators: Vec<String>,
    pub accolades: Vec<Accolade>,
}
