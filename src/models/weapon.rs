use serde::{Deserialize, Serialize};

/// Lethality counter for one weapon string. The key keeps whatever kill
/// context the log attached to it (e.g. `ak47 (headshot)`), so the same gun
/// can legitimately appear under more than one key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    pub name_with_context: String,
    pub kills: u32,
}

impl Weapon {
    /// A weapon record only comes into existence on its first kill.
    pub fn new(name_with_context: &str) -> Self {
        Self {
            name_with_context: name_with_context.to_string(),
            kills: 1,
        }
    }
}
