use crate::models::{Accolade, Player};

// Per-field trims of the comma-delimited ACCOLADE line, e.g.
// `... ACCOLADE, FINAL: {3k},\tBrutus<4>,\tVALUE: 1.000000,\tPOS: 3,\tSCORE: 20.000000`
const NAME_PREFIX: usize = 9; // strips ` FINAL: {`
const PLAYER_PREFIX: usize = 1; // strips the separator tab
const VALUE_PREFIX: usize = 7; // strips past `VALUE:`
const POS_PREFIX: usize = 5; // strips past `POS:`
const SCORE_PREFIX: usize = 7; // strips past `SCORE:`

/// Parses one ACCOLADE line into an award record. Returns `None` when the
/// line does not have the expected field layout.
pub fn parse_accolade_line(line: &str) -> Option<Accolade> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < 6 {
        return None;
    }

    let name_field = fields[1];
    let name = name_field
        .get(NAME_PREFIX..name_field.len().saturating_sub(1))?
        .to_string();

    let player_field = fields[2];
    let player_end = player_field.find('<')?;
    if player_end <= PLAYER_PREFIX {
        return None;
    }
    let player = player_field.get(PLAYER_PREFIX..player_end)?.to_string();

    let value = int_prefix(fields[3].get(VALUE_PREFIX..)?);
    let pos = int_prefix(fields[4].get(POS_PREFIX..)?);
    let score = int_prefix(fields[5].get(SCORE_PREFIX..)?);

    Some(Accolade { name, player, value, pos, score })
}

/// Synthesizes the one homegrown accolade: most objects destroyed over the
/// match. Ties break in favor of the player seen first; an empty roster
/// awards `"none"` with value zero.
pub fn most_objects_destroyed(players: &[Player]) -> Accolade {
    let mut best: Option<(&str, u32)> = None;
    for player in players {
        if best.map_or(true, |(_, max)| player.objects_destroyed > max) {
            best = Some((&player.name, player.objects_destroyed));
        }
    }
    let (winner, value) = best.unwrap_or(("none", 0));
    Accolade::new("Bull in a china shop", winner, value, 1, value)
}

/// The numeric accolade fields carry fractional tails (`1.000000`); only the
/// leading integer part counts. No digits parse as zero.
fn int_prefix(field: &str) -> u32 {
    let trimmed = field.trim_start();
    let digits: &str = &trimmed[..trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len())];
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fixed_position_fields() {
        let line = "11/28/2021 - 21:18:23: ACCOLADE, FINAL: {3k},\tBrutus<4>,\tVALUE: 1.000000,\tPOS: 3,\tSCORE: 20.000000";
        let accolade = parse_accolade_line(line).unwrap();
        assert_eq!(accolade.name, "3k");
        assert_eq!(accolade.player, "Brutus");
        assert_eq!(accolade.value, 1);
        assert_eq!(accolade.pos, 3);
        assert_eq!(accolade.score, 20);
    }

    #[test]
    fn rejects_short_lines() {
        assert_eq!(parse_accolade_line("ACCOLADE, FINAL: {3k}"), None);
    }

    #[test]
    fn most_objects_destroyed_prefers_first_seen_on_ties() {
        let mut first = Player::new("Brutus");
        first.objects_destroyed = 2;
        let mut second = Player::new("Longinus");
        second.objects_destroyed = 2;

        let accolade = most_objects_destroyed(&[first, second]);
        assert_eq!(accolade.name, "Bull in a china shop");
        assert_eq!(accolade.player, "Brutus");
        assert_eq!(accolade.value, 2);
        assert_eq!(accolade.pos, 1);
        assert_eq!(accolade.score, 2);
    }

    #[test]
    fn most_objects_destroyed_with_empty_roster() {
        let accolade = most_objects_destroyed(&[]);
        assert_eq!(accolade.player, "none");
        assert_eq!(accolade.value, 0);
    }
}
