use crate::models::{Accolade, Winner};
use crate::parsing::accolades::parse_accolade_line;
use crate::parsing::regex::*;

/// One classified log line with its extracted fields. Secondary fields are
/// `Option` where the log occasionally omits or mangles them; the subject
/// player of a line is still worth registering even when the rest of the
/// extraction fails.
#[derive(Debug, Clone, PartialEq)]
pub enum LineEvent {
    MatchStart,
    RoundStart,
    CtTeam(String),
    TerroristTeam(String),
    MoneyChange { player: String, spent: u32 },
    LeftBuyzone { player: String, equipment: Option<String> },
    Attacked { attacker: String, victim: Option<String> },
    Killed { killer: String, victim: Option<String>, weapon: Option<String>, headshot: bool },
    KilledOther { killer: String },
    WinCondition(Winner),
    SpectatorSwitch(String),
    Accolade(Accolade),
}

/// Classifies a single log line and extracts its typed fields. Lines that
/// match no known template yield `None` and contribute nothing.
pub fn parse_log_line(line: &str) -> Option<LineEvent> {
    if line.contains(ROUND_START_MARKER) {
        return Some(LineEvent::RoundStart);
    }

    if line.contains(MATCH_START_MARKER) {
        return Some(LineEvent::MatchStart);
    }

    if line.contains(SPECTATOR_MARKER) {
        return Some(LineEvent::SpectatorSwitch(player_name(line)?));
    }

    if line.contains(CT_TEAM_MARKER) {
        return Some(LineEvent::CtTeam(tail_from(line, CT_TEAM_OFFSET)?));
    }

    if line.contains(TERRORIST_TEAM_MARKER) {
        return Some(LineEvent::TerroristTeam(tail_from(line, TERRORIST_TEAM_OFFSET)?));
    }

    if line.contains(MONEY_CHANGE_MARKER) {
        return Some(LineEvent::MoneyChange {
            player: player_name(line)?,
            spent: money_spent(line),
        });
    }

    if line.contains(BUYZONE_MARKER) {
        return Some(LineEvent::LeftBuyzone {
            player: player_name(line)?,
            equipment: equipment_list(line),
        });
    }

    if line.contains(ATTACKED_MARKER) {
        return Some(LineEvent::Attacked {
            attacker: player_name(line)?,
            victim: target_name(line, ATTACKED_MARKER, ATTACKED_VICTIM_OFFSET),
        });
    }

    if line.contains(KILLED_OTHER_MARKER) {
        return Some(LineEvent::KilledOther { killer: player_name(line)? });
    }

    if line.contains(KILLED_MARKER) {
        return Some(LineEvent::Killed {
            killer: player_name(line)?,
            victim: target_name(line, KILLED_MARKER, KILLED_VICTIM_OFFSET),
            weapon: weapon_name(line),
            headshot: line.contains(HEADSHOT_MARKER),
        });
    }

    if line.contains(WIN_CONDITION_MARKER) {
        return Some(LineEvent::WinCondition(classify_winner(line)));
    }

    if line.contains(ACCOLADE_MARKER) {
        return parse_accolade_line(line).map(LineEvent::Accolade);
    }

    None
}

/// Tests a line against the round-result pattern and, on a match, returns the
/// announcer's score text verbatim. Checked separately from the content
/// categories because the announcement doubles as the round boundary.
pub fn parse_round_result(line: &str) -> Option<String> {
    if RE_SCORE.is_match(line) {
        Some(line.get(SCORE_OFFSET..).unwrap_or_default().to_string())
    } else {
        None
    }
}

/// Everything from a fixed offset to end of line, for the team-name labels.
fn tail_from(line: &str, offset: usize) -> Option<String> {
    line.get(offset..).map(|tail| tail.to_string())
}

/// Extracts the subject player name from the canonical
/// `"NAME<id><steamid><team>"` block right after the timestamp preamble.
fn player_name(line: &str) -> Option<String> {
    let tail = line.get(PLAYER_NAME_OFFSET..)?;
    let end = tail.find('<')?;
    Some(tail[..end].to_string())
}

/// Victim name of an attack/kill line: sliced out of the substring starting at
/// the keyword, a fixed distance past it, up to the next `<`.
fn target_name(line: &str, keyword: &str, offset: usize) -> Option<String> {
    let tail = &line[line.find(keyword)?..];
    let end = tail.find('<')?;
    if end <= offset {
        return None;
    }
    tail.get(offset..end).map(|name| name.to_string())
}

/// Weapon plus kill context: everything after `" with "`, quotes stripped.
fn weapon_name(line: &str) -> Option<String> {
    let idx = line.find(WEAPON_MARKER)?;
    let tail = line.get(idx + WEAPON_MARKER.len()..)?;
    Some(tail.replace('"', ""))
}

/// Amount spent on a money-change line. Zero when the line records a gain.
fn money_spent(line: &str) -> u32 {
    RE_MONEY_SPENT
        .find(line)
        .and_then(|m| m.as_str()[1..].parse().ok())
        .unwrap_or(0)
}

fn equipment_list(line: &str) -> Option<String> {
    RE_BUYZONE
        .captures(line)
        .map(|caps| caps[1].to_string())
}

/// Bomb detonation and the explicit terrorist win notice are the only
/// terrorist-side conditions; of the game's four win conditions every other
/// notice means the counter-terrorists took the round.
fn classify_winner(line: &str) -> Winner {
    if line.contains(TARGET_BOMBED_MARKER) || line.contains(TERRORISTS_WIN_MARKER) {
        Winner::Terrorists
    } else {
        Winner::CounterTerrorists
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_name_at_fixed_offset() {
        let line = r#"11/28/2021 - 20:41:40: "Brutus<1><STEAM_1:0:1><TERRORIST>" money change 1000-300 = $700"#;
        assert_eq!(player_name(line), Some("Brutus".to_string()));
    }

    #[test]
    fn player_name_missing_delimiter() {
        assert_eq!(player_name("11/28/2021 - 20:41:40: garbage"), None);
        assert_eq!(player_name("short"), None);
    }

    #[test]
    fn ct_team_name_after_label() {
        let line = r#"11/28/2021 - 20:41:40: MatchStatus: Team playing "CT": Natus Vincere"#;
        assert_eq!(
            parse_log_line(line),
            Some(LineEvent::CtTeam("Natus Vincere".to_string()))
        );
    }

    #[test]
    fn terrorist_team_name_after_label() {
        let line = r#"11/28/2021 - 20:41:40: MatchStatus: Team playing "TERRORIST": Team Vitality"#;
        assert_eq!(
            parse_log_line(line),
            Some(LineEvent::TerroristTeam("Team Vitality".to_string()))
        );
    }

    #[test]
    fn money_change_only_counts_spending() {
        let spend = r#"11/28/2021 - 20:41:40: "Brutus<1><STEAM_1:0:1><TERRORIST>" money change 1000-300 = $700 (tracked) (purchase: weapon_p250)"#;
        assert_eq!(
            parse_log_line(spend),
            Some(LineEvent::MoneyChange { player: "Brutus".to_string(), spent: 300 })
        );

        let gain = r#"11/28/2021 - 20:41:40: "Brutus<1><STEAM_1:0:1><TERRORIST>" money change 1000+2700 = $3700 (tracked)"#;
        assert_eq!(
            parse_log_line(gain),
            Some(LineEvent::MoneyChange { player: "Brutus".to_string(), spent: 0 })
        );
    }

    #[test]
    fn buyzone_equipment_kept_verbatim_with_brackets() {
        let line = r#"11/28/2021 - 20:41:40: "Brutus<1><STEAM_1:0:1><TERRORIST>" left buyzone with [ weapon_knife_t weapon_glock kevlar(100) ]"#;
        assert_eq!(
            parse_log_line(line),
            Some(LineEvent::LeftBuyzone {
                player: "Brutus".to_string(),
                equipment: Some("[ weapon_knife_t weapon_glock kevlar(100) ]".to_string()),
            })
        );
    }

    #[test]
    fn attacked_victim_past_keyword() {
        let line = r#"11/28/2021 - 20:41:45: "Brutus<1><STEAM_1:0:1><TERRORIST>" [-225 -1829 -168] attacked "Caesar<2><STEAM_1:0:2><CT>" [65 -539 -224] with "glock" (damage "20")"#;
        assert_eq!(
            parse_log_line(line),
            Some(LineEvent::Attacked {
                attacker: "Brutus".to_string(),
                victim: Some("Caesar".to_string()),
            })
        );
    }

    #[test]
    fn kill_with_weapon_and_headshot_context() {
        let line = r#"11/28/2021 - 20:41:50: "Brutus<1><STEAM_1:0:1><TERRORIST>" [-225 -1829 -168] killed "Caesar<2><STEAM_1:0:2><CT>" [65 -539 -224] with "ak47" (headshot)"#;
        assert_eq!(
            parse_log_line(line),
            Some(LineEvent::Killed {
                killer: "Brutus".to_string(),
                victim: Some("Caesar".to_string()),
                weapon: Some("ak47 (headshot)".to_string()),
                headshot: true,
            })
        );
    }

    #[test]
    fn killed_other_is_object_destruction() {
        let line = r#"11/28/2021 - 20:41:50: "Brutus<1><STEAM_1:0:1><TERRORIST>" [-225 -1829 -168] killed other "func_breakable<362>" with "hegrenade""#;
        assert_eq!(
            parse_log_line(line),
            Some(LineEvent::KilledOther { killer: "Brutus".to_string() })
        );
    }

    #[test]
    fn win_condition_sides() {
        let bombed = r#"11/28/2021 - 20:43:21: World triggered "SFUI_Notice_Target_Bombed" (CT "0") (T "1")"#;
        let defused = r#"11/28/2021 - 20:43:21: World triggered "SFUI_Notice_Bomb_Defused" (CT "1") (T "0")"#;
        let t_win = r#"11/28/2021 - 20:43:21: World triggered "SFUI_Notice_Terrorists_Win" (CT "0") (T "1")"#;
        let ct_win = r#"11/28/2021 - 20:43:21: World triggered "SFUI_Notice_CTs_Win" (CT "1") (T "0")"#;
        assert_eq!(parse_log_line(bombed), Some(LineEvent::WinCondition(Winner::Terrorists)));
        assert_eq!(parse_log_line(t_win), Some(LineEvent::WinCondition(Winner::Terrorists)));
        assert_eq!(parse_log_line(defused), Some(LineEvent::WinCondition(Winner::CounterTerrorists)));
        assert_eq!(parse_log_line(ct_win), Some(LineEvent::WinCondition(Winner::CounterTerrorists)));
    }

    #[test]
    fn spectator_switch() {
        let line = r#"11/28/2021 - 20:30:01: "Georg<9><STEAM_1:0:9><Unassigned>" switched from team <Unassigned> to <Spectator>"#;
        assert_eq!(
            parse_log_line(line),
            Some(LineEvent::SpectatorSwitch("Georg".to_string()))
        );
    }

    #[test]
    fn round_result_score_at_fixed_offset() {
        let line = "11/28/2021 - 20:45:31: [FACEIT^^^] NAVI [1 - 0] VITA";
        assert_eq!(parse_round_result(line), Some("NAVI [1 - 0] VITA".to_string()));
    }

    #[test]
    fn coordinate_brackets_are_not_a_score() {
        let line = r#"11/28/2021 - 20:41:50: "Brutus<1><STEAM_1:0:1><TERRORIST>" [-225 -1829 -168] killed "Caesar<2><STEAM_1:0:2><CT>" [65 -539 -224] with "knife""#;
        assert_eq!(parse_round_result(line), None);
    }

    #[test]
    fn unmatched_lines_are_ignored() {
        assert_eq!(parse_log_line(""), None);
        assert_eq!(parse_log_line("11/28/2021 - 20:41:40: server_cvar: \"sv_cheats\" \"0\""), None);
    }
}
