use lazy_static::lazy_static;
use regex::Regex;

// Substring probes used for line classification. The log's phrasing is fixed
// enough that containment checks are unambiguous per line.
pub const MATCH_START_MARKER: &str = "Match_Start";
pub const ROUND_START_MARKER: &str = "Round_Start";
pub const CT_TEAM_MARKER: &str = "MatchStatus: Team playing \"CT\":";
pub const TERRORIST_TEAM_MARKER: &str = "MatchStatus: Team playing \"TERRORIST\":";
pub const MONEY_CHANGE_MARKER: &str = "money change";
pub const BUYZONE_MARKER: &str = "left buyzone with";
pub const ATTACKED_MARKER: &str = "attacked";
pub const KILLED_MARKER: &str = "killed";
pub const KILLED_OTHER_MARKER: &str = "killed other";
pub const WIN_CONDITION_MARKER: &str = "SFUI_Notice_";
pub const TARGET_BOMBED_MARKER: &str = "SFUI_Notice_Target_Bombed";
pub const TERRORISTS_WIN_MARKER: &str = "SFUI_Notice_Terrorists_Win";
pub const SPECTATOR_MARKER: &str = "switched from team <Unassigned> to <Spectator>";
pub const ACCOLADE_MARKER: &str = "ACCOLADE";
pub const WEAPON_MARKER: &str = " with ";
pub const HEADSHOT_MARKER: &str = "headshot";

// Fixed character offsets tied to the log's textual templates. Every line
// starts with the `MM/dd/yyyy - HH:mm:ss: ` preamble (23 characters), and
// quoted player blocks start right after it.
//
// Player names begin one past the opening quote of `"NAME<id><steamid><team>"`.
pub const PLAYER_NAME_OFFSET: usize = 24;
// Team names follow the two MatchStatus labels, which differ in length.
pub const CT_TEAM_OFFSET: usize = 55;
pub const TERRORIST_TEAM_OFFSET: usize = 62;
// The verbatim score text on a round-result announcement line.
pub const SCORE_OFFSET: usize = 35;
// Victim names sit a fixed distance past the `attacked "` / `killed "` keyword.
pub const ATTACKED_VICTIM_OFFSET: usize = 10;
pub const KILLED_VICTIM_OFFSET: usize = 8;

lazy_static! {
    // Round-result announcement of the shape `TeamA [3 - 2] TeamB`. Team
    // tokens are word characters only; a team name shaped like this inside an
    // unrelated line would still register as a round boundary.
    pub static ref RE_SCORE: Regex = Regex::new(r"(?i)\w+\s\[\d+\s-\s\d+\]\s\w+").unwrap();
    // Anchored to the minus sign: only spending is of interest, gains and the
    // pre-change balance are ignored.
    pub static ref RE_MONEY_SPENT: Regex = Regex::new(r"-\d+").unwrap();
    // The bracketed equipment list, captured with its brackets.
    pub static ref RE_BUYZONE: Regex = Regex::new(r"left buyzone with (\[[^\]]*\])").unwrap();
}
