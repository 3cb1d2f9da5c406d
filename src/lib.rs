mod error;
pub mod models;
pub mod parsing;
pub mod utils;


pub use error::ParseError;
pub use models::{Accolade, MatchSummary, Player, Round, Weapon, Winner};
pub use parsing::{parse_log_line, parse_round_result, LineEvent, MatchAccumulator};

/// Parses a complete match transcript into the structured summary.
///
/// The text is split on any of CRLF/CR/LF, trimmed to the last `Match_Start`
/// marker (collecting spectators from the whole log on the way), and walked
/// once by the accumulator. Re-entrant: no state is shared between runs.
pub fn parse_match_log(text: &str) -> Result<MatchSummary, ParseError> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<&str> = normalized.split('\n').collect();

    let (match_lines, spectators) = parsing::trim_pre_match(&lines)?;

    let mut accumulator = MatchAccumulator::new();
    for line in match_lines {
        accumulator.process_line(line);
    }

    Ok(accumulator.into_summary(spectators))
}
