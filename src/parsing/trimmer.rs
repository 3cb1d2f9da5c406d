use tracing::debug;

use crate::error::ParseError;
use crate::parsing::line_parser::{parse_log_line, LineEvent};

/// Scans the complete raw line sequence once and cuts away everything before
/// the authoritative match start. Multiple `Match_Start` events may occur
/// (knife rounds, restarts); only the last one starts the match for real.
///
/// Spectators are collected from the whole untrimmed log, since players
/// usually switch to spectator during warmup, before the real start.
pub fn trim_pre_match<'a>(
    lines: &'a [&'a str],
) -> Result<(&'a [&'a str], Vec<String>), ParseError> {
    let mut match_start: Option<usize> = None;
    let mut spectators: Vec<String> = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        match parse_log_line(line) {
            Some(LineEvent::MatchStart) => match_start = Some(index),
            Some(LineEvent::SpectatorSwitch(name)) => {
                if !spectators.iter().any(|known| known == &name) {
                    spectators.push(name);
                }
            }
            _ => {}
        }
    }

    let match_start = match_start.ok_or(ParseError::MissingMatchStart)?;
    debug!(index = match_start, "authoritative match start located");

    Ok((&lines[match_start..], spectators))
}
