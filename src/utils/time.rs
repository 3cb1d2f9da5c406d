// Every log line starts with the fixed-width `MM/dd/yyyy - HH:mm:ss: `
// preamble; the time of day sits at these character positions. The date is
// irrelevant for round durations.
pub const TIME_OFFSET: usize = 13;
pub const TIME_WIDTH: usize = 8;

/// Time of day of a log line, in seconds since midnight. `None` when the
/// fixed-width slice is not a valid `HH:mm:ss` — callers treat that as "no
/// round boundary detected", never as a fatal error.
pub fn time_of_line(line: &str) -> Option<u64> {
    let slice = line.get(TIME_OFFSET..TIME_OFFSET + TIME_WIDTH)?;
    let mut parts = slice.split(':');
    let hours: u64 = parts.next()?.parse().ok()?;
    let minutes: u64 = parts.next()?.parse().ok()?;
    let seconds: u64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(hours * 3600 + minutes * 60 + seconds)
}

/// Whole seconds between the round-start anchor and the boundary line,
/// clamped to zero when either side is missing or the clock wrapped.
pub fn round_duration(start: Option<u64>, end: Option<u64>) -> u64 {
    match (start, end) {
        (Some(start), Some(end)) if end >= start => end - start,
        _ => 0,
    }
}
