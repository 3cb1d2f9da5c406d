use thiserror::Error;

/// Matching is best-effort tolerant of malformed lines; only conditions that
/// make the whole transcript unusable surface as errors.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The log never announces a match start, so no line is in scope.
    #[error("no Match_Start marker found in the log")]
    MissingMatchStart,
    #[error("failed to read log file: {0}")]
    Io(#[from] std::io::Error),
}
