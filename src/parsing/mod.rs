pub mod accolades;
pub mod line_parser;
pub mod processor;
pub mod regex;
pub mod trimmer;

pub use line_parser::{parse_log_line, parse_round_result, LineEvent};
pub use processor::MatchAccumulator;
pub use trimmer::trim_pre_match;
