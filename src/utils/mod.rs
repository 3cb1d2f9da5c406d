pub mod time;

pub use time::{round_duration, time_of_line};
