use std::env;
use std::error::Error;
use std::fs;

use csgo_log_parser::parse_match_log;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let path = env::args()
        .nth(1)
        .ok_or("usage: csgo_log_parser <match.log>")?;

    let text = fs::read_to_string(&path)?;
    let summary = parse_match_log(&text)?;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
