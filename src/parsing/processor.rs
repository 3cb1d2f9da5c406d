use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::models::{Accolade, MatchSummary, Player, Round, Weapon, Winner};
use crate::parsing::accolades::most_objects_destroyed;
use crate::parsing::line_parser::{parse_log_line, parse_round_result, LineEvent};
use crate::utils::time::{round_duration, time_of_line};

/// The core state machine: walks the trimmed line sequence once, carrying the
/// round-in-progress state and the cross-round player/weapon aggregates, and
/// emits one `Round` per score announcement.
///
/// Fully self-contained per parse run; two logs can be parsed independently
/// in the same process.
#[derive(Debug, Default)]
pub struct MatchAccumulator {
    // Insertion-ordered registries with O(1) find-or-create. Iteration order
    // matters: assist attribution and accolade tie-breaks follow the order
    // players were first observed.
    players: Vec<Player>,
    player_index: HashMap<String, usize>,
    weapons: Vec<Weapon>,
    weapon_index: HashMap<String, usize>,

    rounds: Vec<Round>,
    accolades: Vec<Accolade>,

    // Round-in-progress state.
    current_round: u32,
    round_start: Option<u64>,
    ct_team: String,
    terrorist_team: String,
    winner: Option<Winner>,
    kill_feed: Vec<String>,
    // Attacker -> victims damaged this round, for assist attribution. Lives
    // only for the current round; cleared wholesale at every boundary.
    damaged_this_round: HashMap<String, HashSet<String>>,
}

impl MatchAccumulator {
    pub fn new() -> Self {
        Self {
            current_round: 1,
            ..Self::default()
        }
    }

    /// Processes one line: content category first, then the round-result
    /// probe, since the score announcement is checked against every line.
    pub fn process_line(&mut self, line: &str) {
        if let Some(event) = parse_log_line(line) {
            self.apply_event(line, event);
        }

        if let Some(score) = parse_round_result(line) {
            self.finish_round(line, score);
        }
    }

    /// Consumes the accumulator into the final output model, synthesizing the
    /// homegrown accolade from the finished player aggregates. Any round
    /// still in progress is discarded.
    pub fn into_summary(mut self, spectators: Vec<String>) -> MatchSummary {
        self.accolades.push(most_objects_destroyed(&self.players));
        MatchSummary {
            rounds: self.rounds,
            players: self.players,
            weapons: self.weapons,
            spectators,
            accolades: self.accolades,
        }
    }

    fn apply_event(&mut self, line: &str, event: LineEvent) {
        match event {
            LineEvent::RoundStart => match time_of_line(line) {
                Some(anchor) => self.round_start = Some(anchor),
                None => warn!(line, "round start without a parseable timestamp"),
            },
            // Latest assignment before the round boundary wins.
            LineEvent::CtTeam(name) => self.ct_team = name,
            LineEvent::TerroristTeam(name) => self.terrorist_team = name,
            LineEvent::MoneyChange { player, spent } => {
                let idx = self.ensure_player(&player);
                self.players[idx].money_spent += spent;
            }
            LineEvent::LeftBuyzone { player, equipment } => {
                let idx = self.ensure_player(&player);
                if let Some(equipment) = equipment {
                    self.players[idx]
                        .left_buy_zone_with
                        .insert(self.current_round, equipment);
                }
            }
            LineEvent::Attacked { attacker, victim } => self.record_attack(attacker, victim),
            LineEvent::Killed { killer, victim, weapon, headshot } => {
                self.ensure_player(&killer);
                match (victim, weapon) {
                    (Some(victim), Some(weapon)) => {
                        self.record_kill(&killer, &victim, &weapon, headshot)
                    }
                    _ => warn!(line, "kill line without victim or weapon, skipped"),
                }
            }
            LineEvent::KilledOther { killer } => {
                let idx = self.ensure_player(&killer);
                self.players[idx].objects_destroyed += 1;
            }
            LineEvent::WinCondition(winner) => self.winner = Some(winner),
            LineEvent::Accolade(accolade) => self.accolades.push(accolade),
            // Trimming and the spectator roster are handled before the
            // accumulator runs.
            LineEvent::MatchStart | LineEvent::SpectatorSwitch(_) => {}
        }
    }

    /// Non-lethal damage only marks the victim in the attacker's per-round
    /// set; assists are granted at the moment of a kill.
    fn record_attack(&mut self, attacker: String, victim: Option<String>) {
        self.ensure_player(&attacker);
        if let Some(victim) = victim {
            self.ensure_player(&victim);
            self.damaged_this_round
                .entry(attacker)
                .or_default()
                .insert(victim);
        }
    }

    fn record_kill(&mut self, killer: &str, victim: &str, weapon: &str, headshot: bool) {
        let mut feed_entry = String::from(killer);

        // Killer gets the kill; everyone else who damaged the victim this
        // round gets an assist and joins the feed entry, in roster order.
        for player in self.players.iter_mut() {
            if player.name == killer {
                player.kills += 1;
                if headshot {
                    player.headshots += 1;
                }
            } else if self
                .damaged_this_round
                .get(&player.name)
                .map_or(false, |victims| victims.contains(victim))
            {
                player.assists += 1;
                feed_entry.push_str(" + ");
                feed_entry.push_str(&player.name);
            }
        }

        feed_entry.push_str(" killed ");
        feed_entry.push_str(victim);
        feed_entry.push_str(" using ");
        feed_entry.push_str(weapon);
        self.kill_feed.push(feed_entry);

        // The weapon counter moves together with the kill, whether or not the
        // weapon record already exists.
        match self.weapon_index.get(weapon) {
            Some(&idx) => self.weapons[idx].kills += 1,
            None => {
                self.weapon_index.insert(weapon.to_string(), self.weapons.len());
                self.weapons.push(Weapon::new(weapon));
            }
        }
    }

    /// The admin announces the score right after each round ends; that
    /// announcement is the authoritative round boundary.
    fn finish_round(&mut self, line: &str, score: String) {
        let length = round_duration(self.round_start, time_of_line(line));

        self.rounds.push(Round {
            length,
            ct_team: self.ct_team.clone(),
            terrorist_team: self.terrorist_team.clone(),
            score,
            winner: self.winner,
            kill_feed: std::mem::take(&mut self.kill_feed),
        });

        self.damaged_this_round.clear();
        debug!(round = self.current_round, length, "round complete");
        self.current_round += 1;
    }

    /// Lazy creation: any statistic-bearing reference to an unseen name adds
    /// a zero-initialized player, covering substitutes entering mid-match.
    fn ensure_player(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.player_index.get(name) {
            return idx;
        }
        let idx = self.players.len();
        self.player_index.insert(name.to_string(), idx);
        self.players.push(Player::new(name));
        idx
    }
}
