//! Simulation command: computer-only games and per-profile win counts.
//!
//! Every seat is a computer player. Profiles are handed out from the
//! configured list and rotated by one seat each game so no profile keeps
//! the opening seat. Game `g` is seeded with `seed + g`, and each computer
//! player with the game seed plus its seat, so a run is reproducible from
//! the printed base seed.

use crate::config;
use crate::error::CliError;
use liarsdice_ai::{Opponent, create_ai};
use liarsdice_engine::engine::{Engine, GameConfig};
use liarsdice_engine::errors::GameError;
use liarsdice_engine::rng::resolve_seed;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;
use tracing::info;

/// Options of the `sim` command; `None` falls back to the configuration.
#[derive(Debug, Clone, Default)]
pub struct SimArgs {
    pub games: u32,
    pub players: Option<usize>,
    pub dice: Option<usize>,
    pub wild: bool,
    pub seed: Option<u64>,
    pub json: bool,
}

#[derive(Debug, Default, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ProfileRecord {
    /// Seats this profile occupied across all games
    pub seats: u32,
    pub wins: u32,
}

#[derive(Debug, Serialize)]
pub struct SimSummary {
    pub games: u32,
    pub seed: u64,
    pub table: GameConfig,
    /// Betting cycles per game, averaged
    pub avg_rounds: f64,
    pub profiles: BTreeMap<String, ProfileRecord>,
}

/// Handle the sim command.
pub fn handle_sim_command(args: SimArgs, out: &mut dyn Write) -> Result<(), CliError> {
    if args.games == 0 {
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    let cfg = config::load()?;
    let table = cfg.game_config(args.players, args.dice, args.wild);
    table.validate().map_err(|e| CliError::Config(e.to_string()))?;
    let base_seed = resolve_seed(args.seed.or(cfg.seed));

    let mut profiles: BTreeMap<String, ProfileRecord> = BTreeMap::new();
    let mut total_rounds = 0u64;
    for g in 0..args.games {
        let game_seed = base_seed.wrapping_add(g as u64);
        let lineup: Vec<String> = (0..table.players)
            .map(|seat| cfg.profile_for(seat + g as usize).to_ascii_lowercase())
            .collect();
        let (winner, rounds) = play_one(table, &lineup, game_seed)?;
        total_rounds += rounds as u64;
        for name in &lineup {
            profiles.entry(name.clone()).or_default().seats += 1;
        }
        profiles.entry(lineup[winner].clone()).or_default().wins += 1;
        info!(game = g, seed = game_seed, winner = %lineup[winner], rounds, "game finished");
    }

    let summary = SimSummary {
        games: args.games,
        seed: base_seed,
        table,
        avg_rounds: total_rounds as f64 / args.games as f64,
        profiles,
    };
    if args.json {
        let json = serde_json::to_string_pretty(&summary).map_err(std::io::Error::other)?;
        writeln!(out, "{}", json)?;
    } else {
        write_summary(&summary, out)?;
    }
    Ok(())
}

/// Plays one game to the end; returns the winning seat and the number of
/// betting cycles it took.
fn play_one(table: GameConfig, lineup: &[String], seed: u64) -> Result<(usize, u32), CliError> {
    let mut seats: Vec<Box<dyn Opponent>> = lineup
        .iter()
        .enumerate()
        .map(|(i, profile)| create_ai(profile, seed.wrapping_add(i as u64 + 1)))
        .collect::<Result<_, _>>()?;
    let names: Vec<String> = seats
        .iter()
        .enumerate()
        .map(|(i, ai)| format!("{} {}", ai.name(), i + 1))
        .collect();
    let mut eng = Engine::new(table, names, Some(seed))?;

    while !eng.is_over() {
        let current = eng.current_player()?;
        let view = eng.view(current)?;
        let action = seats[current.0].decide(&view)?;
        eng.apply_action(current, action)?;
    }
    let winner = eng.winner().ok_or(GameError::GameOver)?;
    Ok((winner.0, eng.cycle()))
}

fn write_summary(summary: &SimSummary, out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(
        out,
        "sim: games={} players={} dice={} wild={} seed={}",
        summary.games,
        summary.table.players,
        summary.table.dice_per_player,
        summary.table.wild_ones,
        summary.seed
    )?;
    for (name, rec) in &summary.profiles {
        let rate = if rec.seats == 0 {
            0.0
        } else {
            100.0 * rec.wins as f64 / rec.seats as f64
        };
        writeln!(
            out,
            "  {:<8} wins={:<5} seats={:<5} win rate={:.1}%",
            name, rec.wins, rec.seats, rate
        )?;
    }
    writeln!(out, "Average rounds per game: {:.1}", summary.avg_rounds)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small(games: u32, json: bool) -> SimArgs {
        SimArgs {
            games,
            players: Some(2),
            dice: Some(2),
            wild: false,
            seed: Some(3),
            json,
        }
    }

    #[test]
    fn zero_games_is_invalid() {
        let mut out = Vec::new();
        let res = handle_sim_command(small(0, false), &mut out);
        assert!(
            matches!(res, Err(CliError::InvalidInput(msg)) if msg.contains("games must be >= 1"))
        );
        assert!(out.is_empty());
    }

    #[test]
    fn wins_add_up_to_games() {
        let mut out = Vec::new();
        handle_sim_command(small(2, true), &mut out).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let profiles = v["profiles"].as_object().unwrap();
        let wins: u64 = profiles.values().map(|p| p["wins"].as_u64().unwrap()).sum();
        let seats: u64 = profiles.values().map(|p| p["seats"].as_u64().unwrap()).sum();
        assert_eq!(wins, 2);
        assert_eq!(seats, 4);
        assert_eq!(v["seed"].as_u64(), Some(3));
    }
}
