//! # Play Command
//!
//! Interactive Liar's Dice: the human takes seat 0 and the remaining seats
//! are filled with computer players built from the configured profiles.
//!
//! Each betting cycle shows the player's own dice; computer moves are
//! echoed as they happen. A challenge reveals every cup before the loser
//! gives up a die. The session ends when one player is left, when the human
//! runs out of dice, or on `q` / end of input. Standings are printed in
//! every case.

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_action, format_outcome, format_reveal, seat_name};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action};
use liarsdice_ai::{Opponent, create_ai};
use liarsdice_engine::engine::{ActionResult, Engine};
use liarsdice_engine::errors::GameError;
use liarsdice_engine::player::{Action, PlayerId};
use liarsdice_engine::rng::resolve_seed;
use std::io::{BufRead, Write};
use tracing::debug;

const HUMAN: PlayerId = PlayerId(0);

/// Who makes the decisions for a seat.
enum Seat {
    Human,
    Computer(Box<dyn Opponent>),
}

/// Options of the `play` command; `None` falls back to the configuration.
#[derive(Debug, Clone, Default)]
pub struct PlayArgs {
    pub players: Option<usize>,
    pub dice: Option<usize>,
    pub wild: bool,
    pub seed: Option<u64>,
    pub name: String,
}

/// Handle the play command.
///
/// # Errors
///
/// Returns `CliError::Config` for an invalid configuration or table size,
/// `CliError::Io` if the output streams fail. Unparsable input and rejected
/// bids from the human are reported on `err` and re-prompted rather than
/// returned.
///
/// # Examples
///
/// ```
/// use liarsdice_cli::commands::play::{PlayArgs, handle_play_command};
/// use std::io::Cursor;
///
/// let args = PlayArgs { players: Some(2), dice: Some(2), seed: Some(7), name: "Ada".into(), ..Default::default() };
/// let (mut out, mut err) = (Vec::new(), Vec::new());
/// handle_play_command(args, &mut out, &mut err, &mut Cursor::new("q\n")).unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("Standings"));
/// ```
pub fn handle_play_command(
    args: PlayArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let game = cfg.game_config(args.players, args.dice, args.wild);
    game.validate().map_err(|e| CliError::Config(e.to_string()))?;
    let seed = resolve_seed(args.seed.or(cfg.seed));

    let mut names = vec![args.name.clone()];
    let mut seats = vec![Seat::Human];
    for i in 1..game.players {
        let ai = create_ai(cfg.profile_for(i - 1), seed.wrapping_add(i as u64))?;
        names.push(unique_name(&names, ai.name()));
        seats.push(Seat::Computer(ai));
    }

    let mut eng = Engine::new(game, names, Some(seed))?;
    writeln!(
        out,
        "play: players={} dice={} wild={} seed={}",
        game.players, game.dice_per_player, game.wild_ones, seed
    )?;

    let mut shown_cycle = 0;
    let mut quit = false;
    while !eng.is_over() {
        if !eng.player(HUMAN)?.is_active() {
            writeln!(out, "You are out of dice.")?;
            break;
        }
        if eng.cycle() != shown_cycle {
            shown_cycle = eng.cycle();
            writeln!(
                out,
                "--- Round {} ({} dice in play) ---",
                shown_cycle,
                eng.ledger().total_dice()
            )?;
            writeln!(out, "Your dice: {}", eng.player(HUMAN)?.hand())?;
        }

        let current = eng.current_player()?;
        let action = match seats.get_mut(current.0) {
            Some(Seat::Human) => {
                match ledger_line(&eng) {
                    Some(line) => writeln!(out, "{}", line)?,
                    None => writeln!(out, "You open the bidding.")?,
                }
                ui::prompt(out, "Your move (bid <count> <face> | liar | q): ")?;
                let Some(line) = read_stdin_line(stdin) else {
                    writeln!(out)?;
                    quit = true;
                    break;
                };
                match parse_player_action(&line) {
                    ParseResult::Action(a) => a,
                    ParseResult::Quit => {
                        quit = true;
                        break;
                    }
                    ParseResult::Invalid(msg) => {
                        ui::write_error(err, &msg)?;
                        continue;
                    }
                }
            }
            Some(Seat::Computer(ai)) => {
                let view = eng.view(current)?;
                ai.decide(&view)?
            }
            None => {
                let msg = format!("no seat for player {}", current);
                return Err(GameError::EngineMisuse(msg).into());
            }
        };

        let actor = seat_name(eng.players(), current);
        let cups = if action == Action::Challenge {
            revealed_cups(&eng)
        } else {
            Vec::new()
        };
        match eng.apply_action(current, action) {
            Ok(ActionResult::BidPlaced(_)) => {
                writeln!(out, "{} {}", actor, format_action(&action))?;
            }
            Ok(ActionResult::Resolved(outcome)) => {
                writeln!(out, "{} {}", actor, format_action(&action))?;
                for line in format_reveal(&cups) {
                    writeln!(out, "{}", line)?;
                }
                writeln!(out, "{}", format_outcome(eng.players(), &outcome))?;
            }
            Err(e) if current == HUMAN && e.is_recoverable() => {
                debug!(error = %e, "human action rejected");
                ui::write_error(err, &e.to_string())?;
            }
            Err(e) => return Err(e.into()),
        }
    }

    if quit {
        writeln!(out, "You left the table.")?;
    }
    if let Some(winner) = eng.winner() {
        writeln!(out, "Winner: {}", seat_name(eng.players(), winner))?;
    }
    write_standings(&eng, out)?;
    Ok(())
}

fn ledger_line(eng: &Engine) -> Option<String> {
    let bid = eng.ledger().current()?;
    let by = eng
        .ledger()
        .owner()
        .map(|id| seat_name(eng.players(), id))
        .unwrap_or_default();
    Some(format!("Current bid: {} by {}", bid, by))
}

/// Cups of everyone still in, captured before a challenge re-rolls them.
fn revealed_cups(eng: &Engine) -> Vec<(String, Vec<u8>)> {
    eng.players()
        .iter()
        .filter(|p| p.is_active())
        .map(|p| (p.name().to_string(), p.hand().faces()))
        .collect()
}

fn unique_name(taken: &[String], base: &str) -> String {
    if !taken.iter().any(|n| n == base) {
        return base.to_string();
    }
    (2..)
        .map(|i| format!("{} {}", base, i))
        .find(|candidate| !taken.contains(candidate))
        .unwrap_or_else(|| base.to_string())
}

fn write_standings(eng: &Engine, out: &mut dyn Write) -> Result<(), CliError> {
    let mut standings: Vec<_> = eng
        .players()
        .iter()
        .map(|p| (p.name(), p.hand().dice_count()))
        .collect();
    standings.sort_by(|a, b| b.1.cmp(&a.1));
    writeln!(out, "Standings:")?;
    for (name, dice) in standings {
        writeln!(out, "  {:<10} {} dice", name, dice)?;
    }
    Ok(())
}
