//! Odds command: Monte-Carlo estimate for a single bid.

use crate::error::CliError;
use crate::validation::parse_hand;
use liarsdice_ai::probability::estimate;
use liarsdice_engine::hand::Hand;
use liarsdice_engine::rng::{resolve_seed, seeded};
use std::io::Write;

#[derive(Debug, Clone)]
pub struct OddsArgs {
    pub hand: String,
    pub total: u32,
    pub count: u32,
    pub face: u8,
    pub wild: bool,
    pub trials: u32,
    pub seed: Option<u64>,
}

/// Handle the odds command.
///
/// ```
/// use liarsdice_cli::commands::odds::{OddsArgs, handle_odds_command};
///
/// let args = OddsArgs {
///     hand: "4,4".into(), total: 6, count: 2, face: 4,
///     wild: false, trials: 100, seed: Some(1),
/// };
/// let mut out = Vec::new();
/// handle_odds_command(args, &mut out).unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("= 1.0000"));
/// ```
pub fn handle_odds_command(args: OddsArgs, out: &mut dyn Write) -> Result<(), CliError> {
    let faces = parse_hand(&args.hand).map_err(CliError::InvalidInput)?;
    if (faces.len() as u32) > args.total {
        return Err(CliError::InvalidInput(format!(
            "hand has {} dice but only {} are on the table",
            faces.len(),
            args.total
        )));
    }
    let hand = Hand::from_faces(&faces)?;
    let seed = resolve_seed(args.seed);
    let mut rng = seeded(seed);

    let p = estimate(
        args.count,
        args.face,
        &hand,
        args.total,
        args.wild,
        args.trials,
        &mut rng,
    )?;
    writeln!(
        out,
        "P(at least {} x {}s | hand {}, {} dice, wild={}) = {:.4}",
        args.count, args.face, hand, args.total, args.wild, p
    )?;
    writeln!(out, "trials={} seed={}", args.trials, seed)?;
    Ok(())
}
