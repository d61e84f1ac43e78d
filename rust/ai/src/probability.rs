//! Monte-Carlo estimate of how likely a bid is to hold, seen from one seat.
//!
//! The caller's own dice are known; every other die on the table is unknown
//! and gets simulated. The estimate never touches game state.

use liarsdice_engine::dice::{MAX_FACE, MIN_FACE, counts_toward, is_valid_face};
use liarsdice_engine::errors::GameError;
use liarsdice_engine::hand::Hand;
use rand::Rng;

/// Trials used when deciding whether to challenge the standing bid.
pub const DECISION_TRIALS: u32 = 10_000;
/// Trials used per candidate when many candidate raises must be scored.
pub const CANDIDATE_TRIALS: u32 = 1_000;

/// Estimates P(at least `count` dice show `face`) given `hand` and the number
/// of dice still in play.
///
/// Dice in `hand` that count toward the bid are certain matches; the other
/// `total_dice - hand.dice_count()` dice are rolled `trials` times. When the
/// answer is already certain (own dice suffice, or even every unknown die
/// matching would fall short) the exact 1.0 or 0.0 is returned without
/// simulating.
///
/// # Errors
///
/// [`GameError::EngineMisuse`] if `trials` is zero or `face` is off the die.
///
/// # Examples
///
/// ```
/// use liarsdice_ai::probability::estimate;
/// use liarsdice_engine::hand::Hand;
/// use liarsdice_engine::rng::seeded;
///
/// let hand = Hand::from_faces(&[4, 4, 2]).unwrap();
/// let mut rng = seeded(1);
/// // two 4s are already in hand
/// assert_eq!(estimate(2, 4, &hand, 9, false, 1_000, &mut rng).unwrap(), 1.0);
/// // more 4s than dice on the table
/// assert_eq!(estimate(10, 4, &hand, 9, false, 1_000, &mut rng).unwrap(), 0.0);
/// ```
pub fn estimate<R: Rng + ?Sized>(
    count: u32,
    face: u8,
    hand: &Hand,
    total_dice: u32,
    wild: bool,
    trials: u32,
    rng: &mut R,
) -> Result<f64, GameError> {
    if trials == 0 {
        return Err(GameError::EngineMisuse(
            "estimate needs at least one trial".into(),
        ));
    }
    if !is_valid_face(face) {
        return Err(GameError::EngineMisuse(format!(
            "cannot estimate a bid on face {}",
            face
        )));
    }

    let known = hand.count_matching(face, wild);
    let unknown = total_dice.saturating_sub(hand.dice_count() as u32);
    if known >= count {
        return Ok(1.0);
    }
    if known + unknown < count {
        return Ok(0.0);
    }

    let needed = count - known;
    let mut hits = 0u32;
    for _ in 0..trials {
        let mut matches = 0u32;
        for _ in 0..unknown {
            if counts_toward(rng.random_range(MIN_FACE..=MAX_FACE), face, wild) {
                matches += 1;
            }
        }
        if matches >= needed {
            hits += 1;
        }
    }
    Ok(f64::from(hits) / f64::from(trials))
}
