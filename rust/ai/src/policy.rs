//! Act-or-challenge decision for computer players.
//!
//! A decision walks a small state machine:
//!
//! ```text
//! NoStandingBid ──────────────────────────────► Escalating (opening bid)
//! EvaluatingStandingBid ── p > threshold ─────► Escalating (raise)
//!                       └─ p <= threshold ────► Challenging
//! Escalating ── no legal raise left ──────────► Challenging
//! ```
//!
//! `p` is the Monte-Carlo estimate that the standing bid holds. The same
//! threshold also sets how safe a raise must look: a candidate is taken as
//! soon as its estimate beats `1 - threshold`.

use liarsdice_engine::dice::all_faces;
use liarsdice_engine::errors::GameError;
use liarsdice_engine::hand::Hand;
use liarsdice_engine::ledger::BidLedger;
use liarsdice_engine::player::Action;
use liarsdice_engine::rules::Bid;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use tracing::{debug, trace};

use crate::candidates::candidates;
use crate::probability::{CANDIDATE_TRIALS, DECISION_TRIALS, estimate};

/// Candidates scored before settling for the best one seen.
pub const MAX_PROBES: usize = 9;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PolicyState {
    NoStandingBid,
    EvaluatingStandingBid,
    Escalating,
    Challenging,
}

/// Simulation budget for one decision.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PolicyParams {
    /// Trials for the standing-bid estimate
    pub decision_trials: u32,
    /// Trials per candidate raise
    pub candidate_trials: u32,
    /// Candidate raises scored at most
    pub max_probes: usize,
}

impl Default for PolicyParams {
    fn default() -> Self {
        Self {
            decision_trials: DECISION_TRIALS,
            candidate_trials: CANDIDATE_TRIALS,
            max_probes: MAX_PROBES,
        }
    }
}

/// The chosen action together with the numbers behind it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub action: Action,
    /// Terminal state reached: `Escalating` or `Challenging`
    pub state: PolicyState,
    /// Estimate that the standing bid holds, if one was standing
    pub standing_estimate: Option<f64>,
    /// Estimate for the bid being placed, if it was scored
    pub bid_estimate: Option<f64>,
}

/// Decides with the default simulation budget.
pub fn decide<R: Rng + ?Sized>(
    ledger: &BidLedger,
    hand: &Hand,
    wild: bool,
    threshold: f64,
    rng: &mut R,
) -> Result<Decision, GameError> {
    decide_with(&PolicyParams::default(), ledger, hand, wild, threshold, rng)
}

/// Decides between raising and challenging for the player holding `hand`.
///
/// Never returns a challenge when no bid stands: a fresh cycle always gets an
/// opening bid.
///
/// # Errors
///
/// [`GameError::EngineMisuse`] if `threshold` is outside `[0, 1]`, the hand is
/// empty, or the simulation budget is zero.
pub fn decide_with<R: Rng + ?Sized>(
    params: &PolicyParams,
    ledger: &BidLedger,
    hand: &Hand,
    wild: bool,
    threshold: f64,
    rng: &mut R,
) -> Result<Decision, GameError> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(GameError::EngineMisuse(format!(
            "threshold must be within [0, 1], got {}",
            threshold
        )));
    }
    if hand.is_empty() {
        return Err(GameError::EngineMisuse(
            "a player without dice cannot act".into(),
        ));
    }

    let total = ledger.total_dice();
    let mut standing_estimate = None;
    let mut state = match ledger.current() {
        Some(_) => PolicyState::EvaluatingStandingBid,
        None => PolicyState::NoStandingBid,
    };

    loop {
        trace!(?state, "policy step");
        match state {
            PolicyState::NoStandingBid => {
                let bid = opening_bid(hand, total, wild, rng);
                debug!(%bid, "opening bid");
                return Ok(Decision {
                    action: Action::Bid {
                        count: bid.count,
                        face: bid.face,
                    },
                    state: PolicyState::Escalating,
                    standing_estimate,
                    bid_estimate: None,
                });
            }
            PolicyState::EvaluatingStandingBid => {
                let Some(current) = ledger.current() else {
                    state = PolicyState::NoStandingBid;
                    continue;
                };
                let p = estimate(
                    current.count,
                    current.face,
                    hand,
                    total,
                    wild,
                    params.decision_trials,
                    rng,
                )?;
                debug!(bid = %current, p, threshold, "standing bid estimate");
                standing_estimate = Some(p);
                state = if p > threshold {
                    PolicyState::Escalating
                } else {
                    PolicyState::Challenging
                };
            }
            PolicyState::Escalating => {
                let Some(current) = ledger.current() else {
                    state = PolicyState::NoStandingBid;
                    continue;
                };
                match pick_raise(params, current, hand, total, wild, threshold, rng)? {
                    Some((bid, score)) => {
                        debug!(%bid, score, "raising");
                        return Ok(Decision {
                            action: Action::Bid {
                                count: bid.count,
                                face: bid.face,
                            },
                            state: PolicyState::Escalating,
                            standing_estimate,
                            bid_estimate: Some(score),
                        });
                    }
                    None => state = PolicyState::Challenging,
                }
            }
            PolicyState::Challenging => {
                debug!(p = ?standing_estimate, "calling liar");
                return Ok(Decision {
                    action: Action::Challenge,
                    state: PolicyState::Challenging,
                    standing_estimate,
                    bid_estimate: None,
                });
            }
        }
    }
}

/// Probes up to `max_probes` random legal raises and returns the first one
/// whose estimate beats `1 - threshold`, else the best one probed. `None`
/// when no legal raise exists.
fn pick_raise<R: Rng + ?Sized>(
    params: &PolicyParams,
    current: &Bid,
    hand: &Hand,
    total: u32,
    wild: bool,
    threshold: f64,
    rng: &mut R,
) -> Result<Option<(Bid, f64)>, GameError> {
    let mut pool = candidates(current, total);
    pool.shuffle(rng);
    let target = 1.0 - threshold;

    let mut best: Option<(Bid, f64)> = None;
    for bid in pool.into_iter().take(params.max_probes.max(1)) {
        let score = estimate(
            bid.count,
            bid.face,
            hand,
            total,
            wild,
            params.candidate_trials,
            rng,
        )?;
        trace!(%bid, score, "candidate");
        if score > target {
            return Ok(Some((bid, score)));
        }
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((bid, score));
        }
    }
    Ok(best)
}

/// Opening bid: a random count no larger than our own cup, on the face we
/// hold most of (wild ones included). Ties are broken at random.
pub fn opening_bid<R: Rng + ?Sized>(hand: &Hand, total_dice: u32, wild: bool, rng: &mut R) -> Bid {
    let max_count = (hand.dice_count() as u32).min(total_dice).max(1);
    let count = rng.random_range(1..=max_count);

    let tallies: Vec<(u8, u32)> = all_faces()
        .iter()
        .map(|&f| (f, hand.count_matching(f, wild)))
        .collect();
    let most = tallies.iter().map(|&(_, n)| n).max().unwrap_or(0);
    let tied: Vec<u8> = tallies
        .iter()
        .filter(|&&(_, n)| n == most)
        .map(|&(f, _)| f)
        .collect();
    let face = tied.choose(rng).copied().unwrap_or(1);
    Bid::new(count, face)
}
