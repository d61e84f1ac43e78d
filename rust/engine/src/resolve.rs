//! Challenge resolution: reveal every cup, count the bid face and decide who
//! loses a die.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::GameError;
use crate::hand::Hand;
use crate::ledger::BidLedger;
use crate::player::{Player, PlayerId};
use crate::rules::Bid;

/// Result of counting the revealed dice, before anyone loses a die.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// The bid that was challenged
    pub bid: Bid,
    /// Dice on the table that count toward the bid
    pub counted: u32,
    /// Whether the bid was true (`counted >= bid.count`)
    pub holds: bool,
    pub challenger: PlayerId,
    pub bidder: PlayerId,
    pub winner: PlayerId,
    pub loser: PlayerId,
}

/// A verdict after its penalty has been applied.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub verdict: Verdict,
    /// The loser has just lost their last die
    pub loser_eliminated: bool,
}

impl Outcome {
    pub fn winner(&self) -> PlayerId {
        self.verdict.winner
    }
    pub fn loser(&self) -> PlayerId {
        self.verdict.loser
    }
}

/// Counts the dice across `hands` that match `face`, wild ones included when
/// enabled.
pub fn tally<'a, I>(hands: I, face: u8, wild: bool) -> u32
where
    I: IntoIterator<Item = &'a Hand>,
{
    hands
        .into_iter()
        .map(|h| h.count_matching(face, wild))
        .sum()
}

fn find(players: &[Player], id: PlayerId) -> Result<&Player, GameError> {
    players
        .iter()
        .find(|p| p.id() == id)
        .ok_or_else(|| GameError::EngineMisuse(format!("unknown player {}", id)))
}

/// Decides a challenge without touching any state.
///
/// Given the same revealed hands and ledger this always returns the same
/// verdict; no randomness is involved.
pub fn judge(
    players: &[Player],
    ledger: &BidLedger,
    challenger: PlayerId,
    wild: bool,
) -> Result<Verdict, GameError> {
    let bid = *ledger
        .current()
        .ok_or_else(|| GameError::IllegalChallenge("no bid stands".into()))?;
    let bidder = ledger
        .owner()
        .ok_or_else(|| GameError::EngineMisuse("standing bid has no owner".into()))?;
    if challenger == bidder {
        return Err(GameError::IllegalChallenge(
            "a player cannot challenge their own bid".into(),
        ));
    }
    if !find(players, challenger)?.is_active() {
        return Err(GameError::PlayerEliminated(challenger));
    }
    find(players, bidder)?;

    let counted = tally(players.iter().map(Player::hand), bid.face, wild);
    let holds = counted >= bid.count;
    let (winner, loser) = if holds {
        (bidder, challenger)
    } else {
        (challenger, bidder)
    };
    Ok(Verdict {
        bid,
        counted,
        holds,
        challenger,
        bidder,
        winner,
        loser,
    })
}

/// Resolves a challenge: judges it, then takes one die from the loser and
/// removes it from the ledger's total.
///
/// Dice are not re-rolled here; that happens when the next cycle starts.
pub fn resolve(
    players: &mut [Player],
    ledger: &mut BidLedger,
    challenger: PlayerId,
    wild: bool,
) -> Result<Outcome, GameError> {
    let verdict = judge(players, ledger, challenger, wild)?;
    let loser = players
        .iter_mut()
        .find(|p| p.id() == verdict.loser)
        .ok_or_else(|| GameError::EngineMisuse(format!("unknown player {}", verdict.loser)))?;
    if loser.hand().is_empty() {
        return Err(GameError::EngineMisuse(format!(
            "player {} has no die to lose",
            verdict.loser
        )));
    }
    let still_in = loser.hand_mut().lose_one();
    ledger.decrease_total(1)?;

    info!(
        bid = %verdict.bid,
        counted = verdict.counted,
        holds = verdict.holds,
        winner = %verdict.winner,
        loser = %verdict.loser,
        eliminated = !still_in,
        "challenge resolved"
    );
    Ok(Outcome {
        verdict,
        loser_eliminated: !still_in,
    })
}
