use tracing::debug;

use crate::errors::GameError;
use crate::player::PlayerId;
use crate::rules::{validate_bid, Bid};

/// Authoritative record of the bidding for one game.
///
/// `total_dice` is fixed when the game starts and only ever goes down as dice
/// are lost. The current bid, the one it replaced and the player who made it
/// are cleared at the start of every betting cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BidLedger {
    total_dice: u32,
    current: Option<Bid>,
    previous: Option<Bid>,
    owner: Option<PlayerId>,
}

impl BidLedger {
    pub fn new(total_dice: u32) -> Self {
        Self {
            total_dice,
            current: None,
            previous: None,
            owner: None,
        }
    }

    pub fn total_dice(&self) -> u32 {
        self.total_dice
    }
    pub fn current(&self) -> Option<&Bid> {
        self.current.as_ref()
    }
    pub fn previous(&self) -> Option<&Bid> {
        self.previous.as_ref()
    }
    /// The player who placed the current bid.
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    /// Tries to place a bid for `player`.
    ///
    /// On success the standing bid moves to `previous` and the new one becomes
    /// current. On failure nothing changes and the reason is returned so the
    /// same player can try again.
    pub fn propose(&mut self, count: u32, face: u8, player: PlayerId) -> Result<Bid, GameError> {
        match validate_bid(self.total_dice, self.current.as_ref(), count, face) {
            Ok(bid) => {
                self.previous = self.current.replace(bid);
                self.owner = Some(player);
                debug!(%player, %bid, previous = ?self.previous, "bid accepted");
                Ok(bid)
            }
            Err(e) => {
                debug!(%player, count, face, error = %e, "bid rejected");
                Err(e)
            }
        }
    }

    pub fn reset_for_new_cycle(&mut self) {
        self.current = None;
        self.previous = None;
        self.owner = None;
    }

    /// Removes `n` dice from play. Called once for every die lost.
    pub fn decrease_total(&mut self, n: u32) -> Result<(), GameError> {
        self.total_dice = self.total_dice.checked_sub(n).ok_or_else(|| {
            GameError::EngineMisuse(format!(
                "cannot remove {} dice when only {} remain",
                n, self.total_dice
            ))
        })?;
        Ok(())
    }
}
