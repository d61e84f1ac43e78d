use serde::{Deserialize, Serialize};

use crate::dice::is_valid_face;
use crate::errors::GameError;

/// A public claim that at least `count` dice on the table show `face`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Bid {
    pub count: u32,
    pub face: u8,
}

impl Bid {
    pub fn new(count: u32, face: u8) -> Self {
        Self { count, face }
    }

    /// Whether this bid may follow `current`.
    ///
    /// The face dominates: any higher face beats the current bid whatever its
    /// count, the same face needs a strictly larger count, and a lower face
    /// never beats it.
    pub fn escalates(&self, current: &Bid) -> bool {
        self.face > current.face || (self.face == current.face && self.count > current.count)
    }
}

impl std::fmt::Display for Bid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {}s", self.count, self.face)
    }
}

/// Validates a proposed bid against the dice in play and the standing bid.
///
/// Checks run in a fixed order and the first failure is reported:
///
/// 1. `count` must be between 1 and `total_dice` ([`GameError::InvalidCount`])
/// 2. `face` must be between 1 and 6 ([`GameError::InvalidFace`])
/// 3. if a bid stands, the proposal must escalate it ([`GameError::NotAnEscalation`])
///
/// An opening bid (no `current`) only has to pass the first two checks.
///
/// # Examples
///
/// ```
/// use liarsdice_engine::errors::GameError;
/// use liarsdice_engine::rules::{validate_bid, Bid};
///
/// let current = Bid::new(4, 4);
/// // a higher face wins even with a lower count
/// assert_eq!(validate_bid(15, Some(&current), 3, 5), Ok(Bid::new(3, 5)));
/// // repeating the standing bid is not an escalation
/// assert!(matches!(
///     validate_bid(15, Some(&current), 4, 4),
///     Err(GameError::NotAnEscalation { .. })
/// ));
/// ```
pub fn validate_bid(
    total_dice: u32,
    current: Option<&Bid>,
    count: u32,
    face: u8,
) -> Result<Bid, GameError> {
    if count == 0 || count > total_dice {
        return Err(GameError::InvalidCount {
            count,
            total: total_dice,
        });
    }
    if !is_valid_face(face) {
        return Err(GameError::InvalidFace { face });
    }
    let proposed = Bid::new(count, face);
    match current {
        Some(current) if !proposed.escalates(current) => Err(GameError::NotAnEscalation {
            proposed,
            current: *current,
        }),
        _ => Ok(proposed),
    }
}
