use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::dice::{counts_toward, Die};
use crate::errors::GameError;

/// A player's cup of dice.
///
/// The dice count is always the length of the backing vector, so it can never
/// drift from the number of dice actually held.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    dice: Vec<Die>,
}

impl Hand {
    /// Creates a cup holding `dice_count` unrolled dice.
    pub fn new(dice_count: usize) -> Self {
        Self {
            dice: vec![Die::new(); dice_count],
        }
    }

    /// Builds a hand that already shows the given faces, e.g. a hand typed in
    /// by a user or a revealed position in a test.
    pub fn from_faces(faces: &[u8]) -> Result<Self, GameError> {
        let dice = faces
            .iter()
            .map(|&face| Die::showing(face).ok_or(GameError::InvalidFace { face }))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { dice })
    }

    pub fn dice_count(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Face values of every rolled die. Unrolled dice are skipped.
    pub fn faces(&self) -> Vec<u8> {
        self.dice.iter().filter_map(Die::value).collect()
    }

    /// Rolls every die again; the number of dice is unchanged.
    pub fn reroll<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for die in &mut self.dice {
            die.roll(rng);
        }
    }

    /// Drops one die. Returns `false` once the cup is empty, i.e. the owner
    /// is out of the game.
    pub fn lose_one(&mut self) -> bool {
        self.dice.pop();
        !self.dice.is_empty()
    }

    /// Number of dice in this hand that count toward a bid on `face`.
    pub fn count_matching(&self, face: u8, wild: bool) -> u32 {
        self.dice
            .iter()
            .filter_map(Die::value)
            .filter(|&v| counts_toward(v, face, wild))
            .count() as u32
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .dice
            .iter()
            .map(|d| match d.value() {
                Some(v) => v.to_string(),
                None => "?".to_string(),
            })
            .collect();
        write!(f, "[{}]", parts.join(" "))
    }
}
