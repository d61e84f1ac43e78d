use rand::Rng;
use serde::{Deserialize, Serialize};

/// Lowest face printed on a die.
pub const MIN_FACE: u8 = 1;
/// Highest face printed on a die.
pub const MAX_FACE: u8 = 6;
/// Face that counts as a joker when wild ones are enabled.
pub const WILD_FACE: u8 = 1;

pub fn all_faces() -> [u8; 6] {
    [1, 2, 3, 4, 5, 6]
}

pub fn is_valid_face(face: u8) -> bool {
    (MIN_FACE..=MAX_FACE).contains(&face)
}

/// Whether a die showing `value` counts toward a bid on `face`.
///
/// With `wild` set, ones match every face except a bid on ones itself,
/// which only ever counts real ones.
pub fn counts_toward(value: u8, face: u8, wild: bool) -> bool {
    value == face || (wild && face != WILD_FACE && value == WILD_FACE)
}

/// A single six-sided die. Starts unrolled; only [`Die::roll`] gives it a value.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Die {
    value: Option<u8>,
}

impl Die {
    pub fn new() -> Self {
        Self { value: None }
    }

    /// A die already showing `face`, or `None` if the face is off the die.
    pub fn showing(face: u8) -> Option<Self> {
        is_valid_face(face).then_some(Self { value: Some(face) })
    }

    pub fn value(&self) -> Option<u8> {
        self.value
    }

    pub fn roll<R: Rng + ?Sized>(&mut self, rng: &mut R) -> u8 {
        let v = rng.random_range(MIN_FACE..=MAX_FACE);
        self.value = Some(v);
        v
    }
}
