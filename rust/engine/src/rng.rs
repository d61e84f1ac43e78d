use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// RNG used everywhere dice are rolled or simulated. Seeding it makes a whole
/// game, including every computer decision, reproducible.
pub type GameRng = ChaCha20Rng;

/// Seed used when the caller does not care about reproducibility.
pub const DEFAULT_SEED: u64 = 0xA1A2_A3A4;

pub fn seeded(seed: u64) -> GameRng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Picks a fresh seed from the thread RNG when none was supplied, so the
/// caller can still print it and replay the run later.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}
