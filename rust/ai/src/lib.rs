//! # liarsdice-ai: computer players for Liar's Dice
//!
//! Monte-Carlo estimation of bids over hidden dice, candidate raise
//! generation, and the act-or-challenge policy that ties them together.
//!
//! ## Core Components
//!
//! - [`Opponent`] - Trait every computer player implements
//! - [`probability`] - Monte-Carlo estimate that a bid holds
//! - [`candidates`] - Legal raises over the standing bid
//! - [`policy`] - The act-or-challenge decision state machine
//! - [`agent`] - Risk profiles and the [`agent::ProbabilisticAI`] player
//! - [`create_ai`] - Factory building a player from a profile name
//!
//! ## Quick Start
//!
//! ```rust
//! use liarsdice_ai::create_ai;
//! use liarsdice_engine::engine::{Engine, GameConfig};
//!
//! let mut engine = Engine::new(GameConfig::default(), vec!["Ann", "Bob", "Cy"], Some(42)).unwrap();
//! let mut ai = create_ai("gambler", 7).unwrap();
//!
//! let player = engine.current_player().unwrap();
//! let action = ai.decide(&engine.view(player).unwrap()).unwrap();
//! engine.apply_action(player, action).unwrap();
//! ```

use liarsdice_engine::engine::TableView;
use liarsdice_engine::errors::GameError;
use liarsdice_engine::player::Action;
use thiserror::Error;

pub mod agent;
pub mod candidates;
pub mod policy;
pub mod probability;

/// Interface for computer players.
///
/// # Example Implementation
///
/// ```rust
/// use liarsdice_ai::Opponent;
/// use liarsdice_engine::engine::TableView;
/// use liarsdice_engine::errors::GameError;
/// use liarsdice_engine::player::Action;
///
/// /// Always calls liar once someone has bid, otherwise opens with one die.
/// struct Doubter;
///
/// impl Opponent for Doubter {
///     fn decide(&mut self, view: &TableView<'_>) -> Result<Action, GameError> {
///         Ok(match view.ledger.current() {
///             Some(_) => Action::Challenge,
///             None => Action::Bid { count: 1, face: 6 },
///         })
///     }
///
///     fn name(&self) -> &str {
///         "Doubter"
///     }
/// }
/// ```
pub trait Opponent: Send {
    /// Chooses the next action from what this player can see.
    fn decide(&mut self, view: &TableView<'_>) -> Result<Action, GameError>;

    /// Display name of this player.
    fn name(&self) -> &str;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown AI profile: {0}")]
pub struct UnknownProfile(pub String);

/// Builds a computer player from a profile name (`gambler`, `lucky`,
/// `skeptic` or `random`), seeding its RNG with `seed`.
///
/// ```rust
/// use liarsdice_ai::create_ai;
///
/// let ai = create_ai("lucky", 1).unwrap();
/// assert_eq!(ai.name(), "Lucky");
/// assert!(create_ai("psychic", 1).is_err());
/// ```
pub fn create_ai(ai_type: &str, seed: u64) -> Result<Box<dyn Opponent>, UnknownProfile> {
    let profile =
        agent::Profile::parse(ai_type).ok_or_else(|| UnknownProfile(ai_type.to_string()))?;
    Ok(Box::new(agent::ProbabilisticAI::new(profile, seed)))
}
