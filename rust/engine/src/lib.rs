//! # liarsdice-engine: Liar's Dice rules core
//!
//! Dice, cups, the bid ledger and challenge resolution for Liar's Dice, plus
//! a small engine that runs a whole game. Every random draw goes through a
//! seeded ChaCha20 RNG so games can be replayed exactly.
//!
//! ## Core Modules
//!
//! - [`dice`] - A single die and the face-matching rule (wild ones)
//! - [`hand`] - A player's cup of dice
//! - [`rules`] - Bids and the escalation order
//! - [`ledger`] - The bid ledger: current/previous bid and dice in play
//! - [`resolve`] - Counting the revealed dice when a bid is challenged
//! - [`player`] - Player identity and actions
//! - [`game`] - Turn rotation over players still in the game
//! - [`engine`] - Game orchestration
//! - [`rng`] - Seeded RNG helpers
//! - [`errors`] - Error types for game operations
//!
//! ## Placing bids
//!
//! ```rust
//! use liarsdice_engine::ledger::BidLedger;
//! use liarsdice_engine::player::PlayerId;
//!
//! let mut ledger = BidLedger::new(15);
//! ledger.propose(4, 4, PlayerId(0)).unwrap();
//!
//! // a higher face always escalates, even with fewer dice
//! ledger.propose(3, 5, PlayerId(1)).unwrap();
//!
//! // a lower face never does
//! assert!(ledger.propose(9, 2, PlayerId(2)).is_err());
//! ```
//!
//! ## Resolving a challenge
//!
//! ```rust
//! use liarsdice_engine::hand::Hand;
//! use liarsdice_engine::resolve::tally;
//!
//! let hands = [
//!     Hand::from_faces(&[3, 3, 1]).unwrap(),
//!     Hand::from_faces(&[3, 1, 6]).unwrap(),
//! ];
//! // three 3s and two wild 1s
//! assert_eq!(tally(&hands, 3, true), 5);
//! assert_eq!(tally(&hands, 3, false), 3);
//! ```

pub mod dice;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod ledger;
pub mod player;
pub mod resolve;
pub mod rng;
pub mod rules;
