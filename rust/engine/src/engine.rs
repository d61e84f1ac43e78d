use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::GameError;
use crate::game::TurnOrder;
use crate::hand::Hand;
use crate::ledger::BidLedger;
use crate::player::{Action, Player, PlayerId};
use crate::resolve::{resolve, Outcome};
use crate::rng::{seeded, GameRng, DEFAULT_SEED};
use crate::rules::Bid;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 6;
pub const MIN_DICE_PER_PLAYER: usize = 2;
pub const MAX_DICE_PER_PLAYER: usize = 5;

/// Table setup for one game.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub players: usize,
    pub dice_per_player: usize,
    /// Ones count as every other face (except in bids on ones)
    pub wild_ones: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: 3,
            dice_per_player: 5,
            wild_ones: false,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.players) {
            return Err(GameError::EngineMisuse(format!(
                "players must be between {} and {}, got {}",
                MIN_PLAYERS, MAX_PLAYERS, self.players
            )));
        }
        if !(MIN_DICE_PER_PLAYER..=MAX_DICE_PER_PLAYER).contains(&self.dice_per_player) {
            return Err(GameError::EngineMisuse(format!(
                "dice per player must be between {} and {}, got {}",
                MIN_DICE_PER_PLAYER, MAX_DICE_PER_PLAYER, self.dice_per_player
            )));
        }
        Ok(())
    }

    pub fn total_dice(&self) -> u32 {
        (self.players * self.dice_per_player) as u32
    }
}

/// What happened when an action was applied.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ActionResult {
    BidPlaced(Bid),
    Resolved(Outcome),
}

/// Everything a player is allowed to see when it is their turn.
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    pub player: PlayerId,
    pub hand: &'a Hand,
    pub ledger: &'a BidLedger,
    pub wild_ones: bool,
    /// Dice still held by every player in the game, in seating order
    pub dice_counts: Vec<(PlayerId, usize)>,
}

/// Drives a whole game: rolls the cups, routes actions to the ledger or the
/// resolver, and rotates turns until one player is left holding dice.
///
/// # Examples
///
/// ```
/// use liarsdice_engine::engine::{ActionResult, Engine, GameConfig};
/// use liarsdice_engine::player::Action;
///
/// let config = GameConfig { players: 2, dice_per_player: 3, wild_ones: false };
/// let mut engine = Engine::new(config, vec!["Ann", "Bob"], Some(42)).unwrap();
///
/// let first = engine.current_player().unwrap();
/// let result = engine.apply_action(first, Action::Bid { count: 2, face: 3 }).unwrap();
/// assert!(matches!(result, ActionResult::BidPlaced(_)));
///
/// let second = engine.current_player().unwrap();
/// let result = engine.apply_action(second, Action::Challenge).unwrap();
/// assert!(matches!(result, ActionResult::Resolved(_)));
/// assert_eq!(engine.ledger().total_dice(), 5);
/// ```
#[derive(Debug)]
pub struct Engine {
    config: GameConfig,
    players: Vec<Player>,
    ledger: BidLedger,
    turns: TurnOrder,
    rng: GameRng,
    cycle: u32,
}

impl Engine {
    pub fn new<S: Into<String>>(
        config: GameConfig,
        names: Vec<S>,
        seed: Option<u64>,
    ) -> Result<Self, GameError> {
        config.validate()?;
        if names.len() != config.players {
            return Err(GameError::EngineMisuse(format!(
                "expected {} player names, got {}",
                config.players,
                names.len()
            )));
        }
        let players: Vec<Player> = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Player::new(PlayerId(i), name, config.dice_per_player))
            .collect();
        let turns = TurnOrder::new(players.iter().map(Player::id).collect());
        let mut engine = Self {
            config,
            ledger: BidLedger::new(config.total_dice()),
            players,
            turns,
            rng: seeded(seed.unwrap_or(DEFAULT_SEED)),
            cycle: 0,
        };
        engine.start_cycle();
        Ok(engine)
    }

    pub fn wild_ones(&self) -> bool {
        self.config.wild_ones
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn ledger(&self) -> &BidLedger {
        &self.ledger
    }
    /// Number of the current betting cycle, starting at 1.
    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player, GameError> {
        self.players
            .iter()
            .find(|p| p.id() == id)
            .ok_or_else(|| GameError::EngineMisuse(format!("unknown player {}", id)))
    }

    /// Re-rolls every cup still in play and clears the bidding.
    pub fn start_cycle(&mut self) {
        for p in self.players.iter_mut().filter(|p| p.is_active()) {
            p.hand_mut().reroll(&mut self.rng);
        }
        self.ledger.reset_for_new_cycle();
        self.cycle += 1;
        info!(
            cycle = self.cycle,
            total_dice = self.ledger.total_dice(),
            opener = ?self.turns.current(),
            "new betting cycle"
        );
    }

    pub fn is_over(&self) -> bool {
        self.turns.active_count() <= 1
    }

    /// The last player holding dice, once the game is over.
    pub fn winner(&self) -> Option<PlayerId> {
        if self.is_over() {
            self.turns.current()
        } else {
            None
        }
    }

    pub fn current_player(&self) -> Result<PlayerId, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        self.turns.current().ok_or(GameError::GameOver)
    }

    /// Snapshot of the table from `player`'s seat.
    pub fn view(&self, player: PlayerId) -> Result<TableView<'_>, GameError> {
        let me = self.player(player)?;
        Ok(TableView {
            player,
            hand: me.hand(),
            ledger: &self.ledger,
            wild_ones: self.config.wild_ones,
            dice_counts: self
                .players
                .iter()
                .filter(|p| p.is_active())
                .map(|p| (p.id(), p.hand().dice_count()))
                .collect(),
        })
    }

    /// Applies `action` for `player`.
    ///
    /// Rule violations (bad bid, challenge with nothing to challenge, acting
    /// out of turn) leave the game untouched and can be retried. A challenge
    /// ends the cycle: the loser opens the next one, or the seat after them
    /// if they were knocked out.
    pub fn apply_action(
        &mut self,
        player: PlayerId,
        action: Action,
    ) -> Result<ActionResult, GameError> {
        let expected = self.current_player()?;
        if player != expected {
            return Err(GameError::NotPlayersTurn {
                expected,
                actual: player,
            });
        }

        match action {
            Action::Bid { count, face } => {
                let bid = self.ledger.propose(count, face, player)?;
                self.turns.advance();
                Ok(ActionResult::BidPlaced(bid))
            }
            Action::Challenge => {
                let outcome = resolve(
                    &mut self.players,
                    &mut self.ledger,
                    player,
                    self.config.wild_ones,
                )?;
                let loser = outcome.loser();
                self.turns.set_current(loser);
                if outcome.loser_eliminated {
                    self.turns.remove(loser);
                    let remaining = self.turns.active_count();
                    info!(player = %loser, remaining, "player eliminated");
                }
                if self.is_over() {
                    info!(winner = ?self.turns.current(), "game over");
                } else {
                    self.start_cycle();
                }
                Ok(ActionResult::Resolved(outcome))
            }
        }
    }
}
