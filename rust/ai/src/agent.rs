//! Computer players built on the Monte-Carlo decision policy.

use liarsdice_engine::engine::TableView;
use liarsdice_engine::errors::GameError;
use liarsdice_engine::player::Action;
use liarsdice_engine::rng::{GameRng, seeded};
use rand::Rng;

use crate::Opponent;
use crate::policy::{PolicyParams, decide_with};

/// Named risk profiles. The threshold is the plausibility the standing bid
/// must exceed before the agent raises over it rather than calling liar; it
/// also caps how risky a raise may look (`1 - threshold`).
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Profile {
    /// Rarely calls liar, only raises to bids that look safe
    Gambler,
    /// Middle of the road
    Lucky,
    /// Calls liar readily, raises boldly
    Skeptic,
    /// Threshold drawn at random when the agent is created
    Random,
}

impl Profile {
    pub fn all() -> [Profile; 4] {
        [
            Profile::Gambler,
            Profile::Lucky,
            Profile::Skeptic,
            Profile::Random,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Gambler => "gambler",
            Profile::Lucky => "lucky",
            Profile::Skeptic => "skeptic",
            Profile::Random => "random",
        }
    }

    pub fn parse(name: &str) -> Option<Profile> {
        Profile::all()
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(name.trim()))
    }

    fn fixed_threshold(&self) -> Option<f64> {
        match self {
            Profile::Gambler => Some(0.3),
            Profile::Lucky => Some(0.45),
            Profile::Skeptic => Some(0.6),
            Profile::Random => None,
        }
    }
}

/// A computer player: a risk threshold, a simulation budget and its own
/// seeded RNG, so its choices are reproducible.
#[derive(Debug, Clone)]
pub struct ProbabilisticAI {
    name: String,
    threshold: f64,
    params: PolicyParams,
    rng: GameRng,
}

impl ProbabilisticAI {
    pub fn new(profile: Profile, seed: u64) -> Self {
        let mut rng = seeded(seed);
        let threshold = profile
            .fixed_threshold()
            .unwrap_or_else(|| rng.random_range(0.2..=0.7));
        let mut name = profile.as_str().to_string();
        if let Some(first) = name.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        Self {
            name,
            threshold,
            params: PolicyParams::default(),
            rng,
        }
    }

    pub fn with_threshold(
        name: impl Into<String>,
        threshold: f64,
        seed: u64,
    ) -> Result<Self, GameError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(GameError::EngineMisuse(format!(
                "threshold must be within [0, 1], got {}",
                threshold
            )));
        }
        Ok(Self {
            name: name.into(),
            threshold,
            params: PolicyParams::default(),
            rng: seeded(seed),
        })
    }

    /// Overrides the simulation budget, e.g. to trade precision for speed.
    pub fn with_params(mut self, params: PolicyParams) -> Self {
        self.params = params;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Opponent for ProbabilisticAI {
    fn decide(&mut self, view: &TableView<'_>) -> Result<Action, GameError> {
        let decision = decide_with(
            &self.params,
            view.ledger,
            view.hand,
            view.wild_ones,
            self.threshold,
            &mut self.rng,
        )?;
        Ok(decision.action)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
