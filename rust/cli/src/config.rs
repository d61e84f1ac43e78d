use liarsdice_ai::agent::Profile;
use liarsdice_engine::engine::{
    GameConfig, MAX_DICE_PER_PLAYER, MAX_PLAYERS, MIN_DICE_PER_PLAYER, MIN_PLAYERS,
};
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "LIARSDICE_CONFIG";
pub const SEED_ENV: &str = "LIARSDICE_SEED";
pub const PLAYERS_ENV: &str = "LIARSDICE_PLAYERS";
pub const DICE_ENV: &str = "LIARSDICE_DICE";
pub const WILD_ENV: &str = "LIARSDICE_WILD";
pub const PROFILES_ENV: &str = "LIARSDICE_PROFILES";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub players: usize,
    pub dice_per_player: usize,
    pub wild_ones: bool,
    pub seed: Option<u64>,
    /// Profiles handed out to computer seats in order, wrapping around
    pub ai_profiles: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub players: ValueSource,
    pub dice_per_player: ValueSource,
    pub wild_ones: ValueSource,
    pub seed: ValueSource,
    pub ai_profiles: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            players: ValueSource::Default,
            dice_per_player: ValueSource::Default,
            wild_ones: ValueSource::Default,
            seed: ValueSource::Default,
            ai_profiles: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: 3,
            dice_per_player: 5,
            wild_ones: false,
            seed: None,
            ai_profiles: vec!["gambler".into(), "lucky".into(), "skeptic".into()],
        }
    }
}

impl Config {
    /// Table settings for the engine, with command-line overrides applied.
    pub fn game_config(
        &self,
        players: Option<usize>,
        dice: Option<usize>,
        wild: bool,
    ) -> GameConfig {
        GameConfig {
            players: players.unwrap_or(self.players),
            dice_per_player: dice.unwrap_or(self.dice_per_player),
            wild_ones: wild || self.wild_ones,
        }
    }

    /// Profile for the `index`-th computer seat.
    pub fn profile_for(&self, index: usize) -> &str {
        if self.ai_profiles.is_empty() {
            return "lucky";
        }
        &self.ai_profiles[index % self.ai_profiles.len()]
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.dice_per_player {
            cfg.dice_per_player = v;
            sources.dice_per_player = ValueSource::File;
        }
        if let Some(v) = f.wild_ones {
            cfg.wild_ones = v;
            sources.wild_ones = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.ai_profiles {
            cfg.ai_profiles = v;
            sources.ai_profiles = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(players) = std::env::var(PLAYERS_ENV)
        && !players.is_empty()
    {
        cfg.players = players
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid players: {}", players)))?;
        sources.players = ValueSource::Env;
    }
    if let Ok(dice) = std::env::var(DICE_ENV)
        && !dice.is_empty()
    {
        cfg.dice_per_player = dice
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid dice: {}", dice)))?;
        sources.dice_per_player = ValueSource::Env;
    }
    if let Ok(wild) = std::env::var(WILD_ENV)
        && !wild.is_empty()
    {
        cfg.wild_ones = parse_bool(&wild)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid wild: {}", wild)))?;
        sources.wild_ones = ValueSource::Env;
    }
    if let Ok(profiles) = std::env::var(PROFILES_ENV)
        && !profiles.is_empty()
    {
        cfg.ai_profiles = profiles
            .split(',')
            .map(|p| p.trim().to_ascii_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
        sources.ai_profiles = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    players: Option<usize>,
    #[serde(default)]
    dice_per_player: Option<usize>,
    #[serde(default)]
    wild_ones: Option<bool>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    ai_profiles: Option<Vec<String>>,
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&cfg.players) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: players must be within {}..={}",
            MIN_PLAYERS, MAX_PLAYERS
        )));
    }
    if !(MIN_DICE_PER_PLAYER..=MAX_DICE_PER_PLAYER).contains(&cfg.dice_per_player) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: dice_per_player must be within {}..={}",
            MIN_DICE_PER_PLAYER, MAX_DICE_PER_PLAYER
        )));
    }
    if cfg.ai_profiles.is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: ai_profiles must name at least one profile".into(),
        ));
    }
    if let Some(bad) = cfg
        .ai_profiles
        .iter()
        .find(|p| Profile::parse(p).is_none())
    {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown AI profile '{}'",
            bad
        )));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
