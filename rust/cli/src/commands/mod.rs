//! Command handlers, one module per subcommand.
//!
//! Each module exposes `handle_<command>_command(...) -> Result<(), CliError>`
//! taking its output streams as `&mut dyn Write`, so tests can drive the
//! handlers with in-memory buffers.

pub mod cfg;
pub mod odds;
pub mod play;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use odds::{OddsArgs, handle_odds_command};
pub use play::{PlayArgs, handle_play_command};
pub use sim::{SimArgs, handle_sim_command};
