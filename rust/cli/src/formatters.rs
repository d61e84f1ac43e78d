//! Text formatting for table events.
//!
//! Pure functions from engine values to display strings, kept apart from
//! the command loops so they can be tested without a game in progress.

use liarsdice_engine::player::{Action, Player, PlayerId};
use liarsdice_engine::resolve::Outcome;

/// Formats a player's action for the table log.
///
/// ```rust
/// use liarsdice_cli::formatters::format_action;
/// use liarsdice_engine::player::Action;
///
/// assert_eq!(format_action(&Action::Bid { count: 3, face: 4 }), "bids 3 x 4s");
/// assert_eq!(format_action(&Action::Challenge), "calls liar!");
/// ```
pub fn format_action(action: &Action) -> String {
    match action {
        Action::Bid { count, face } => format!("bids {} x {}s", count, face),
        Action::Challenge => "calls liar!".to_string(),
    }
}

/// Name of the player in seat `id`, or the seat number if unknown.
pub fn seat_name(players: &[Player], id: PlayerId) -> String {
    players
        .iter()
        .find(|p| p.id() == id)
        .map(|p| p.name().to_string())
        .unwrap_or_else(|| format!("Player {}", id))
}

/// One line per cup, as revealed when a bid is challenged.
pub fn format_reveal(cups: &[(String, Vec<u8>)]) -> Vec<String> {
    cups.iter()
        .map(|(name, faces)| {
            let dice: Vec<String> = faces.iter().map(|f| f.to_string()).collect();
            format!("  {:<10} [{}]", name, dice.join(" "))
        })
        .collect()
}

/// Summary of a resolved challenge.
pub fn format_outcome(players: &[Player], outcome: &Outcome) -> String {
    let v = &outcome.verdict;
    let verdict = if v.holds { "stands" } else { "was a lie" };
    let mut line = format!(
        "There are {} dice showing {}; the bid of {} {}. {} loses a die.",
        v.counted,
        v.bid.face,
        v.bid,
        verdict,
        seat_name(players, v.loser)
    );
    if outcome.loser_eliminated {
        line.push_str(&format!(" {} is out!", seat_name(players, v.loser)));
    }
    line
}
