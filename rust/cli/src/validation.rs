//! Input parsing for interactive play and command arguments.
//!
//! Parsing only checks shape (numbers where numbers belong). Whether a bid
//! is legal is the ledger's call, so the player sees the same rule messages
//! the engine produces.

use liarsdice_engine::dice::is_valid_face;
use liarsdice_engine::player::Action;

/// Result type for parsing user input into player actions.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid player action parsed from input
    Action(Action),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse one line of table input.
///
/// Accepted forms (case-insensitive):
/// - `bid <count> <face>` or just `<count> <face>`
/// - `liar`, `l` or `challenge`
/// - `q` or `quit`
///
/// ```rust
/// # use liarsdice_cli::validation::{parse_player_action, ParseResult};
/// use liarsdice_engine::player::Action;
///
/// assert_eq!(
///     parse_player_action("bid 3 5"),
///     ParseResult::Action(Action::Bid { count: 3, face: 5 })
/// );
/// assert_eq!(
///     parse_player_action("LIAR"),
///     ParseResult::Action(Action::Challenge)
/// );
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
/// assert!(matches!(parse_player_action("fold"), ParseResult::Invalid(_)));
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    match parts[0] {
        "q" | "quit" => ParseResult::Quit,
        "liar" | "l" | "challenge" => ParseResult::Action(Action::Challenge),
        "bid" | "b" => parse_bid(&parts[1..]),
        _ if parts[0].parse::<u32>().is_ok() => parse_bid(&parts),
        other => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: bid <count> <face>, <count> <face>, liar, q",
            other
        )),
    }
}

fn parse_bid(parts: &[&str]) -> ParseResult {
    let [count, face] = parts else {
        return ParseResult::Invalid(
            "A bid needs a count and a face (e.g., 'bid 3 5')".to_string(),
        );
    };
    let Ok(count) = count.parse::<u32>() else {
        return ParseResult::Invalid(format!("Invalid count '{}'", count));
    };
    let Ok(face) = face.parse::<u8>() else {
        return ParseResult::Invalid(format!("Invalid face '{}'", face));
    };
    ParseResult::Action(Action::Bid { count, face })
}

/// Parses a comma or space separated list of die faces such as `1,4,4,6`.
///
/// ```rust
/// # use liarsdice_cli::validation::parse_hand;
/// assert_eq!(parse_hand("1,4, 4 6"), Ok(vec![1, 4, 4, 6]));
/// assert!(parse_hand("1,7").is_err());
/// assert!(parse_hand("").is_err());
/// ```
pub fn parse_hand(input: &str) -> Result<Vec<u8>, String> {
    let faces = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| match s.parse::<u8>() {
            Ok(face) if is_valid_face(face) => Ok(face),
            _ => Err(format!("'{}' is not a die face (1-6)", s)),
        })
        .collect::<Result<Vec<u8>, String>>()?;
    if faces.is_empty() {
        return Err("hand must contain at least one die".to_string());
    }
    Ok(faces)
}
