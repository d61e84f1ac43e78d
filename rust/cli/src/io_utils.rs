//! Input helpers for interactive commands.

use std::io::BufRead;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Whitespace is trimmed. Returns `None` on EOF or read errors, which the
/// interactive loop treats as the player leaving the table.
///
/// ```rust
/// use std::io::Cursor;
/// # use liarsdice_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  3 4 \n");
/// assert_eq!(read_stdin_line(&mut input).as_deref(), Some("3 4"));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}
