//! Small helpers for consistent terminal output.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Writes a prompt without a trailing newline and flushes it.
pub fn prompt(out: &mut dyn Write, text: &str) -> std::io::Result<()> {
    write!(out, "{}", text)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_has_no_newline() {
        let mut out = Vec::new();
        prompt(&mut out, "> ").unwrap();
        assert_eq!(out, b"> ");
    }

    #[test]
    fn errors_are_prefixed() {
        let mut err = Vec::new();
        write_error(&mut err, "bad bid").unwrap();
        assert_eq!(String::from_utf8(err).unwrap(), "Error: bad bid\n");
    }
}
