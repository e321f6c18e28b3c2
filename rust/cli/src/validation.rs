//! Interpretation of lines typed during a practice session.
//!
//! Guess syntax itself is checked by the engine; this module only separates
//! guesses from session commands.

/// What a line typed at the practice prompt asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseResult {
    /// Text to check against the nuts
    Guess(String),
    /// User entered the quit command (q, any case)
    Quit,
    /// Nothing but whitespace
    Empty,
}

/// Classify one line of practice input.
///
/// # Example
///
/// ```rust
/// # use flopnuts_cli::validation::{parse_practice_input, ParseResult};
/// assert_eq!(parse_practice_input(" Q "), ParseResult::Quit);
/// assert_eq!(parse_practice_input("  "), ParseResult::Empty);
/// assert_eq!(
///     parse_practice_input("KQs"),
///     ParseResult::Guess("KQs".to_string())
/// );
/// ```
pub fn parse_practice_input(input: &str) -> ParseResult {
    let input = input.trim();
    if input.is_empty() {
        ParseResult::Empty
    } else if is_quit_command(input) {
        ParseResult::Quit
    } else {
        ParseResult::Guess(input.to_string())
    }
}

pub fn is_quit_command(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("q")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_is_case_insensitive_and_trimmed() {
        assert!(is_quit_command("q"));
        assert!(is_quit_command("Q"));
        assert!(is_quit_command("  q  "));
        assert!(is_quit_command("\tQ\n"));
    }

    #[test]
    fn test_non_quit_commands() {
        assert!(!is_quit_command("quit"));
        assert!(!is_quit_command("AA"));
        assert!(!is_quit_command("KQs"));
        assert!(!is_quit_command(""));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_practice_input(""), ParseResult::Empty);
        assert_eq!(parse_practice_input(" \t\n"), ParseResult::Empty);
    }

    #[test]
    fn test_guess_is_trimmed() {
        assert_eq!(
            parse_practice_input("  AhQh \n"),
            ParseResult::Guess("AhQh".to_string())
        );
    }
}
