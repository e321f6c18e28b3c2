//! UI helper functions for terminal output formatting.
//!
//! This module provides utility functions for consistent user interface output
//! across CLI commands, starting with the error line printed by [`crate::run`].

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_prefix() {
        let mut err = Vec::new();
        write_error(&mut err, "bad flop").unwrap();
        assert_eq!(String::from_utf8(err).unwrap(), "Error: bad flop\n");
    }
}
