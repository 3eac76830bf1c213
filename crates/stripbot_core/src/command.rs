//! Trigger command parsing.
//!
//! Scans comment bodies for the literal `!xkcd` trigger token, optionally
//! followed by whitespace and a comic number. Only the first match in a body
//! is significant.

use regex::Regex;

/// A parsed trigger command extracted from a comment body.
///
/// `number` holds the raw digit run captured after the trigger token, or
/// `None` when no digits were supplied (a request for the latest comic).
/// The capture is digit-only: a leading minus sign is not part of the
/// capture, so `!xkcd -5` yields `Some("5")`. Validation happens downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerCommand {
    /// Raw captured digits, if any were supplied
    pub number: Option<String>,
}

/// Compiled matcher for the `!xkcd` trigger token.
///
/// Construct once and reuse; the regex is compiled in [`TriggerParser::new`].
///
/// # Examples
///
/// ```
/// use stripbot_core::TriggerParser;
///
/// let parser = TriggerParser::new();
///
/// let cmd = parser.parse("please !xkcd 353").unwrap();
/// assert_eq!(cmd.number.as_deref(), Some("353"));
///
/// let cmd = parser.parse("!XKCD").unwrap();
/// assert_eq!(cmd.number, None);
///
/// assert!(parser.parse("nothing to see here").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct TriggerParser {
    pattern: Regex,
}

impl TriggerParser {
    /// Create a parser for the `!xkcd` trigger.
    pub fn new() -> Self {
        // Case-insensitive; digit-only capture. An optional sign is skipped
        // outside the capture, so signs never reach the validator.
        let pattern = Regex::new(r"(?i)!xkcd\s*-?(\d*)").expect("trigger pattern is valid");
        Self { pattern }
    }

    /// Scan `body` for the trigger token.
    ///
    /// Returns `None` when the trigger is absent. Only the first match is
    /// considered; later occurrences in the same body are ignored.
    pub fn parse(&self, body: &str) -> Option<TriggerCommand> {
        let captures = self.pattern.captures(body)?;
        let digits = captures.get(1).map(|m| m.as_str()).unwrap_or("");
        let number = if digits.is_empty() {
            None
        } else {
            Some(digits.to_string())
        };
        Some(TriggerCommand { number })
    }
}

impl Default for TriggerParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_absent() {
        let parser = TriggerParser::new();
        assert!(parser.parse("just talking about comics").is_none());
        assert!(parser.parse("").is_none());
        assert!(parser.parse("xkcd 100").is_none());
    }

    #[test]
    fn trigger_case_insensitive() {
        let parser = TriggerParser::new();
        assert!(parser.parse("!XKCD 12").is_some());
        assert!(parser.parse("!XkCd").is_some());
    }

    #[test]
    fn first_match_wins() {
        let parser = TriggerParser::new();
        let cmd = parser.parse("!xkcd 1 and also !xkcd 2").unwrap();
        assert_eq!(cmd.number.as_deref(), Some("1"));
    }

    #[test]
    fn negative_sign_not_captured() {
        let parser = TriggerParser::new();
        let cmd = parser.parse("!xkcd -5").unwrap();
        assert_eq!(cmd.number.as_deref(), Some("5"));
    }

    #[test]
    fn no_digits_means_latest() {
        let parser = TriggerParser::new();
        let cmd = parser.parse("hey !xkcd please").unwrap();
        assert_eq!(cmd.number, None);
    }
}
