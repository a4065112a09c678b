//! Chat command parser.
//!
//! Parses prefixed commands (`!suggestname short`) out of PRIVMSG text into
//! typed [`ParsedCommand`] values that the event handler can act on.

use crate::namegen::NameLength;

/// A parsed chat command.
#[derive(Debug, PartialEq)]
pub enum ParsedCommand {
    /// `suggestname [short|medium|long]`; a missing length means "pick one
    /// at random".
    SuggestName { length: Option<NameLength> },
    Help,
}

/// Parse a message into a [`ParsedCommand`].
///
/// Returns `None` for ordinary chatter, unknown commands, and malformed
/// arguments; an invalid length is rejected here and never reaches the
/// suggestion pipeline. Command words are case-insensitive.
pub fn parse_command(prefix: &str, text: &str) -> Option<ParsedCommand> {
    let rest = text.trim().strip_prefix(prefix)?;
    let mut parts = rest.split_whitespace();
    let cmd = parts.next()?.to_lowercase();

    match cmd.as_str() {
        "suggestname" => {
            let length = match parts.next() {
                None => None,
                Some(arg) => Some(arg.parse().ok()?),
            };
            if parts.next().is_some() {
                return None;
            }
            Some(ParsedCommand::SuggestName { length })
        }
        "help" => Some(ParsedCommand::Help),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_command_picks_random_length() {
        assert_eq!(
            parse_command("!", "!suggestname"),
            Some(ParsedCommand::SuggestName { length: None })
        );
    }

    #[test]
    fn test_explicit_length() {
        assert_eq!(
            parse_command("!", "!suggestname short"),
            Some(ParsedCommand::SuggestName {
                length: Some(NameLength::Short)
            })
        );
        assert_eq!(
            parse_command("!", "!suggestname LONG"),
            Some(ParsedCommand::SuggestName {
                length: Some(NameLength::Long)
            })
        );
    }

    #[test]
    fn test_invalid_length_rejected_before_pipeline() {
        assert_eq!(parse_command("!", "!suggestname tiny"), None);
        assert_eq!(parse_command("!", "!suggestname short extra"), None);
    }

    #[test]
    fn test_command_word_case_insensitive() {
        assert_eq!(
            parse_command("!", "!SuggestName medium"),
            Some(ParsedCommand::SuggestName {
                length: Some(NameLength::Medium)
            })
        );
    }

    #[test]
    fn test_ordinary_chatter_ignored() {
        assert_eq!(parse_command("!", "hello there"), None);
        assert_eq!(parse_command("!", "!unknowncommand"), None);
        assert_eq!(parse_command("!", ""), None);
    }

    #[test]
    fn test_custom_prefix() {
        assert_eq!(
            parse_command(".", ".suggestname"),
            Some(ParsedCommand::SuggestName { length: None })
        );
        assert_eq!(parse_command(".", "!suggestname"), None);
    }

    #[test]
    fn test_help() {
        assert_eq!(parse_command("!", "!help"), Some(ParsedCommand::Help));
    }
}
