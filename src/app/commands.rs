//! User slash-command parser.
//!
//! Parses `/command arg ...` lines typed into the command line into typed
//! [`ParsedCommand`] values that the event handler can act on.

use crate::export::ExportKind;
use std::path::PathBuf;

#[derive(Debug, PartialEq)]
pub enum ParsedCommand {
    /// `/export csv|json|report|all`; no argument means all three.
    Export { kinds: Vec<ExportKind> },
    Import { path: PathBuf },
    Help,
    Quit,
}

/// Parse a slash-command string into a [`ParsedCommand`].
///
/// Returns `None` if the input does not start with `/` or is not a recognized
/// command. Command names are case-insensitive.
pub fn parse_command(input: &str) -> Option<ParsedCommand> {
    let input = input.trim();
    let body = input.strip_prefix('/')?;

    let mut parts = body.splitn(2, ' ');
    let cmd = parts.next()?.to_lowercase();
    let rest = parts.next().map(str::trim).unwrap_or("");

    match cmd.as_str() {
        "export" | "e" => {
            let kinds = match rest.to_lowercase().as_str() {
                "" | "all" => ExportKind::ALL.to_vec(),
                "csv" | "excel" => vec![ExportKind::Csv],
                "json" | "backup" => vec![ExportKind::Json],
                "report" | "html" | "pdf" => vec![ExportKind::Report],
                _ => return None,
            };
            Some(ParsedCommand::Export { kinds })
        }
        "import" | "i" => {
            if rest.is_empty() {
                return None;
            }
            Some(ParsedCommand::Import {
                path: crate::config::expand_home(rest),
            })
        }
        "help" | "h" | "?" => Some(ParsedCommand::Help),
        "quit" | "q" | "exit" => Some(ParsedCommand::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_variants() {
        assert_eq!(
            parse_command("/export"),
            Some(ParsedCommand::Export {
                kinds: ExportKind::ALL.to_vec()
            })
        );
        assert_eq!(
            parse_command("/EXPORT csv"),
            Some(ParsedCommand::Export {
                kinds: vec![ExportKind::Csv]
            })
        );
        assert_eq!(
            parse_command("/export backup"),
            Some(ParsedCommand::Export {
                kinds: vec![ExportKind::Json]
            })
        );
        assert_eq!(parse_command("/export xlsx"), None);
    }

    #[test]
    fn import_needs_a_path() {
        assert_eq!(parse_command("/import"), None);
        assert_eq!(
            parse_command("/import /tmp/my backup.json"),
            Some(ParsedCommand::Import {
                path: PathBuf::from("/tmp/my backup.json")
            })
        );
    }

    #[test]
    fn non_commands_are_ignored() {
        assert_eq!(parse_command("export"), None);
        assert_eq!(parse_command("/dance"), None);
        assert_eq!(parse_command("/q"), Some(ParsedCommand::Quit));
    }
}
