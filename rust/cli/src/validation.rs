//! Input parsing for the interactive session and position lists.

/// A command typed into the interactive session.
#[derive(Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Change how many cards to draw
    Count(i64),
    /// Set one slot (1-based, as displayed) to a draw position
    Pick { slot: usize, value: usize },
    /// Set every slot at once
    Set(Vec<usize>),
    Confirm,
    Reshuffle,
    Show,
    Help,
}

/// Result type for parsing a line of session input.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseResult {
    Command(SessionCommand),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse one line of interactive input (case-insensitive).
///
/// - `count N` / `n N`
/// - `pick SLOT VALUE` / `p SLOT VALUE`
/// - `set V1 V2 ...` (spaces or commas)
/// - `confirm` / `c`, `reshuffle` / `r`, `show` / `s`, `help` / `h` / `?`
/// - `q` / `quit`
///
/// ```rust
/// # use tarot_cli::validation::{parse_session_command, ParseResult, SessionCommand};
/// assert_eq!(
///     parse_session_command("pick 2 40"),
///     ParseResult::Command(SessionCommand::Pick { slot: 2, value: 40 })
/// );
/// assert_eq!(
///     parse_session_command("set 1,2, 3"),
///     ParseResult::Command(SessionCommand::Set(vec![1, 2, 3]))
/// );
/// assert_eq!(parse_session_command("q"), ParseResult::Quit);
/// ```
pub fn parse_session_command(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&head) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match head {
        "q" | "quit" | "exit" => ParseResult::Quit,
        "confirm" | "c" => ParseResult::Command(SessionCommand::Confirm),
        "reshuffle" | "r" => ParseResult::Command(SessionCommand::Reshuffle),
        "show" | "s" => ParseResult::Command(SessionCommand::Show),
        "help" | "h" | "?" => ParseResult::Command(SessionCommand::Help),
        "count" | "n" => match parts.get(1).map(|s| s.parse::<i64>()) {
            Some(Ok(n)) => ParseResult::Command(SessionCommand::Count(n)),
            Some(Err(_)) => ParseResult::Invalid("Invalid card count".to_string()),
            None => ParseResult::Invalid("Count requires a number (e.g., 'count 3')".to_string()),
        },
        "pick" | "p" => {
            if parts.len() < 3 {
                return ParseResult::Invalid(
                    "Pick requires a slot and a position (e.g., 'pick 1 42')".to_string(),
                );
            }
            match (parts[1].parse::<usize>(), parts[2].parse::<usize>()) {
                (Ok(slot), Ok(value)) => {
                    ParseResult::Command(SessionCommand::Pick { slot, value })
                }
                _ => ParseResult::Invalid("Slot and position must be non-negative numbers".into()),
            }
        }
        "set" => {
            let rest = parts[1..].join(" ");
            match parse_positions(&rest) {
                Ok(values) => ParseResult::Command(SessionCommand::Set(values)),
                Err(msg) => ParseResult::Invalid(msg),
            }
        }
        _ => ParseResult::Invalid(format!(
            "Unrecognized command '{}'. Valid commands: count, pick, set, confirm, reshuffle, show, help, q",
            head
        )),
    }
}

/// Parse a list of draw positions separated by commas and/or whitespace.
///
/// ```rust
/// # use tarot_cli::validation::parse_positions;
/// assert_eq!(parse_positions("3,17 42"), Ok(vec![3, 17, 42]));
/// assert!(parse_positions("").is_err());
/// assert!(parse_positions("1,-2").is_err());
/// ```
pub fn parse_positions(input: &str) -> Result<Vec<usize>, String> {
    let values = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>()
                .map_err(|_| format!("Invalid position '{}'", s))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if values.is_empty() {
        return Err("At least one position is required".to_string());
    }
    Ok(values)
}
