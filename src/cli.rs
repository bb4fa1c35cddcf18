use crate::card::{CardId, ParseCardError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("'{command}' needs an argument (try 'help')")]
    MissingArgument { command: String },
    #[error("'{0}' is not a valid hand position")]
    InvalidPosition(String),
    #[error(transparent)]
    InvalidCard(#[from] ParseCardError),
}

/// One line of input in an interactive session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Draw a specific card from the deck into the hand
    Draw(CardId),
    /// Draw a random card from the remaining deck
    Random,
    /// Return the hand entry at a position to the deck
    Return(usize),
    /// Return every hand entry to the deck
    Clear,
    /// Restore the full deck and empty hand
    Reset,
    /// Change the selected query card
    Select(CardId),
    /// Print the odds of the selected card (or a one-off card)
    Odds(Option<CardId>),
    /// Print the remaining-deck table
    Show,
    /// Print the current hand
    Hand,
    Help,
    Quit,
}

/// Parse one session input line.
/// Returns None for blank lines and comment lines.
pub fn parse_command(line: &str) -> Option<Result<SessionCommand, CommandError>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let mut parts = trimmed.split_whitespace();
    let word = parts.next()?.to_ascii_lowercase();
    let arg = parts.next();

    Some(parse_word(&word, arg))
}

fn parse_word(word: &str, arg: Option<&str>) -> Result<SessionCommand, CommandError> {
    match word {
        "draw" | "d" => {
            let card = require_arg(word, arg)?.parse::<CardId>()?;
            Ok(SessionCommand::Draw(card))
        }
        "random" | "r" => Ok(SessionCommand::Random),
        "return" | "ret" => {
            let raw = require_arg(word, arg)?;
            let position = raw
                .parse::<usize>()
                .map_err(|_| CommandError::InvalidPosition(raw.to_string()))?;
            Ok(SessionCommand::Return(position))
        }
        "clear" => Ok(SessionCommand::Clear),
        "reset" => Ok(SessionCommand::Reset),
        "select" | "sel" => {
            let card = require_arg(word, arg)?.parse::<CardId>()?;
            Ok(SessionCommand::Select(card))
        }
        "odds" | "o" | "prob" => match arg {
            Some(raw) => Ok(SessionCommand::Odds(Some(raw.parse::<CardId>()?))),
            None => Ok(SessionCommand::Odds(None)),
        },
        "show" | "deck" => Ok(SessionCommand::Show),
        "hand" => Ok(SessionCommand::Hand),
        "help" | "h" | "?" => Ok(SessionCommand::Help),
        "quit" | "q" | "exit" => Ok(SessionCommand::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn require_arg<'a>(command: &str, arg: Option<&'a str>) -> Result<&'a str, CommandError> {
    arg.ok_or_else(|| CommandError::MissingArgument {
        command: command.to_string(),
    })
}

/// Session command reference, printed by the help command
pub const HELP_TEXT: &str = "\
Commands:
  draw <card>     draw a card into the hand (e.g. 'draw AH', 'draw 10d')
  random          draw a random card from the remaining deck
  return <pos>    return the hand card at position <pos> to the deck
  clear           return every hand card to the deck
  reset           restore the full deck and empty the hand
  select <card>   change the card the odds display tracks
  odds [card]     show draw odds for the selected card (or a one-off card)
  show            show remaining counts for the whole deck
  hand            show the current hand
  quit            leave the session";
