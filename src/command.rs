//! Text commands accepted by the command-line shell.

use crate::core::{Event, ParseTeamError, Team};
use std::str::FromStr;
use thiserror::Error;

/// One line of shell input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Apply(Event),
    Undo,
    Show,
    History,
    Help,
    Quit,
}

/// Errors that can occur when parsing a command line
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command '{0}', type 'help' for a list")]
    Unknown(String),

    #[error("'{command}' needs a {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error(transparent)]
    InvalidTeam(#[from] ParseTeamError),

    #[error("Invalid score delta '{0}', expected a whole number like 1 or -1")]
    InvalidDelta(String),
}

/// Usage text printed by `help`.
pub const HELP: &str = "\
commands:
  ball | b                   add a ball (fourth ball is a walk)
  strike | k                 add a strike (third strike is an out)
  foul | f                   add a foul
  out | o                    add an out
  reset-count | rc           clear balls, strikes and fouls
  switch | sw                switch sides
  next-inning | ni           start the next inning
  score <home|away> <delta>  adjust a score, e.g. score home +1
  rename <home|away> <name>  rename a team (not undoable); everything after
                             the space following the team is kept as typed
  reset-game                 start over
  undo | u                   undo the last change
  show                       print the board
  history                    list undo snapshots
  help                       print this text
  quit | exit                leave";

/// Split off the first whitespace-delimited word.
fn next_word(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    Some(input.split_once(char::is_whitespace).unwrap_or((input, "")))
}

fn parse_team<'a>(
    command: &'static str,
    rest: &'a str,
) -> Result<(Team, &'a str), CommandError> {
    let (word, rest) = next_word(rest).ok_or(CommandError::MissingArgument {
        command,
        argument: "team (home or away)",
    })?;
    Ok((word.parse::<Team>()?, rest))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (word, rest) = next_word(line).ok_or(CommandError::Empty)?;

        let command = match word.to_ascii_lowercase().as_str() {
            "ball" | "b" => Self::Apply(Event::Ball),
            "strike" | "k" => Self::Apply(Event::Strike),
            "foul" | "f" => Self::Apply(Event::Foul),
            "out" | "o" => Self::Apply(Event::Out),
            "reset-count" | "rc" => Self::Apply(Event::ResetCount),
            "switch" | "sw" => Self::Apply(Event::SwitchSides),
            "next-inning" | "ni" => Self::Apply(Event::NextInning),
            "reset-game" => Self::Apply(Event::ResetGame),
            "score" => {
                let (team, rest) = parse_team("score", rest)?;
                let (raw, _) = next_word(rest).ok_or(CommandError::MissingArgument {
                    command: "score",
                    argument: "delta",
                })?;
                let delta = raw
                    .parse::<i32>()
                    .map_err(|_| CommandError::InvalidDelta(raw.to_string()))?;
                Self::Apply(Event::AdjustScore { team, delta })
            }
            "rename" => {
                let (team, name) = parse_team("rename", rest)?;
                // A bare `rename home` names nothing; `rename home ` clears the name.
                if name.is_empty() && !rest.trim_start().contains(char::is_whitespace) {
                    return Err(CommandError::MissingArgument {
                        command: "rename",
                        argument: "name",
                    });
                }
                Self::Apply(Event::RenameTeam {
                    team,
                    name: name.to_string(),
                })
            }
            "undo" | "u" => Self::Undo,
            "show" => Self::Show,
            "history" => Self::History,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => return Err(CommandError::Unknown(word.to_string())),
        };

        Ok(command)
    }
}
