//! Line-oriented command loop behind the `scoreboard` binary.

use crate::command::{Command, HELP};
use crate::core::GameState;
use crate::session::Scoreboard;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Read commands from `input` until it ends or a `quit` arrives.
///
/// The board is printed once up front and again after every command that
/// changes or shows it, as a `Display` line or as JSON when `json` is set.
/// Blank lines are skipped. A line that fails to parse prints `error: ...`
/// and the loop carries on.
pub fn run(
    input: impl BufRead,
    out: &mut impl Write,
    board: &mut Scoreboard,
    json: bool,
) -> Result<()> {
    print_board(out, board.current(), json)?;

    for line in input.lines() {
        let line = line.context("failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Apply(event)) => {
                let state = board.dispatch(event);
                print_board(out, state, json)?;
            }
            Ok(Command::Undo) => {
                if !board.undo() {
                    writeln!(out, "nothing to undo")?;
                }
                print_board(out, board.current(), json)?;
            }
            Ok(Command::Show) => print_board(out, board.current(), json)?,
            Ok(Command::History) => print_history(out, board)?,
            Ok(Command::Help) => writeln!(out, "{HELP}")?,
            Ok(Command::Quit) => break,
            Err(err) => {
                tracing::warn!(input = %line, "rejected command");
                writeln!(out, "error: {err}")?;
            }
        }
    }

    out.flush().context("failed to flush output")?;
    Ok(())
}

fn print_board(out: &mut impl Write, state: &GameState, json: bool) -> Result<()> {
    if json {
        let rendered = serde_json::to_string(state).context("failed to encode board")?;
        writeln!(out, "{rendered}")?;
    } else {
        writeln!(out, "{state}")?;
    }
    Ok(())
}

fn print_history(out: &mut impl Write, board: &Scoreboard) -> Result<()> {
    let history = board.history();
    writeln!(out, "undo history {}/{}", history.len(), history.capacity())?;
    for (depth, snapshot) in history.iter().enumerate() {
        writeln!(
            out,
            "{:>2}. before {:<13} {}  {}",
            depth + 1,
            snapshot.cause,
            snapshot.taken_at.format("%H:%M:%S"),
            snapshot.state
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str, json: bool) -> (Scoreboard, Vec<String>) {
        let mut board = Scoreboard::new();
        let mut out = Vec::new();
        run(Cursor::new(script), &mut out, &mut board, json).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines = text.lines().map(str::to_string).collect();
        (board, lines)
    }

    #[test]
    fn prints_initial_board_then_one_line_per_event() {
        let (board, lines) = run_script("ball\nstrike\n", false);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], GameState::new().to_string());
        assert_eq!(lines[2], board.current().to_string());
        assert_eq!((board.current().balls, board.current().strikes), (1, 1));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let (board, lines) = run_script("\n   \nball\n\t\n", false);

        assert_eq!(lines.len(), 2);
        assert_eq!(board.current().balls, 1);
        assert_eq!(board.history().len(), 1);
    }

    #[test]
    fn bad_command_reports_error_and_continues() {
        let (board, lines) = run_script("bunt\nscore mets 1\nball\n", false);

        assert_eq!(lines[1], "error: Unknown command 'bunt', type 'help' for a list");
        assert!(lines[2].starts_with("error: Unknown team 'mets'"));
        assert_eq!(lines[3], board.current().to_string());
        assert_eq!(board.current().balls, 1);
    }

    #[test]
    fn undo_with_empty_history_still_prints_board() {
        let (board, lines) = run_script("undo\n", false);

        assert_eq!(
            lines,
            vec![
                GameState::new().to_string(),
                "nothing to undo".to_string(),
                GameState::new().to_string(),
            ]
        );
        assert!(!board.can_undo());
    }

    #[test]
    fn undo_restores_previous_board() {
        let (board, lines) = run_script("score away 2\nu\n", false);

        assert_eq!(lines.len(), 3);
        assert!(!lines.iter().any(|line| line == "nothing to undo"));
        assert_eq!(board.current(), &GameState::new());
    }

    #[test]
    fn quit_stops_reading() {
        let (board, lines) = run_script("ball\nquit\nball\nball\n", false);

        assert_eq!(lines.len(), 2);
        assert_eq!(board.current().balls, 1);
    }

    #[test]
    fn json_mode_prints_parseable_boards() {
        let (board, lines) = run_script("score home 3\nrename away  Red Sox\nshow\n", true);

        assert_eq!(lines.len(), 4);
        for line in &lines {
            serde_json::from_str::<GameState>(line).unwrap();
        }
        let last: GameState = serde_json::from_str(&lines[3]).unwrap();
        assert_eq!(&last, board.current());
        assert_eq!(last.home_score, 3);
        assert_eq!(last.away_name, " Red Sox");
        assert!(lines[3].contains("\"homeScore\":3"));
    }

    #[test]
    fn history_lists_snapshots_most_recent_first() {
        let (_, lines) = run_script("ball\nstrike\nhistory\n", false);

        assert_eq!(lines[3], "undo history 2/20");
        assert!(lines[4].starts_with(" 1. before strike"));
        assert!(lines[5].starts_with(" 2. before ball"));
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn help_prints_usage() {
        let (_, lines) = run_script("help\n", false);
        assert_eq!(lines[1], "commands:");
        assert!(lines.iter().any(|line| line.trim_start().starts_with("rename")));
    }
}
