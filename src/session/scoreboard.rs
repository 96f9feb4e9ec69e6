//! State store that applies events and keeps undo snapshots.

use crate::core::{transition, Event, GameState, State, Team, UndoHistory};

/// A scorekeeping session.
///
/// # Example
///
/// ```rust
/// use scoreboard::session::Scoreboard;
///
/// let mut board = Scoreboard::new();
/// board.ball();
/// board.strike();
/// assert_eq!((board.current().balls, board.current().strikes), (1, 1));
///
/// assert!(board.undo());
/// assert_eq!(board.current().strikes, 0);
/// ```
#[derive(Clone, Debug)]
pub struct Scoreboard {
    current: GameState,
    history: UndoHistory<GameState>,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Scoreboard {
    /// Start a session with the initial board and the default undo depth.
    pub fn new() -> Self {
        Self {
            current: GameState::new(),
            history: UndoHistory::new(),
        }
    }

    /// Start a session keeping at most `capacity` undo snapshots.
    pub(crate) fn with_history_capacity(capacity: usize) -> Self {
        Self {
            current: GameState::new(),
            history: UndoHistory::with_capacity(capacity),
        }
    }

    /// Current board (pure)
    pub fn current(&self) -> &GameState {
        &self.current
    }

    /// Undo history (pure)
    pub fn history(&self) -> &UndoHistory<GameState> {
        &self.history
    }

    /// Whether [`Scoreboard::undo`] would restore anything.
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Apply an event and return the new board.
    ///
    /// Undoable events snapshot the board first; renames do not.
    pub fn dispatch(&mut self, event: Event) -> &GameState {
        let next = transition::apply(&self.current, &event);
        if event.is_undoable() {
            let previous = std::mem::replace(&mut self.current, next);
            self.history.snapshot(previous, event.name());
        } else {
            self.current = next;
        }

        tracing::debug!(
            event = event.name(),
            inning = self.current.inning,
            half = self.current.name(),
            balls = self.current.balls,
            strikes = self.current.strikes,
            outs = self.current.outs,
            fouls = self.current.fouls,
            undo_depth = self.history.len(),
            "applied event"
        );

        &self.current
    }

    /// Restore the board from before the most recent undoable event.
    ///
    /// Returns `false` and leaves the board alone when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                tracing::debug!(
                    cause = %snapshot.cause,
                    undo_depth = self.history.len(),
                    "restored snapshot"
                );
                self.current = snapshot.state;
                true
            }
            None => {
                tracing::debug!("undo requested with empty history");
                false
            }
        }
    }

    /// Record a ball; the fourth one walks the batter and clears the count.
    pub fn ball(&mut self) -> &GameState {
        self.dispatch(Event::Ball)
    }

    /// Record a strike; the third one is an out.
    pub fn strike(&mut self) -> &GameState {
        self.dispatch(Event::Strike)
    }

    /// Record a foul. Fouls only add a strike below two strikes.
    pub fn foul(&mut self) -> &GameState {
        self.dispatch(Event::Foul)
    }

    /// Record an out. A fourth out wraps to zero.
    pub fn out(&mut self) -> &GameState {
        self.dispatch(Event::Out)
    }

    /// Clear the count.
    pub fn reset_count(&mut self) -> &GameState {
        self.dispatch(Event::ResetCount)
    }

    /// Hand the bat to the other team, advancing the inning after the bottom half.
    pub fn switch_sides(&mut self) -> &GameState {
        self.dispatch(Event::SwitchSides)
    }

    /// Jump to the top of the next inning.
    pub fn next_inning(&mut self) -> &GameState {
        self.dispatch(Event::NextInning)
    }

    /// Add `delta` to a team's score. Scores never drop below zero.
    pub fn adjust_score(&mut self, team: Team, delta: i32) -> &GameState {
        self.dispatch(Event::AdjustScore { team, delta })
    }

    /// Rename a team. Not undoable and does not use a history slot.
    pub fn rename_team(&mut self, team: Team, name: impl Into<String>) -> &GameState {
        self.dispatch(Event::RenameTeam {
            team,
            name: name.into(),
        })
    }

    /// Start over from the initial board. Undoable like any other event.
    pub fn reset_game(&mut self) -> &GameState {
        self.dispatch(Event::ResetGame)
    }
}
