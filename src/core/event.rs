//! Events a scorekeeper can apply to the board.

use super::game::Team;
use serde::{Deserialize, Serialize};

/// A single scorekeeping action.
///
/// Every event except [`Event::RenameTeam`] is undoable: the session takes a
/// snapshot of the board before applying it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Event {
    Ball,
    Strike,
    Foul,
    Out,
    ResetCount,
    SwitchSides,
    NextInning,
    AdjustScore { team: Team, delta: i32 },
    RenameTeam { team: Team, name: String },
    ResetGame,
}

impl Event {
    /// Stable event name for logs and history entries.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ball => "ball",
            Self::Strike => "strike",
            Self::Foul => "foul",
            Self::Out => "out",
            Self::ResetCount => "reset_count",
            Self::SwitchSides => "switch_sides",
            Self::NextInning => "next_inning",
            Self::AdjustScore { .. } => "adjust_score",
            Self::RenameTeam { .. } => "rename_team",
            Self::ResetGame => "reset_game",
        }
    }

    /// Whether applying this event records an undo snapshot.
    pub fn is_undoable(&self) -> bool {
        !matches!(self, Self::RenameTeam { .. })
    }
}
