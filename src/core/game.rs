//! The scoreboard value: inning, half, scores, team names and the count.

use super::state::State;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A walk happens when balls reach this value.
pub const MAX_BALLS: u8 = 4;
/// A strikeout happens when strikes reach this value.
pub const MAX_STRIKES: u8 = 3;
/// Highest number of outs a half-inning displays.
pub const MAX_OUTS: u8 = 3;
/// Highest number of fouls displayed before the foul counter rolls over.
pub const MAX_FOULS: u8 = 3;

pub const DEFAULT_HOME_NAME: &str = "HOME";
pub const DEFAULT_AWAY_NAME: &str = "AWAY";

/// One of the two teams on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Team {
    Home,
    Away,
}

impl Team {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "HOME",
            Self::Away => "AWAY",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names neither team.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown team '{0}', expected 'home' or 'away'")]
pub struct ParseTeamError(pub String);

impl FromStr for Team {
    type Err = ParseTeamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("home") {
            Ok(Self::Home)
        } else if s.eq_ignore_ascii_case("away") {
            Ok(Self::Away)
        } else {
            Err(ParseTeamError(s.to_string()))
        }
    }
}

/// Complete scoreboard snapshot.
///
/// `GameState` is a plain value. Transitions in [`crate::core::transition`]
/// take a reference and return a fresh value, so a snapshot held by the
/// undo history can never be changed after the fact.
///
/// # Example
///
/// ```rust
/// use scoreboard::core::{GameState, Team};
///
/// let state = GameState::new();
/// assert_eq!(state.inning, 1);
/// assert!(!state.is_bottom);
/// assert_eq!(state.batting(), Team::Away);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub inning: u32,
    /// `false` is the top half (away bats), `true` the bottom half (home bats).
    pub is_bottom: bool,
    pub home_score: u32,
    pub away_score: u32,
    pub home_name: String,
    pub away_name: String,
    pub balls: u8,
    pub strikes: u8,
    pub outs: u8,
    pub fouls: u8,
}

impl GameState {
    /// The fixed starting value of every session and of `reset_game`.
    pub fn new() -> Self {
        Self {
            inning: 1,
            is_bottom: false,
            home_score: 0,
            away_score: 0,
            home_name: DEFAULT_HOME_NAME.to_string(),
            away_name: DEFAULT_AWAY_NAME.to_string(),
            balls: 0,
            strikes: 0,
            outs: 0,
            fouls: 0,
        }
    }

    /// Team currently at bat.
    pub fn batting(&self) -> Team {
        if self.is_bottom {
            Team::Home
        } else {
            Team::Away
        }
    }

    pub fn score(&self, team: Team) -> u32 {
        match team {
            Team::Home => self.home_score,
            Team::Away => self.away_score,
        }
    }

    pub fn team_name(&self, team: Team) -> &str {
        match team {
            Team::Home => &self.home_name,
            Team::Away => &self.away_name,
        }
    }

    /// True once the half-inning shows three outs and is waiting for a side switch.
    pub fn is_side_retired(&self) -> bool {
        self.outs == MAX_OUTS
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl State for GameState {
    fn name(&self) -> &str {
        if self.is_bottom {
            "Bottom"
        } else {
            "Top"
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {} | {} {} | B {} S {} O {} F {}",
            self.away_name,
            self.away_score,
            self.home_score,
            self.home_name,
            self.name(),
            self.inning,
            self.balls,
            self.strikes,
            self.outs,
            self.fouls,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_matches_session_start() {
        let state = GameState::new();
        assert_eq!(state.inning, 1);
        assert!(!state.is_bottom);
        assert_eq!(state.home_score, 0);
        assert_eq!(state.away_score, 0);
        assert_eq!(state.home_name, "HOME");
        assert_eq!(state.away_name, "AWAY");
        assert_eq!((state.balls, state.strikes, state.outs, state.fouls), (0, 0, 0, 0));
        assert_eq!(state, GameState::default());
    }

    #[test]
    fn batting_team_follows_half() {
        let mut state = GameState::new();
        assert_eq!(state.batting(), Team::Away);
        assert_eq!(state.name(), "Top");

        state.is_bottom = true;
        assert_eq!(state.batting(), Team::Home);
        assert_eq!(state.name(), "Bottom");
    }

    #[test]
    fn team_parses_case_insensitively() {
        assert_eq!("home".parse::<Team>(), Ok(Team::Home));
        assert_eq!("AWAY".parse::<Team>(), Ok(Team::Away));
        assert_eq!("Away".parse::<Team>(), Ok(Team::Away));
        assert_eq!(
            "visitors".parse::<Team>(),
            Err(ParseTeamError("visitors".to_string()))
        );
    }

    #[test]
    fn display_renders_one_line_board() {
        let mut state = GameState::new();
        state.away_score = 3;
        state.home_score = 2;
        state.balls = 2;
        state.strikes = 1;
        state.outs = 1;

        assert_eq!(
            state.to_string(),
            "AWAY 3 - 2 HOME | Top 1 | B 2 S 1 O 1 F 0"
        );
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(GameState::new()).unwrap();
        assert_eq!(json["isBottom"], false);
        assert_eq!(json["homeName"], "HOME");
        assert_eq!(json["awayScore"], 0);

        let back: GameState = serde_json::from_value(json).unwrap();
        assert_eq!(back, GameState::new());
    }

    #[test]
    fn side_retired_only_at_three_outs() {
        let mut state = GameState::new();
        state.outs = 2;
        assert!(!state.is_side_retired());
        state.outs = MAX_OUTS;
        assert!(state.is_side_retired());
    }
}
