//! Pure transition functions for the scoreboard.
//!
//! Every function takes the previous board by reference and returns the next
//! one. None of them can fail. Counter overflow is handled by
//! [`advance`]: a counter is bumped against its limit and either keeps
//! counting or reports that the limit was reached, and the caller applies
//! the cascade belonging to that counter (walk, strikeout, outs wrap, foul
//! roll-over).

use super::event::Event;
use super::game::{GameState, Team, MAX_BALLS, MAX_FOULS, MAX_OUTS, MAX_STRIKES};

/// Highest strike count a foul ball can produce.
pub const FOUL_STRIKE_CAP: u8 = MAX_STRIKES - 1;

/// Result of bumping a counter by one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tally {
    /// Still below the limit; holds the new value.
    Counting(u8),
    /// The limit was reached; the cascade decides the new value.
    Reached,
}

/// Increment `current` and compare against `limit`, the first value the
/// counter may not hold.
pub fn advance(current: u8, limit: u8) -> Tally {
    let next = current.saturating_add(1);
    if next >= limit {
        Tally::Reached
    } else {
        Tally::Counting(next)
    }
}

fn clear_count(state: &mut GameState) {
    state.balls = 0;
    state.strikes = 0;
    state.fouls = 0;
}

fn clear_half(state: &mut GameState) {
    clear_count(state);
    state.outs = 0;
}

/// Apply any event to the board.
///
/// # Example
///
/// ```rust
/// use scoreboard::core::{transition, Event, GameState};
///
/// let state = transition::apply(&GameState::new(), &Event::Strike);
/// assert_eq!(state.strikes, 1);
/// ```
pub fn apply(state: &GameState, event: &Event) -> GameState {
    match event {
        Event::Ball => ball(state),
        Event::Strike => strike(state),
        Event::Foul => foul(state),
        Event::Out => out(state),
        Event::ResetCount => reset_count(state),
        Event::SwitchSides => switch_sides(state),
        Event::NextInning => next_inning(state),
        Event::AdjustScore { team, delta } => adjust_score(state, *team, *delta),
        Event::RenameTeam { team, name } => rename_team(state, *team, name),
        Event::ResetGame => reset_game(state),
    }
}

/// Fourth ball is a walk: the count clears.
pub fn ball(state: &GameState) -> GameState {
    let mut next = state.clone();
    match advance(state.balls, MAX_BALLS) {
        Tally::Counting(balls) => next.balls = balls,
        Tally::Reached => clear_count(&mut next),
    }
    next
}

/// Third strike is an out; outs stop at [`MAX_OUTS`] here rather than wrapping.
pub fn strike(state: &GameState) -> GameState {
    let mut next = state.clone();
    match advance(state.strikes, MAX_STRIKES) {
        Tally::Counting(strikes) => next.strikes = strikes,
        Tally::Reached => {
            next.outs = state.outs.saturating_add(1).min(MAX_OUTS);
            clear_count(&mut next);
        }
    }
    next
}

/// A foul adds a strike only below two strikes. The foul counter itself rolls
/// back to zero once it passes [`MAX_FOULS`].
pub fn foul(state: &GameState) -> GameState {
    let mut next = state.clone();
    if state.strikes < FOUL_STRIKE_CAP {
        next.strikes = state.strikes + 1;
    }
    next.fouls = match advance(state.fouls, MAX_FOULS + 1) {
        Tally::Counting(fouls) => fouls,
        Tally::Reached => 0,
    };
    next
}

/// Records an out and clears the count. A fourth out wraps to zero without
/// switching sides.
pub fn out(state: &GameState) -> GameState {
    let mut next = state.clone();
    clear_count(&mut next);
    next.outs = match advance(state.outs, MAX_OUTS + 1) {
        Tally::Counting(outs) => outs,
        Tally::Reached => 0,
    };
    next
}

/// Clears balls, strikes and fouls. Outs, inning and scores are kept.
pub fn reset_count(state: &GameState) -> GameState {
    let mut next = state.clone();
    clear_count(&mut next);
    next
}

/// Toggles the half; the inning advances only on bottom -> top.
pub fn switch_sides(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.is_bottom = !state.is_bottom;
    if state.is_bottom {
        next.inning = state.inning.saturating_add(1);
    }
    clear_half(&mut next);
    next
}

/// Starts the top of the next inning from either half, clearing the count
/// and outs.
pub fn next_inning(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.inning = state.inning.saturating_add(1);
    next.is_bottom = false;
    clear_half(&mut next);
    next
}

/// Adds `delta` to a team's score, flooring at zero.
pub fn adjust_score(state: &GameState, team: Team, delta: i32) -> GameState {
    let mut next = state.clone();
    let score = match team {
        Team::Home => &mut next.home_score,
        Team::Away => &mut next.away_score,
    };
    *score = score.saturating_add_signed(delta);
    next
}

/// Sets a team name verbatim.
pub fn rename_team(state: &GameState, team: Team, name: &str) -> GameState {
    let mut next = state.clone();
    match team {
        Team::Home => next.home_name = name.to_string(),
        Team::Away => next.away_name = name.to_string(),
    }
    next
}

/// Returns the initial board. Scores and team names are reset too.
///
/// ```rust
/// use scoreboard::core::{transition, GameState, Team};
///
/// let busy = transition::adjust_score(&GameState::new(), Team::Home, 4);
/// assert_eq!(transition::reset_game(&busy), GameState::new());
/// ```
pub fn reset_game(_state: &GameState) -> GameState {
    GameState::new()
}
