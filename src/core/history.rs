//! Bounded undo history.
//!
//! Holds owned snapshots of previous states, most recent first. Pushing past
//! the capacity silently evicts the oldest snapshot.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use thiserror::Error;

/// Default number of snapshots kept for undo.
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// A state captured right before a transition replaced it.
///
/// # Example
///
/// ```rust
/// use scoreboard::core::{GameState, Snapshot};
/// use chrono::Utc;
///
/// let snapshot = Snapshot {
///     state: GameState::new(),
///     cause: "ball".to_string(),
///     taken_at: Utc::now(),
/// };
/// assert_eq!(snapshot.cause, "ball");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Snapshot<S: State> {
    /// The state as it was before the transition
    pub state: S,
    /// Name of the event that replaced this state
    pub cause: String,
    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,
}

/// Most-recent-first stack of snapshots with a fixed capacity.
///
/// # Example
///
/// ```rust
/// use scoreboard::core::{transition, GameState, UndoHistory};
///
/// let mut history = UndoHistory::new();
/// let before = GameState::new();
/// let after = transition::ball(&before);
///
/// history.snapshot(before.clone(), "ball");
/// assert_eq!(history.len(), 1);
///
/// let restored = history.undo().map(|snapshot| snapshot.state);
/// assert_eq!(restored, Some(before));
/// assert_ne!(restored, Some(after));
/// assert!(history.undo().is_none());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "", try_from = "RawHistory<S>")]
pub struct UndoHistory<S: State> {
    snapshots: VecDeque<Snapshot<S>>,
    capacity: usize,
}

/// Errors that can occur when reading a history back in
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("History holds {len} snapshots but its capacity is {capacity}")]
    OverCapacity { len: usize, capacity: usize },
}

/// Unchecked wire form of [`UndoHistory`].
#[derive(Deserialize)]
#[serde(bound = "")]
struct RawHistory<S: State> {
    snapshots: VecDeque<Snapshot<S>>,
    capacity: usize,
}

impl<S: State> TryFrom<RawHistory<S>> for UndoHistory<S> {
    type Error = HistoryError;

    fn try_from(raw: RawHistory<S>) -> Result<Self, Self::Error> {
        if raw.snapshots.len() > raw.capacity {
            return Err(HistoryError::OverCapacity {
                len: raw.snapshots.len(),
                capacity: raw.capacity,
            });
        }
        Ok(Self {
            snapshots: raw.snapshots,
            capacity: raw.capacity,
        })
    }
}

impl<S: State> Default for UndoHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> UndoHistory<S> {
    /// Create an empty history holding [`DEFAULT_HISTORY_CAPACITY`] snapshots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create an empty history holding at most `capacity` snapshots.
    ///
    /// A capacity of zero yields a history that never retains anything;
    /// [`crate::builder::ScoreboardBuilder`] rejects that configuration.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            snapshots: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push `state` to the front, evicting the oldest snapshot when full.
    pub fn snapshot(&mut self, state: S, cause: &str) {
        self.snapshots.push_front(Snapshot {
            state,
            cause: cause.to_string(),
            taken_at: Utc::now(),
        });
        while self.snapshots.len() > self.capacity {
            if let Some(evicted) = self.snapshots.pop_back() {
                tracing::trace!(
                    cause = %evicted.cause,
                    capacity = self.capacity,
                    "evicted oldest undo snapshot"
                );
            }
        }
    }

    /// Remove and return the most recent snapshot.
    ///
    /// Returns `None` on an empty history; that is not an error.
    pub fn undo(&mut self) -> Option<Snapshot<S>> {
        self.snapshots.pop_front()
    }

    /// Most recent snapshot without removing it.
    pub fn latest(&self) -> Option<&Snapshot<S>> {
        self.snapshots.front()
    }

    /// Snapshots in undo order, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot<S>> {
        self.snapshots.iter()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
