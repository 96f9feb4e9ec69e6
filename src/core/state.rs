//! Core State trait for values tracked by the undo history.
//!
//! Anything that can be snapshotted implements this trait, which provides
//! pure methods for inspecting the value without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for snapshot-able state values.
///
/// All methods are pure - no side effects. States are immutable values;
/// a transition produces a new value instead of editing the old one.
///
/// # Required Traits
///
/// - `Clone`: States must be cloneable so snapshots never alias the live value
/// - `PartialEq`: States must be comparable for undo checks
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States must be serializable for rendering
///
/// # Example
///
/// ```rust
/// use scoreboard::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Half {
///     Top,
///     Bottom,
/// }
///
/// impl State for Half {
///     fn name(&self) -> &str {
///         match self {
///             Self::Top => "Top",
///             Self::Bottom => "Bottom",
///         }
///     }
/// }
///
/// assert_eq!(Half::Bottom.name(), "Bottom");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Short name of the state for display/logging.
    fn name(&self) -> &str;
}
