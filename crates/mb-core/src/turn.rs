//! Discrete turn counter.
//!
//! Exactly one strategy call and one state transition happen per turn.  The
//! counter is the only notion of time in the simulator; pacing in wall-clock
//! terms belongs to whoever drives the loop.

use std::fmt;

/// Number of turns taken since the simulation (re)started.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn(pub u64);

impl Turn {
    pub const ZERO: Turn = Turn(0);

    /// The turn after `self`.
    #[inline]
    pub fn next(self) -> Turn {
        Turn(self.0 + 1)
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
