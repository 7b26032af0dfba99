//! Run configuration.

use crate::{CoreError, CoreResult};

/// The place every run starts from unless configured otherwise.
pub const DEFAULT_START_PLACE: &str = "Post Office";

/// Parcels generated for a fresh world when nothing else is configured.
pub const DEFAULT_PARCEL_COUNT: usize = 5;

/// Top-level simulation configuration.
///
/// Typically loaded from a JSON file by the application crate and passed to
/// the simulation builder.  Missing fields fall back to [`Default`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Number of parcels in a freshly generated world.
    pub parcel_count: usize,

    /// Label of the place where the robot starts.
    pub start_place: String,

    /// Give up after this many turns.  `0` means no limit.
    pub max_turns: u64,
}

impl SimConfig {
    /// Reject configurations that can never produce a valid world.
    pub fn validate(&self) -> CoreResult<()> {
        if self.start_place.is_empty() {
            return Err(CoreError::Config("start_place must not be empty".into()));
        }
        Ok(())
    }

    /// `true` once `turns` has reached the configured cap.
    #[inline]
    pub fn turn_limit_reached(&self, turns: u64) -> bool {
        self.max_turns > 0 && turns >= self.max_turns
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:         42,
            parcel_count: DEFAULT_PARCEL_COUNT,
            start_place:  DEFAULT_START_PLACE.to_string(),
            max_turns:    0,
        }
    }
}
