//! Hit-point snapshot and its mutation rules.

use serde::{Deserialize, Serialize};

/// A character's vitals at one point in time.
///
/// `hit_points` never drops below zero and has no upper bound.
/// `temp_hit_points` is a non-stacking buffer that absorbs damage before
/// real hit points are touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HitPointState {
    pub hit_points: i64,
    pub temp_hit_points: i64,
}

impl HitPointState {
    pub fn new(hit_points: i64, temp_hit_points: i64) -> Self {
        Self {
            hit_points,
            temp_hit_points,
        }
    }

    /// Apply a signed delta to hit points, clamping at the zero floor.
    ///
    /// This mirrors the rule the store evaluates atomically; it exists so the
    /// clamp semantics can be stated and tested without a database.
    pub fn apply_delta(self, delta: i64) -> Self {
        Self {
            hit_points: (self.hit_points + delta).max(0),
            temp_hit_points: self.temp_hit_points,
        }
    }

    /// Replace the temporary hit-point buffer unconditionally.
    pub fn with_temp(self, temp_hit_points: i64) -> Self {
        Self {
            temp_hit_points,
            ..self
        }
    }

    /// Raise the temporary hit-point buffer monotonically: a candidate that
    /// does not strictly exceed the current buffer leaves it unchanged.
    pub fn raised_to(self, candidate: i64) -> Self {
        Self {
            temp_hit_points: self.temp_hit_points.max(candidate),
            ..self
        }
    }
}
