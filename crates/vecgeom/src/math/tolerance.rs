// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Caller-configurable tolerance for parallelism and equality tests.

use crate::error::MathError;
use crate::math::{scalar, vec3, EPSILON};

/// Threshold below which a computed quantity is treated as zero.
///
/// The free functions use [`EPSILON`]; a `Tolerance` carries a caller-chosen
/// value through the `*_within` / `*_with` variants. With the `serde` feature
/// it can be embedded in a caller's configuration as `{ "epsilon": 1e-9 }`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTolerance"))]
pub struct Tolerance {
    epsilon: f64,
}

impl Tolerance {
    /// Builds a tolerance, rejecting values that are non-finite or ≤ 0.
    pub fn new(epsilon: f64) -> Result<Self, MathError> {
        if epsilon.is_finite() && epsilon > 0.0 {
            Ok(Self { epsilon })
        } else {
            Err(MathError::InvalidTolerance(epsilon))
        }
    }

    /// The threshold value.
    pub const fn epsilon(self) -> f64 {
        self.epsilon
    }

    /// `|value| < epsilon`.
    pub fn is_parallel(self, value: f64) -> bool {
        vec3::is_parallel_within(value, self.epsilon)
    }

    /// `|a - b| < epsilon`.
    pub fn approx_eq(self, a: f64, b: f64) -> bool {
        scalar::approx_eq_within(a, b, self.epsilon)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { epsilon: EPSILON }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTolerance {
    epsilon: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTolerance> for Tolerance {
    type Error = MathError;

    fn try_from(raw: RawTolerance) -> Result<Self, Self::Error> {
        Self::new(raw.epsilon)
    }
}
