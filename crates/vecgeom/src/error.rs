// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Errors raised at the crate boundary.
//!
//! Geometry itself never fails; these only cover conversions from loosely
//! typed caller data.

use thiserror::Error;

/// Errors emitted when building math values from untyped input.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// A slice with the wrong number of components was converted to a vector.
    #[error("expected {expected} components, got {actual}")]
    Arity {
        /// Component count the target type requires.
        expected: usize,
        /// Component count that was supplied.
        actual: usize,
    },
    /// A tolerance was not a finite, strictly positive number.
    #[error("tolerance must be finite and > 0, got {0}")]
    InvalidTolerance(f64),
}
