// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Closed-form scalar helpers: clamping, interpolation, range mapping and
//! angle conversion.
//!
//! None of these guard against degenerate ranges or NaN inputs. When an input
//! range has zero width the division yields `±inf` or NaN, and NaN arguments
//! come back out as NaN; callers detect both with [`f64::is_finite`].

use core::f64::consts::PI;

use crate::math::EPSILON;

/// Multiply radians by this to get degrees (`180 / π`).
pub const RAD2DEG: f64 = 180.0 / PI;

/// Multiply degrees by this to get radians (`π / 180`).
pub const DEG2RAD: f64 = PI / 180.0;

/// Restricts `value` to `[min, max]`.
///
/// Computed as `min(max(value, min), max)`; an inverted range (`min > max`)
/// therefore returns `max` rather than panicking. NaN in any argument yields
/// NaN (`f64::max`/`f64::min` alone would discard it).
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() || min.is_nan() || max.is_nan() {
        return f64::NAN;
    }
    value.max(min).min(max)
}

/// Linear interpolation `a + (b - a) * t`. `t` is not clamped.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Converts radians to degrees.
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * RAD2DEG
}

/// Converts degrees to radians.
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * DEG2RAD
}

/// Maps `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// Values outside the input range extrapolate linearly.
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    out_min + ((value - in_min) * (out_max - out_min)) / (in_max - in_min)
}

/// Position of `value` within `[min, max]`, where `min` maps to 0 and `max`
/// to 1. Not clamped.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    (value - min) / (max - min)
}

/// Cubic Hermite step between `edge0` and `edge1`.
///
/// Returns 0 at or below `edge0`, 1 at or above `edge1`, and eases in
/// between with zero slope at both edges.
pub fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    let t = clamp((x - edge0) / (edge1 - edge0), 0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Rational soft limiter `a / (1 + smoothness * a)`.
pub fn smooth(a: f64, smoothness: f64) -> f64 {
    a / (1.0 + smoothness * a)
}

/// `|a - b| < EPSILON`.
pub fn approx_eq(a: f64, b: f64) -> bool {
    approx_eq_within(a, b, EPSILON)
}

/// `|a - b| < epsilon`. The comparison is strict.
pub fn approx_eq_within(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}
