// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scalar utilities, 3D vector primitives and the geometry built on them.
//!
//! All arithmetic is `f64`. Zero-length vectors are not special-cased, so NaN
//! propagates through every operation that divides by a vector length.

pub mod geometry;
mod prng;
pub mod scalar;
mod tolerance;
mod vec3;

pub use geometry::{intersect_ray_plane, intersect_ray_plane_within, rotate_around, Plane, Ray};
pub use prng::{random_range, Prng};
pub use scalar::{
    approx_eq, approx_eq_within, clamp, deg_to_rad, lerp, map_range, rad_to_deg, smooth,
    smoothstep, DEG2RAD, RAD2DEG,
};
pub use tolerance::Tolerance;
pub use vec3::{dot, is_parallel, is_parallel_within, normalize, scale_and_add, subtract, Vec3};

/// Default tolerance for parallelism tests and approximate equality.
pub const EPSILON: f64 = 1e-6;
