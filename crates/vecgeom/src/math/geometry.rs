// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Ray/plane intersection and rotation about an arbitrary axis.
//!
//! Directions, plane normals and rotation axes need not be unit length:
//!
//! * Intersection returns `t` as a multiplier of the ray direction exactly as
//!   given, so doubling `direction` halves `t` while `origin + t * direction`
//!   stays the same point. Scaling the plane normal cancels out entirely.
//! * Rotation normalises the axis internally; a zero axis yields NaN.

use tracing::trace;

use crate::math::{is_parallel_within, Tolerance, Vec3, EPSILON};

/// Ray parameter `t >= 0` at which `origin + t * direction` meets the plane
/// through `plane_origin` with normal `plane_normal`.
///
/// Returns `None` when the ray is parallel to the plane (`|n · d| < EPSILON`,
/// which includes a ray lying in the plane) or when the plane lies behind the
/// ray origin (`t < 0`). A hit exactly at the origin (`t == 0`) is `Some`.
///
/// # Examples
/// ```
/// use vecgeom::math::{intersect_ray_plane, Vec3};
/// let hit = intersect_ray_plane(
///     Vec3::new(0.0, 0.0, 10.0),
///     Vec3::UNIT_Z,
///     Vec3::UNIT_Z,
///     Vec3::ZERO,
/// );
/// assert_eq!(hit, None); // plane is behind the ray
/// ```
pub fn intersect_ray_plane(
    origin: Vec3,
    direction: Vec3,
    plane_normal: Vec3,
    plane_origin: Vec3,
) -> Option<f64> {
    intersect_ray_plane_within(origin, direction, plane_normal, plane_origin, EPSILON)
}

/// [`intersect_ray_plane`] with a caller-chosen parallelism threshold.
pub fn intersect_ray_plane_within(
    origin: Vec3,
    direction: Vec3,
    plane_normal: Vec3,
    plane_origin: Vec3,
    epsilon: f64,
) -> Option<f64> {
    let denom = plane_normal.dot(&direction);
    if is_parallel_within(denom, epsilon) {
        trace!(denom, epsilon, "ray parallel to plane");
        return None;
    }

    let diff = plane_origin.sub(&origin);
    let t = diff.dot(&plane_normal) / denom;
    if t >= 0.0 {
        Some(t)
    } else {
        trace!(t, "plane behind ray origin");
        None
    }
}

/// Rotates `point` by `angle` radians about the line through the origin with
/// direction `axis`, using the expanded Rodrigues formula
///
/// `p' = a (a · p)(1 - cos θ) + p cos θ + (a × p) sin θ`
///
/// where `a` is `axis` normalised. Positive angles turn counter-clockwise
/// when looking down the axis towards the origin. `angle` is not wrapped, and
/// a zero `axis` produces NaN in every component.
pub fn rotate_around(point: Vec3, axis: Vec3, angle: f64) -> Vec3 {
    let Vec3 { x, y, z } = point;
    let Vec3 { x: u, y: v, z: w } = axis.normalize();

    let (sin_a, cos_a) = angle.sin_cos();
    let k = u * x + v * y + w * z;
    let one_minus_cos = 1.0 - cos_a;

    Vec3::new(
        u * k * one_minus_cos + x * cos_a + (-w * y + v * z) * sin_a,
        v * k * one_minus_cos + y * cos_a + (w * x - u * z) * sin_a,
        w * k * one_minus_cos + z * cos_a + (-v * x + u * y) * sin_a,
    )
}

/// Half-line `origin + t * direction` for `t >= 0`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Direction of travel; any non-zero length.
    pub direction: Vec3,
}

impl Ray {
    /// Creates a ray.
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// `origin + direction * t`.
    pub fn point_at(&self, t: f64) -> Vec3 {
        self.origin.scale_and_add(&self.direction, t)
    }

    /// See [`intersect_ray_plane`].
    pub fn intersect_plane(&self, plane: &Plane) -> Option<f64> {
        intersect_ray_plane(self.origin, self.direction, plane.normal, plane.point)
    }

    /// See [`intersect_ray_plane_within`].
    pub fn intersect_plane_with(&self, plane: &Plane, tolerance: Tolerance) -> Option<f64> {
        intersect_ray_plane_within(
            self.origin,
            self.direction,
            plane.normal,
            plane.point,
            tolerance.epsilon(),
        )
    }
}

/// Plane through `point` perpendicular to `normal`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    /// Normal direction; any non-zero length.
    pub normal: Vec3,
    /// Any point on the plane.
    pub point: Vec3,
}

impl Plane {
    /// Creates a plane.
    pub const fn new(normal: Vec3, point: Vec3) -> Self {
        Self { normal, point }
    }

    /// `(p - point) · normal`: zero on the plane, positive on the side the
    /// normal points to. Scales with `|normal|`.
    pub fn signed_offset(&self, p: Vec3) -> f64 {
        p.sub(&self.point).dot(&self.normal)
    }
}
