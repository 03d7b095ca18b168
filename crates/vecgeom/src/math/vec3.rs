// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! The `Vec3` value type and the free vector primitives built on it.

use crate::error::MathError;
use crate::math::EPSILON;

/// Three-component `f64` vector used for both points and directions.
///
/// * Plain value type: always copied, never aliased mutably.
/// * No invariant is enforced on construction. NaN, infinite and zero
///   vectors are representable and produce degenerate results downstream
///   instead of errors.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the components as an `[x, y, z]` array.
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Componentwise sum.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Componentwise difference `self - other`.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Scales every component by `scalar`.
    pub fn scale(&self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    /// Returns `self + other * scale`.
    ///
    /// Only `other` is scaled; this is not `(self + other) * scale`.
    pub fn scale_and_add(&self, other: &Self, scale: f64) -> Self {
        Self::new(
            self.x + other.x * scale,
            self.y + other.y * scale,
            self.z + other.z * scale,
        )
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product `self × other`.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean length.
    ///
    /// Reduced pairwise with [`f64::hypot`] so very large or very small
    /// components do not overflow or underflow when squared.
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    /// Divides every component by [`Vec3::length`].
    ///
    /// A zero-length vector yields NaN in all three components (`0 / 0`);
    /// callers detect the degenerate input with [`Vec3::is_nan`].
    pub fn normalize(&self) -> Self {
        let len = self.length();
        Self::new(self.x / len, self.y / len, self.z / len)
    }

    /// True if every component is finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// True if any component is NaN.
    pub fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(value: [f64; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(value: Vec3) -> Self {
        value.to_array()
    }
}

/// Converts a slice of exactly three components.
///
/// # Examples
/// ```
/// use vecgeom::{MathError, Vec3};
/// let v = Vec3::try_from(&[1.0f64, 2.0, 3.0][..]).unwrap();
/// assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
/// assert_eq!(
///     Vec3::try_from(&[1.0f64, 2.0][..]),
///     Err(MathError::Arity { expected: 3, actual: 2 }),
/// );
/// ```
impl TryFrom<&[f64]> for Vec3 {
    type Error = MathError;

    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        match *value {
            [x, y, z] => Ok(Self::new(x, y, z)),
            _ => Err(MathError::Arity {
                expected: 3,
                actual: value.len(),
            }),
        }
    }
}

impl core::ops::Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3::add(&self, &rhs)
    }
}

impl core::ops::Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3::sub(&self, &rhs)
    }
}

impl core::ops::Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl core::ops::Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// `a.x*b.x + a.y*b.y + a.z*b.z`.
pub fn dot(a: Vec3, b: Vec3) -> f64 {
    a.dot(&b)
}

/// Componentwise `a - b`.
pub fn subtract(a: Vec3, b: Vec3) -> Vec3 {
    a.sub(&b)
}

/// Componentwise `a + b * scale`.
pub fn scale_and_add(a: Vec3, b: Vec3, scale: f64) -> Vec3 {
    a.scale_and_add(&b, scale)
}

/// Unit vector in the direction of `v`; NaN components when `v` is zero.
pub fn normalize(v: Vec3) -> Vec3 {
    v.normalize()
}

/// Classifies a precomputed dot product as parallel: `|value| < EPSILON`.
pub fn is_parallel(value: f64) -> bool {
    is_parallel_within(value, EPSILON)
}

/// `|value| < epsilon`. A value exactly equal to `epsilon` is not parallel.
pub fn is_parallel_within(value: f64, epsilon: f64) -> bool {
    value.abs() < epsilon
}
