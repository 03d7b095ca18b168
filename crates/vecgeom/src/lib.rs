// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! vecgeom: stateless numeric helpers for scalar range mapping and 3D vector
//! geometry.
//!
//! The crate is split the same way callers tend to reach for it:
//!
//! * [`math::scalar`] – clamp, lerp, smoothstep, range mapping, angle
//!   conversion and approximate equality.
//! * [`math::Vec3`] plus the free vector primitives ([`math::dot`],
//!   [`math::subtract`], [`math::scale_and_add`], [`math::normalize`],
//!   [`math::is_parallel`]).
//! * [`math::geometry`] – ray/plane intersection and rotation about an
//!   arbitrary axis.
//!
//! Nothing in the crate fails at run time. Degenerate geometry travels in the
//! value domain: zero-length vectors normalise to NaN and rays that miss a
//! plane yield `None`.
//!
//! ```
//! use vecgeom::math::{intersect_ray_plane, Vec3};
//!
//! let t = intersect_ray_plane(
//!     Vec3::ZERO,
//!     Vec3::UNIT_Z,
//!     Vec3::UNIT_Z,
//!     Vec3::new(0.0, 0.0, 5.0),
//! );
//! assert_eq!(t, Some(5.0));
//! ```

pub mod error;
pub mod math;

pub use error::MathError;
pub use math::{Plane, Ray, Tolerance, Vec3};
