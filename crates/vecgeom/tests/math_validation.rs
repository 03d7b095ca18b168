// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Golden-value validation for vector primitives, ray/plane intersection and
//! axis rotation.
//!
//! Fixture values were generated independently in double precision; any
//! drift beyond the recorded tolerance indicates a formula change.

#![allow(missing_docs)]
use once_cell::sync::Lazy;
use serde::Deserialize;

use vecgeom::math::{self, Vec3};

static RAW_FIXTURES: &str = include_str!("fixtures/math-fixtures.json");

static FIXTURES: Lazy<MathFixtures> = Lazy::new(|| {
    let fixtures: MathFixtures =
        serde_json::from_str(RAW_FIXTURES).expect("failed to parse math fixtures");
    fixtures.validate();
    fixtures
});

#[derive(Debug, Deserialize)]
struct MathFixtures {
    #[serde(default)]
    tolerance: Tolerance,
    vec3: Vec3Fixtures,
    intersect_ray_plane: Vec<IntersectFixture>,
    rotate_around: Vec<RotateFixture>,
}

impl MathFixtures {
    fn validate(&self) {
        fn ensure<T>(name: &str, slice: &[T]) {
            assert!(
                !slice.is_empty(),
                "math fixtures set '{name}' must not be empty"
            );
        }

        ensure("vec3.dot", &self.vec3.dot);
        ensure("vec3.subtract", &self.vec3.subtract);
        ensure("vec3.scale_and_add", &self.vec3.scale_and_add);
        ensure("vec3.normalize", &self.vec3.normalize);
        ensure("intersect_ray_plane", &self.intersect_ray_plane);
        ensure("rotate_around", &self.rotate_around);
    }
}

#[derive(Debug, Clone, Deserialize)]
struct Tolerance {
    #[serde(default = "Tolerance::default_absolute")]
    absolute: f64,
    #[serde(default = "Tolerance::default_relative")]
    relative: f64,
}

impl Tolerance {
    const fn default_absolute() -> f64 {
        1e-9
    }

    const fn default_relative() -> f64 {
        1e-9
    }

    fn allowed_error(&self, reference: f64) -> f64 {
        self.absolute.max(self.relative * reference.abs())
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            absolute: Self::default_absolute(),
            relative: Self::default_relative(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Vec3Fixtures {
    dot: Vec<DotFixture>,
    subtract: Vec<BinaryFixture>,
    scale_and_add: Vec<ScaleAndAddFixture>,
    normalize: Vec<UnaryFixture>,
}

#[derive(Debug, Deserialize)]
struct DotFixture {
    a: [f64; 3],
    b: [f64; 3],
    expected: f64,
}

#[derive(Debug, Deserialize)]
struct BinaryFixture {
    a: [f64; 3],
    b: [f64; 3],
    expected: [f64; 3],
}

#[derive(Debug, Deserialize)]
struct ScaleAndAddFixture {
    a: [f64; 3],
    b: [f64; 3],
    scale: f64,
    expected: [f64; 3],
}

#[derive(Debug, Deserialize)]
struct UnaryFixture {
    value: [f64; 3],
    expected: [f64; 3],
}

#[derive(Debug, Deserialize)]
struct IntersectFixture {
    origin: [f64; 3],
    direction: [f64; 3],
    plane_normal: [f64; 3],
    plane_origin: [f64; 3],
    expected: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RotateFixture {
    point: [f64; 3],
    axis: [f64; 3],
    angle: f64,
    expected: [f64; 3],
}

fn assert_scalar(actual: f64, expected: f64, tol: &Tolerance, ctx: &str) {
    let diff = (actual - expected).abs();
    let allowed = tol.allowed_error(expected);
    assert!(
        diff <= allowed,
        "{ctx}: expected {expected}, got {actual} (diff {diff} > {allowed})"
    );
}

fn assert_vec3(actual: Vec3, expected: [f64; 3], tol: &Tolerance, ctx: &str) {
    for (i, (a, e)) in actual.to_array().iter().zip(expected.iter()).enumerate() {
        assert_scalar(*a, *e, tol, &format!("{ctx}[{i}]"));
    }
}

#[test]
fn vec3_primitives_match_fixtures() {
    let f = &*FIXTURES;
    let tol = &f.tolerance;

    for (i, fx) in f.vec3.dot.iter().enumerate() {
        let actual = math::dot(fx.a.into(), fx.b.into());
        assert_scalar(actual, fx.expected, tol, &format!("dot[{i}]"));
    }
    for (i, fx) in f.vec3.subtract.iter().enumerate() {
        let actual = math::subtract(fx.a.into(), fx.b.into());
        assert_vec3(actual, fx.expected, tol, &format!("subtract[{i}]"));
    }
    for (i, fx) in f.vec3.scale_and_add.iter().enumerate() {
        let actual = math::scale_and_add(fx.a.into(), fx.b.into(), fx.scale);
        assert_vec3(actual, fx.expected, tol, &format!("scale_and_add[{i}]"));
    }
    for (i, fx) in f.vec3.normalize.iter().enumerate() {
        let actual = math::normalize(fx.value.into());
        assert_vec3(actual, fx.expected, tol, &format!("normalize[{i}]"));
    }
}

#[test]
fn intersect_ray_plane_matches_fixtures() {
    let f = &*FIXTURES;
    for (i, fx) in f.intersect_ray_plane.iter().enumerate() {
        let actual = math::intersect_ray_plane(
            fx.origin.into(),
            fx.direction.into(),
            fx.plane_normal.into(),
            fx.plane_origin.into(),
        );
        let ctx = format!("intersect_ray_plane[{i}]");
        match (actual, fx.expected) {
            (Some(a), Some(e)) => assert_scalar(a, e, &f.tolerance, &ctx),
            (None, None) => {}
            (a, e) => panic!("{ctx}: expected {e:?}, got {a:?}"),
        }
    }
}

#[test]
fn rotate_around_matches_fixtures() {
    let f = &*FIXTURES;
    for (i, fx) in f.rotate_around.iter().enumerate() {
        let actual = math::rotate_around(fx.point.into(), fx.axis.into(), fx.angle);
        assert_vec3(
            actual,
            fx.expected,
            &f.tolerance,
            &format!("rotate_around[{i}]"),
        );
    }
}
