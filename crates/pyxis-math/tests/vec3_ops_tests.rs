// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use std::collections::{HashMap, HashSet};

use pyxis_math::prelude::*;
use pyxis_math::{clamp, MathError};

fn approx_eq(a: f32, b: f32) {
    let diff = (a - b).abs();
    assert!(diff <= 1e-5, "expected {b}, got {a} (diff {diff})");
}

#[test]
fn add_sub_mul_ops_work() {
    let a = Vec3::new(1.0, -2.0, 0.5);
    let b = Vec3::new(-3.0, 4.0, 1.5);
    assert_eq!((a + b).to_array(), [-2.0, 2.0, 2.0]);
    assert_eq!((a - b).to_array(), [4.0, -6.0, -1.0]);
    assert_eq!((a * 2.0).to_array(), [2.0, -4.0, 1.0]);
    assert_eq!((2.0 * a).to_array(), [2.0, -4.0, 1.0]);
    assert_eq!((a * -2.0).to_array(), [-2.0, 4.0, -1.0]);
    assert_eq!((-a).to_array(), [-1.0, 2.0, -0.5]);
}

#[test]
fn add_assign_sub_assign_mul_assign_work() {
    let mut v = Vec3::new(1.0, 2.0, 3.0);
    v += Vec3::new(-1.0, 1.0, 0.0);
    assert_eq!(v.to_array(), [0.0, 3.0, 3.0]);
    v -= Vec3::new(0.0, 1.0, 1.0);
    assert_eq!(v.to_array(), [0.0, 2.0, 2.0]);
    v *= 0.5;
    assert_eq!(v.to_array(), [0.0, 1.0, 1.0]);
}

#[test]
fn operands_mix_representations() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    let arr = [4.0_f32, 5.0, 6.0];
    let tup = (1.0_f32, 0.0_f32, 0.0_f32);
    assert_eq!(v.dot(&arr), 32.0);
    assert_eq!(arr.dot(&v), 32.0);
    assert_eq!(v.add(&tup), Vec3::new(2.0, 2.0, 3.0));
    assert_eq!(arr.subtract(&v), Vec3::new(3.0, 3.0, 3.0));
    assert_eq!(tup.cross(&[0.0_f32, 1.0, 0.0]), Vec3::UNIT_Z);
}

#[test]
fn add_xyz_and_add_scaled() {
    let v = Vec3::new(1.0, 1.0, 1.0);
    assert_eq!(v.add_xyz(1.0, -1.0, 2.0), Vec3::new(2.0, 0.0, 3.0));
    assert_eq!(
        v.add_scaled(&Vec3::new(2.0, 4.0, -2.0), 0.5),
        Vec3::new(2.0, 3.0, 0.0)
    );
    assert_eq!(
        v.mult_vec(&Vec3::new(2.0, 3.0, 4.0)),
        Vec3::new(2.0, 3.0, 4.0)
    );
}

#[test]
fn allocation_free_chain_reuses_one_output() {
    let a = Vec3::new(1.0, 0.0, 0.0);
    let b = Vec3::new(0.0, 2.0, 0.0);
    let mut scratch = Vec3::ZERO;
    let n = *a.cross_into(&b, &mut scratch);
    n.mult_into(0.5, &mut scratch);
    assert_eq!(scratch, Vec3::new(0.0, 0.0, 1.0));
}

#[test]
fn triple_product_is_signed_volume() {
    let vol = Vec3::UNIT_X.triple(&Vec3::UNIT_Y, &Vec3::UNIT_Z);
    assert_eq!(vol, 1.0);
    let flipped = Vec3::UNIT_X.triple(&Vec3::UNIT_Z, &Vec3::UNIT_Y);
    assert_eq!(flipped, -1.0);
    let a = Vec3::new(2.0, 0.0, 0.0);
    let b = Vec3::new(0.0, 3.0, 0.0);
    let c = Vec3::new(1.0, 1.0, 4.0);
    assert_eq!(a.triple(&b, &c), 24.0);
}

#[test]
fn lerp_extrapolates_outside_unit_interval() {
    let a = Vec3::ZERO;
    let b = Vec3::new(2.0, 4.0, -2.0);
    assert_eq!(a.lerp(&b, 0.5), Vec3::new(1.0, 2.0, -1.0));
    assert_eq!(a.lerp(&b, 2.0), Vec3::new(4.0, 8.0, -4.0));
    assert_eq!(a.lerp(&b, -1.0), Vec3::new(-2.0, -4.0, 2.0));
}

#[test]
fn metrics_on_a_3_4_12_triangle() {
    let a = Vec3::new(1.0, 1.0, 1.0);
    let b = Vec3::new(4.0, 5.0, 13.0);
    assert_eq!(a.distance_squared(&b), 169.0);
    assert_eq!(a.distance(&b), 13.0);
    assert_eq!(a.manhattan_distance(&b), 19.0);
    assert_eq!(Vec3::new(3.0, 4.0, 12.0).length(), 13.0);
    assert_eq!(Vec3::new(3.0, 4.0, 12.0).length_squared(), 169.0);
}

#[test]
fn normalize_yields_unit_length() {
    let n = Vec3::new(3.0, 4.0, 0.0).normalize();
    approx_eq(n.x(), 0.6);
    approx_eq(n.y(), 0.8);
    approx_eq(n.length(), 1.0);

    let mut local = Vec3::new(0.0, -5.0, 0.0);
    local.normalize_local();
    assert_eq!(local, Vec3::new(0.0, -1.0, 0.0));
}

#[test]
fn zero_length_normalize_propagates_nan() {
    let n = Vec3::ZERO.normalize();
    assert!(n.to_array().iter().all(|c| c.is_nan()));
}

#[test]
fn indexed_access_and_exports_agree() {
    let v = Vec3::new(7.0, 8.0, 9.0);
    assert_eq!(Vec3Ops::get(&v, 0), Ok(v.x()));
    assert_eq!(Vec3Ops::get(&v, 1), Ok(v.y()));
    assert_eq!(Vec3Ops::get(&v, 2), Ok(v.z()));
    assert_eq!(
        Vec3Ops::get(&v, 3),
        Err(MathError::IndexOutOfBounds { index: 3 })
    );

    let mut out = [0.0_f32; 3];
    v.get_into(&mut out);
    assert_eq!(out, [v.x(), v.y(), v.z()]);

    let mut buf: Vec<f32> = Vec::with_capacity(6);
    v.get_buf(&mut buf);
    Vec3::ONE.get_buf(&mut buf);
    assert_eq!(buf, [7.0, 8.0, 9.0, 1.0, 1.0, 1.0]);
}

#[test]
fn vectors_work_as_map_keys() {
    let mut seen = HashSet::new();
    assert!(seen.insert(Vec3::new(1.0, 2.0, 3.0)));
    assert!(!seen.insert(Vec3::new(1.0, 2.0, 3.0)));
    assert!(seen.insert(Vec3::new(3.0, 2.0, 1.0)));

    let mut names = HashMap::new();
    names.insert(Vec3::UNIT_X, "x");
    names.insert(Vec3::UNIT_Y, "y");
    assert_eq!(names.get(&Vec3::new(0.0, 1.0, 0.0)), Some(&"y"));
}

#[test]
fn bits_eq_spans_representations() {
    let v = Vec3::new(1.5, -2.0, 0.0);
    assert!(v.bits_eq(&[1.5_f32, -2.0, 0.0]));
    assert!(!v.bits_eq(&[1.5_f32, -2.0, -0.0]));
    assert_eq!(v.hash_code(), [1.5_f32, -2.0, 0.0].hash_code());
}

#[test]
fn display_and_conversions() {
    let v = Vec3::from([0.5, 2.0, -1.0]);
    assert_eq!(v.to_string(), "[0.5, 2.0, -1.0]");
    let arr: [f32; 3] = v.into();
    assert_eq!(arr, [0.5, 2.0, -1.0]);
    assert_eq!(Vec3::from((0.5, 2.0, -1.0)), v);
    assert_eq!(Vec3::from_xyz(&arr), v);
}

#[test]
fn vec3_basis_and_zero() {
    assert_eq!(Vec3::ZERO.to_array(), [0.0, 0.0, 0.0]);
    assert_eq!(Vec3::ONE.to_array(), [1.0, 1.0, 1.0]);
    assert_eq!(Vec3::UNIT_X.to_array(), [1.0, 0.0, 0.0]);
    assert_eq!(Vec3::UNIT_Y.to_array(), [0.0, 1.0, 0.0]);
    assert_eq!(Vec3::UNIT_Z.to_array(), [0.0, 0.0, 1.0]);
    assert_eq!(Vec3::default(), Vec3::ZERO);
}

#[test]
fn clamp_validates_range() {
    assert_eq!(clamp(5.0, 0.0, 1.0), Ok(1.0));
    assert_eq!(clamp(-5.0, 0.0, 1.0), Ok(0.0));
    assert_eq!(clamp(0.25, 0.0, 1.0), Ok(0.25));
    assert!(clamp(0.5, 1.0, 0.0).is_err());
    assert!(clamp(0.5, f32::NAN, 1.0).is_err());
    assert!(clamp(f32::NAN, 0.0, 1.0).is_ok_and(f32::is_nan));
}
