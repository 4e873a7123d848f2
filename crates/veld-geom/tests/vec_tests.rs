use veld_geom::{Vec2, Vec3};

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn vec3_approx_eq(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps) && approx_eq(a.z, b.z, eps)
}

#[test]
fn vec3_constants() {
    assert!(vec3_approx_eq(Vec3::ZERO, Vec3::new(0.0, 0.0, 0.0), 1e-6));
    assert!(vec3_approx_eq(Vec3::UP, Vec3::new(0.0, 1.0, 0.0), 1e-6));
}

#[test]
fn vec3_add_sub_assign_forms() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(-4.0, 5.0, -6.0);
    assert!(vec3_approx_eq(a + b, Vec3::new(-3.0, 7.0, -3.0), 1e-6));
    assert!(vec3_approx_eq((a + b) - a, b, 1e-6));

    let mut v = Vec3::new(1.0, 1.0, 1.0);
    v += Vec3::new(2.0, 3.0, 4.0);
    assert!(vec3_approx_eq(v, Vec3::new(3.0, 4.0, 5.0), 1e-6));
    v -= Vec3::new(1.0, 2.0, 3.0);
    assert!(vec3_approx_eq(v, Vec3::new(2.0, 2.0, 2.0), 1e-6));
}

#[test]
fn vec3_scalar_mul_div() {
    let v = Vec3::new(1.5, -2.0, 4.0);
    assert!(vec3_approx_eq(v * 2.0, Vec3::new(3.0, -4.0, 8.0), 1e-6));
    assert!(vec3_approx_eq((v * 2.0) / 2.0, v, 1e-6));
}

#[test]
fn vec3_dot_length_normalized() {
    let v = Vec3::new(3.0, 4.0, 0.0);
    assert!(approx_eq(v.dot(v), 25.0, 1e-6));
    assert!(approx_eq(v.length(), 5.0, 1e-6));

    let n = v.normalized();
    assert!(approx_eq(n.length(), 1.0, 1e-6));
    assert!(vec3_approx_eq(n, Vec3::new(0.6, 0.8, 0.0), 1e-6));
}

#[test]
fn vec3_normalized_zero_is_noop() {
    // Accumulated face normals can cancel to exactly zero; that sum must
    // stay zero instead of becoming NaN.
    let zn = Vec3::ZERO.normalized();
    assert!(vec3_approx_eq(zn, Vec3::ZERO, 1e-6));
    assert!(zn.x.is_finite() && zn.y.is_finite() && zn.z.is_finite());
}

#[test]
fn vec3_cross_basis_and_orthogonality() {
    let i = Vec3::new(1.0, 0.0, 0.0);
    let j = Vec3::new(0.0, 1.0, 0.0);
    let k = Vec3::new(0.0, 0.0, 1.0);
    assert!(vec3_approx_eq(i.cross(j), k, 1e-6));
    assert!(vec3_approx_eq(j.cross(k), i, 1e-6));
    assert!(vec3_approx_eq(k.cross(i), j, 1e-6));

    let a = Vec3::new(2.0, -1.0, 3.0);
    let b = Vec3::new(-4.0, 0.5, 1.0);
    let c = a.cross(b);
    assert!(approx_eq(a.dot(c), 0.0, 1e-6));
    assert!(approx_eq(b.dot(c), 0.0, 1e-6));
}

#[test]
fn vec2_new_and_fields() {
    let uv = Vec2::new(0.24, 0.5);
    assert!(approx_eq(uv.x, 0.24, 1e-6));
    assert!(approx_eq(uv.y, 0.5, 1e-6));
    assert_eq!(Vec2::default(), Vec2::new(0.0, 0.0));
}
