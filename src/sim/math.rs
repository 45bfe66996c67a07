use super::types::Vec3;
use std::f64::consts::PI;

pub fn length(v: Vec3) -> f64 {
  (v.x * v.x + v.y * v.y + v.z * v.z).sqrt()
}

pub fn distance(a: Vec3, b: Vec3) -> f64 {
  length(sub(a, b))
}

pub fn normalize(v: Vec3) -> Vec3 {
  let len = length(v);
  if !len.is_finite() || len == 0.0 {
    return Vec3 { x: 0.0, y: 0.0, z: 0.0 };
  }
  Vec3 {
    x: v.x / len,
    y: v.y / len,
    z: v.z / len,
  }
}

pub fn dot(a: Vec3, b: Vec3) -> f64 {
  a.x * b.x + a.y * b.y + a.z * b.z
}

pub fn add(a: Vec3, b: Vec3) -> Vec3 {
  Vec3 {
    x: a.x + b.x,
    y: a.y + b.y,
    z: a.z + b.z,
  }
}

pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
  Vec3 {
    x: a.x - b.x,
    y: a.y - b.y,
    z: a.z - b.z,
  }
}

pub fn scale(v: Vec3, factor: f64) -> Vec3 {
  Vec3 {
    x: v.x * factor,
    y: v.y * factor,
    z: v.z * factor,
  }
}

pub fn lerp(a: Vec3, b: Vec3, t: f64) -> Vec3 {
  add(a, scale(sub(b, a), t))
}

/// Projection onto the ground plane. All steering happens on XZ.
pub fn horizontal(v: Vec3) -> Vec3 {
  Vec3 {
    x: v.x,
    y: 0.0,
    z: v.z,
  }
}

pub fn rotate_y(point: &mut Vec3, angle: f64) {
  let cos_a = angle.cos();
  let sin_a = angle.sin();
  let x = point.x;
  let z = point.z;
  point.x = cos_a * x + sin_a * z;
  point.z = -sin_a * x + cos_a * z;
}

/// Signed angle about the vertical axis from `from` to `to`, in radians,
/// such that `rotate_y(from, angle)` lands on `to`. Anti-parallel inputs
/// have no defined rotation direction; they resolve to +PI so callers
/// always make forward progress instead of stalling.
pub fn signed_angle_y(from: Vec3, to: Vec3) -> f64 {
  let a = normalize(horizontal(from));
  let b = normalize(horizontal(to));
  if length(a) == 0.0 || length(b) == 0.0 {
    return 0.0;
  }
  let cross_y = a.z * b.x - a.x * b.z;
  let dot_val = a.x * b.x + a.z * b.z;
  if dot_val < -1.0 + 1e-9 && cross_y.abs() < 1e-9 {
    return PI;
  }
  cross_y.atan2(dot_val)
}

pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
  value.min(max).max(min)
}
