//! Sample points for field vectors
//!
//! The field views draw arrows with their tails on a ring around the primary,
//! in the xy plane, the first one on +x.

use std::f64::consts::TAU;

use super::states::NVec3;

/// `count` points evenly spaced on a circle of `radius` around `center`
pub fn ring_points(center: NVec3, radius: f64, count: usize) -> Vec<NVec3> {
    (0..count).map(|i| center + radius * ring_direction(i, count)).collect()
}

/// Like [`ring_points`], but every surface point is followed by an interior
/// point at half the radius along the same direction
pub fn ring_points_with_interior(center: NVec3, radius: f64, count: usize) -> Vec<NVec3> {
    let mut points = Vec::with_capacity(2 * count);
    for i in 0..count {
        let r = radius * ring_direction(i, count);
        points.push(center + r);
        points.push(center + 0.5 * r);
    }
    points
}

fn ring_direction(i: usize, count: usize) -> NVec3 {
    let angle = TAU * i as f64 / count as f64;
    NVec3::new(angle.cos(), angle.sin(), 0.0)
}
