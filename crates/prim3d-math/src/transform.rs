//! Composable transform builders.

use crate::{Mat4, Vec3};

/// Offset applied to `up` when it is parallel to the view direction.
const UP_NUDGE: f32 = 1.0e-2;

/// Returns `m * T(t)`: `t` is applied in `m`'s local space.
pub fn translate(m: &Mat4, t: Vec3) -> Mat4 {
    *m * Mat4::from_rows([
        [1.0, 0.0, 0.0, t.x],
        [0.0, 1.0, 0.0, t.y],
        [0.0, 0.0, 1.0, t.z],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns `m * R(axis, rads)`. `axis` must be unit length.
pub fn rotate(m: &Mat4, axis: Vec3, rads: f32) -> Mat4 {
    let (s, c) = rads.sin_cos();
    let rc = 1.0 - c;
    let Vec3 { x, y, z } = axis;

    *m * Mat4::from_rows([
        [x * x + (1.0 - x * x) * c, x * y * rc - z * s, x * z * rc + y * s, 0.0],
        [x * y * rc + z * s, y * y + (1.0 - y * y) * c, y * z * rc - x * s, 0.0],
        [x * z * rc - y * s, y * z * rc + x * s, z * z + (1.0 - z * z) * c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Orients a frame at `from` so that its local +Z points at `to`.
///
/// Columns 0..3 hold the orthonormal basis (x, y, z); column 3 holds `from`.
/// If the view direction is parallel to `up`, `up` is nudged along the world
/// axis least aligned with the view direction before the basis is derived.
pub fn look_at(from: Vec3, to: Vec3, up: Vec3) -> Mat4 {
    let z = (to - from).normalize();

    let up = if z.cross(up).length_squared() <= f32::EPSILON * up.length_squared() {
        up + least_aligned_axis(z) * UP_NUDGE
    } else {
        up
    };
    let y = (up - z * up.dot(z)).normalize();
    let x = y.cross(z);

    Mat4::from_rows([
        [x.x, y.x, z.x, from.x],
        [x.y, y.y, z.y, from.y],
        [x.z, y.z, z.z, from.z],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

fn least_aligned_axis(v: Vec3) -> Vec3 {
    let (ax, ay, az) = (v.x.abs(), v.y.abs(), v.z.abs());
    if ax <= ay && ax <= az {
        Vec3::X
    } else if ay <= az {
        Vec3::Y
    } else {
        Vec3::Z
    }
}
