use core::ops::{Index, IndexMut, Mul};

use bytemuck::{Pod, Zeroable};

use crate::{Vec3, Vec4};

/// 4x4 matrix stored as `rows[row][col]`.
///
/// Vectors are column vectors multiplied on the right, so `A * B * v`
/// applies `B` first. Translation is stored in column 3.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Mat4 {
    rows: [[f32; 4]; 4],
}

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4::from_diagonal(1.0);

    /// Scaled identity: `d` on the diagonal, zero elsewhere.
    #[inline]
    pub const fn from_diagonal(d: f32) -> Self {
        Self {
            rows: [
                [d, 0.0, 0.0, 0.0],
                [0.0, d, 0.0, 0.0],
                [0.0, 0.0, d, 0.0],
                [0.0, 0.0, 0.0, d],
            ],
        }
    }

    /// Builds a matrix from explicit components, given row by row.
    #[inline]
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self { rows }
    }

    #[inline]
    pub fn col(&self, i: usize) -> Vec4 {
        Vec4::new(self.rows[0][i], self.rows[1][i], self.rows[2][i], self.rows[3][i])
    }

    #[inline]
    pub fn row(&self, i: usize) -> Vec4 {
        let r = self.rows[i];
        Vec4::new(r[0], r[1], r[2], r[3])
    }

    /// Translation component (column 3).
    #[inline]
    pub fn translation(&self) -> Vec3 {
        Vec3::from(self.col(3))
    }

    pub fn transpose(&self) -> Mat4 {
        let mut out = Mat4::from_diagonal(0.0);
        for r in 0..4 {
            for c in 0..4 {
                out.rows[c][r] = self.rows[r][c];
            }
        }
        out
    }

    pub fn determinant(&self) -> f32 {
        let (s, c) = self.minors();
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    /// Inverse by cofactor expansion.
    ///
    /// There is no error path: a singular matrix produces inf/NaN components.
    pub fn inverse(&self) -> Mat4 {
        let a = &self.rows;
        let (s, c) = self.minors();
        let det = s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0];
        let inv = 1.0 / det;

        let adj = [
            [
                a[1][1] * c[5] - a[1][2] * c[4] + a[1][3] * c[3],
                -a[0][1] * c[5] + a[0][2] * c[4] - a[0][3] * c[3],
                a[3][1] * s[5] - a[3][2] * s[4] + a[3][3] * s[3],
                -a[2][1] * s[5] + a[2][2] * s[4] - a[2][3] * s[3],
            ],
            [
                -a[1][0] * c[5] + a[1][2] * c[2] - a[1][3] * c[1],
                a[0][0] * c[5] - a[0][2] * c[2] + a[0][3] * c[1],
                -a[3][0] * s[5] + a[3][2] * s[2] - a[3][3] * s[1],
                a[2][0] * s[5] - a[2][2] * s[2] + a[2][3] * s[1],
            ],
            [
                a[1][0] * c[4] - a[1][1] * c[2] + a[1][3] * c[0],
                -a[0][0] * c[4] + a[0][1] * c[2] - a[0][3] * c[0],
                a[3][0] * s[4] - a[3][1] * s[2] + a[3][3] * s[0],
                -a[2][0] * s[4] + a[2][1] * s[2] - a[2][3] * s[0],
            ],
            [
                -a[1][0] * c[3] + a[1][1] * c[1] - a[1][2] * c[0],
                a[0][0] * c[3] - a[0][1] * c[1] + a[0][2] * c[0],
                -a[3][0] * s[3] + a[3][1] * s[1] - a[3][2] * s[0],
                a[2][0] * s[3] - a[2][1] * s[1] + a[2][2] * s[0],
            ],
        ];

        let mut out = Mat4::from_rows(adj);
        for row in out.rows.iter_mut() {
            for v in row.iter_mut() {
                *v *= inv;
            }
        }
        out
    }

    /// 2x2 minors of the top two rows (`s`) and bottom two rows (`c`).
    fn minors(&self) -> ([f32; 6], [f32; 6]) {
        let a = &self.rows;
        let s = [
            a[0][0] * a[1][1] - a[1][0] * a[0][1],
            a[0][0] * a[1][2] - a[1][0] * a[0][2],
            a[0][0] * a[1][3] - a[1][0] * a[0][3],
            a[0][1] * a[1][2] - a[1][1] * a[0][2],
            a[0][1] * a[1][3] - a[1][1] * a[0][3],
            a[0][2] * a[1][3] - a[1][2] * a[0][3],
        ];
        let c = [
            a[2][0] * a[3][1] - a[3][0] * a[2][1],
            a[2][0] * a[3][2] - a[3][0] * a[2][2],
            a[2][0] * a[3][3] - a[3][0] * a[2][3],
            a[2][1] * a[3][2] - a[3][1] * a[2][2],
            a[2][1] * a[3][3] - a[3][1] * a[2][3],
            a[2][2] * a[3][3] - a[3][2] * a[2][3],
        ];
        (s, c)
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Mat4::IDENTITY
    }
}

impl Index<(usize, usize)> for Mat4 {
    type Output = f32;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.rows[row][col]
    }
}

impl IndexMut<(usize, usize)> for Mat4 {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        &mut self.rows[row][col]
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        let mut out = Mat4::from_diagonal(0.0);
        for r in 0..4 {
            let row = self.row(r);
            for c in 0..4 {
                out.rows[r][c] = row.dot(rhs.col(c));
            }
        }
        out
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, v: Vec4) -> Vec4 {
        Vec4::new(self.row(0).dot(v), self.row(1).dot(v), self.row(2).dot(v), self.row(3).dot(v))
    }
}

/// Transforms a point (`w = 1`). No perspective divide.
impl Mul<Vec3> for Mat4 {
    type Output = Vec3;

    #[inline]
    fn mul(self, p: Vec3) -> Vec3 {
        Vec3::from(self * p.extend(1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_mat_eq(a: &Mat4, b: &Mat4, eps: f32) {
        for r in 0..4 {
            for c in 0..4 {
                assert_relative_eq!(a[(r, c)], b[(r, c)], epsilon = eps);
            }
        }
    }

    fn sample() -> Mat4 {
        Mat4::from_rows([
            [2.0, 0.5, 0.0, 3.0],
            [0.0, 1.5, -0.5, -1.0],
            [1.0, 0.0, 3.0, 2.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    #[test]
    fn inverse_of_identity_is_identity() {
        assert_eq!(Mat4::IDENTITY.inverse(), Mat4::IDENTITY);
    }

    #[test]
    fn inverse_times_matrix_is_identity() {
        let m = sample();
        assert_mat_eq(&(m.inverse() * m), &Mat4::IDENTITY, 1e-5);
        assert_mat_eq(&(m * m.inverse()), &Mat4::IDENTITY, 1e-5);
    }

    #[test]
    fn inverse_of_diagonal() {
        let inv = Mat4::from_diagonal(4.0).inverse();
        assert_mat_eq(&inv, &Mat4::from_diagonal(0.25), 1e-7);
    }

    #[test]
    fn singular_inverse_is_not_finite() {
        let inv = Mat4::from_diagonal(0.0).inverse();
        assert!(!inv[(0, 0)].is_finite());
    }

    #[test]
    fn determinant_of_scaled_identity() {
        assert_relative_eq!(Mat4::from_diagonal(2.0).determinant(), 16.0);
    }

    #[test]
    fn transpose_swaps_rows_and_cols() {
        let m = sample();
        let t = m.transpose();
        for i in 0..4 {
            assert_eq!(m.row(i), t.col(i));
        }
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn point_transform_applies_translation() {
        let mut m = Mat4::IDENTITY;
        m[(0, 3)] = 5.0;
        m[(2, 3)] = -1.0;
        assert_eq!(m * Vec3::new(1.0, 2.0, 3.0), Vec3::new(6.0, 2.0, 2.0));
        assert_eq!(m.translation(), Vec3::new(5.0, 0.0, -1.0));
    }

    #[test]
    fn multiply_applies_right_operand_first() {
        let mut t = Mat4::IDENTITY;
        t[(0, 3)] = 1.0;
        let s = Mat4::from_rows([
            [2.0, 0.0, 0.0, 0.0],
            [0.0, 2.0, 0.0, 0.0],
            [0.0, 0.0, 2.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        // Scale, then translate.
        assert_eq!((t * s) * Vec3::X, Vec3::new(3.0, 0.0, 0.0));
        // Translate, then scale.
        assert_eq!((s * t) * Vec3::X, Vec3::new(4.0, 0.0, 0.0));
    }
}
