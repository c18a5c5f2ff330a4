//! Column-major 4x4 matrices.
//!
//! Element `(row, col)` lives at index `col * 4 + row`, the layout OpenGL and
//! macroquad upload as-is. Every transform here uses column vectors, so
//! `multiply(a, b)` applies `b` first and `a` second.

use std::f32::consts::PI;
use std::ops::Mul;

use super::Vec3;
use crate::error::{ConfigError, GeometryError};

/// Lengths at or below this are treated as zero when building a view basis.
pub const DEGENERATE_EPSILON: f32 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat4(pub [f32; 16]);

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0, //
    ]);

    pub const ZERO: Mat4 = Mat4([0.0; 16]);

    #[inline]
    pub const fn get(&self, row: usize, col: usize) -> f32 {
        self.0[col * 4 + row]
    }

    pub const fn to_cols_array(&self) -> [f32; 16] {
        self.0
    }

    /// Translation column as a vector
    pub const fn translation(&self) -> Vec3 {
        Vec3::new(self.0[12], self.0[13], self.0[14])
    }

    /// Transform a point (w = 1) and return homogeneous clip coordinates
    pub fn transform_point(&self, p: Vec3) -> [f32; 4] {
        let m = &self.0;
        std::array::from_fn(|row| m[row] * p.x + m[4 + row] * p.y + m[8 + row] * p.z + m[12 + row])
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }

    /// Element-wise comparison within `eps`
    pub fn approx_eq(&self, other: &Mat4, eps: f32) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| (a - b).abs() <= eps)
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Mat4::IDENTITY
    }
}

impl Mul for Mat4 {
    type Output = Mat4;
    fn mul(self, rhs: Mat4) -> Mat4 {
        multiply(&self, &rhs)
    }
}

/// The 4x4 identity matrix
pub const fn identity() -> Mat4 {
    Mat4::IDENTITY
}

/// Standard matrix product `a * b`
pub fn multiply(a: &Mat4, b: &Mat4) -> Mat4 {
    let (a, b) = (&a.0, &b.0);
    Mat4(std::array::from_fn(|idx| {
        let (col, row) = (idx / 4, idx % 4);
        (0..4).map(|k| a[k * 4 + row] * b[col * 4 + k]).sum()
    }))
}

/// Copy of `matrix` with its translation column replaced by `offset`.
/// The upper 3x3 and bottom row are left untouched.
pub fn translate(matrix: &Mat4, offset: Vec3) -> Mat4 {
    let mut out = *matrix;
    out.0[12] = offset.x;
    out.0[13] = offset.y;
    out.0[14] = offset.z;
    out
}

/// Right-handed OpenGL perspective projection mapping view-space depth
/// `[-near, -far]` to NDC `[-1, 1]`.
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Result<Mat4, ConfigError> {
    let reason = if ![fov_y, aspect, near, far].iter().all(|v| v.is_finite()) {
        Some("parameters must be finite")
    } else if fov_y <= 0.0 || fov_y >= PI {
        Some("vertical field of view must be within (0, pi)")
    } else if aspect <= 0.0 {
        Some("aspect ratio must be positive")
    } else if near <= 0.0 {
        Some("near plane must be positive")
    } else if far <= near {
        Some("far plane must lie beyond the near plane")
    } else {
        None
    };
    if let Some(reason) = reason {
        return Err(ConfigError::InvalidProjection { reason });
    }

    let f = 1.0 / (fov_y / 2.0).tan();
    let nf = 1.0 / (near - far);

    let mut out = Mat4::ZERO;
    out.0[0] = f / aspect;
    out.0[5] = f;
    out.0[10] = (far + near) * nf;
    out.0[11] = -1.0;
    out.0[14] = 2.0 * far * near * nf;
    Ok(out)
}

/// View matrix for a camera at `eye` looking at `center`.
///
/// Rows of the rotation part are the orthonormal basis (right, up, back) and
/// the translation column is `-basis · eye`, so `eye` maps to the origin and
/// the camera looks down -Z.
pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Result<Mat4, GeometryError> {
    if !(eye.is_finite() && center.is_finite() && up.is_finite()) {
        return Err(GeometryError::NonFinite);
    }
    let back = (eye - center)
        .try_normalize(DEGENERATE_EPSILON)
        .ok_or(GeometryError::CoincidentEyeAndTarget)?;
    let right = up
        .cross(back)
        .try_normalize(DEGENERATE_EPSILON)
        .ok_or(GeometryError::UpParallelToView)?;
    let true_up = back.cross(right);

    Ok(Mat4([
        right.x, true_up.x, back.x, 0.0, //
        right.y, true_up.y, back.y, 0.0, //
        right.z, true_up.z, back.z, 0.0, //
        -right.dot(eye), -true_up.dot(eye), -back.dot(eye), 1.0, //
    ]))
}
