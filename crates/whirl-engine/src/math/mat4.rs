use bytemuck::{Pod, Zeroable};

/// 4x4 matrix, column-major: column `c` occupies indices `4c..4c + 4`.
///
/// Stored exactly as the GPU consumes it (`mat4x4<f32>` in WGSL is
/// column-major), so a matrix can be written into a uniform buffer with
/// `bytemuck` and no reordering.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Mat4(pub [f32; 16]);

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    /// Combined rotation around the X, Y and Z axes (Rz · Ry · Rx, Z
    /// outermost), expanded into a single homogeneous matrix.
    ///
    /// Angles are radians and may take any value; nothing here normalizes or
    /// wraps them. Pure function: identical inputs produce bit-identical
    /// output.
    pub fn rotation(angle_x: f32, angle_y: f32, angle_z: f32) -> Mat4 {
        let (sx, cx) = angle_x.sin_cos();
        let (sy, cy) = angle_y.sin_cos();
        let (sz, cz) = angle_z.sin_cos();

        Mat4([
            // column 0
            cy * cz,
            sx * sy * cz - cx * sz,
            cx * sy * cz + sx * sz,
            0.0,
            // column 1
            cy * sz,
            sx * sy * sz + cx * cz,
            cx * sy * sz - sx * cz,
            0.0,
            // column 2
            -sy,
            sx * cy,
            cx * cy,
            0.0,
            // column 3
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }

    /// Raw column-major entries.
    #[inline]
    pub fn as_array(&self) -> &[f32; 16] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    /// Upper-left 3x3 column `c` of `m`.
    fn col3(m: &Mat4, c: usize) -> [f32; 3] {
        [m.0[4 * c], m.0[4 * c + 1], m.0[4 * c + 2]]
    }

    fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
        [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]
    }

    const SAMPLE_ANGLES: [(f32, f32, f32); 6] = [
        (0.0, 0.0, 0.0),
        (0.01, 0.02, 0.015),
        (1.0, 2.0, 3.0),
        (-0.7, 0.3, -2.5),
        (100.0, -250.0, 777.7),
        (std::f32::consts::PI, std::f32::consts::FRAC_PI_2, 0.0),
    ];

    // ── fixed homogeneous parts ───────────────────────────────────────────

    #[test]
    fn fourth_row_and_translation_column_are_fixed() {
        for (ax, ay, az) in SAMPLE_ANGLES {
            let m = Mat4::rotation(ax, ay, az);
            // Fourth row: indices 3, 7, 11, 15.
            assert_eq!(m.0[3], 0.0);
            assert_eq!(m.0[7], 0.0);
            assert_eq!(m.0[11], 0.0);
            assert_eq!(m.0[15], 1.0);
            // Translation column: indices 12, 13, 14.
            assert_eq!(m.0[12], 0.0);
            assert_eq!(m.0[13], 0.0);
            assert_eq!(m.0[14], 0.0);
        }
    }

    // ── identity ──────────────────────────────────────────────────────────

    #[test]
    fn zero_angles_yield_exact_identity() {
        assert_eq!(Mat4::rotation(0.0, 0.0, 0.0), Mat4::IDENTITY);
    }

    // ── orthonormality ────────────────────────────────────────────────────

    #[test]
    fn rotation_columns_are_unit_length() {
        for (ax, ay, az) in SAMPLE_ANGLES {
            let m = Mat4::rotation(ax, ay, az);
            for c in 0..3 {
                let col = col3(&m, c);
                let norm_sq = dot(col, col);
                assert!(
                    (norm_sq - 1.0).abs() < EPS,
                    "column {c} of rotation({ax}, {ay}, {az}) has |v|^2 = {norm_sq}"
                );
            }
        }
    }

    #[test]
    fn rotation_columns_are_pairwise_orthogonal() {
        for (ax, ay, az) in SAMPLE_ANGLES {
            let m = Mat4::rotation(ax, ay, az);
            for (a, b) in [(0, 1), (0, 2), (1, 2)] {
                let d = dot(col3(&m, a), col3(&m, b));
                assert!(
                    d.abs() < EPS,
                    "columns {a},{b} of rotation({ax}, {ay}, {az}) have dot {d}"
                );
            }
        }
    }

    #[test]
    fn rotation_preserves_handedness() {
        // cross(col0, col1) · col2 == +1 for a proper rotation.
        for (ax, ay, az) in SAMPLE_ANGLES {
            let m = Mat4::rotation(ax, ay, az);
            let det = dot(cross(col3(&m, 0), col3(&m, 1)), col3(&m, 2));
            assert!((det - 1.0).abs() < EPS);
        }
    }

    // ── determinism ───────────────────────────────────────────────────────

    #[test]
    fn recomputation_is_bit_identical() {
        let a = Mat4::rotation(0.31, -4.2, 123.456);
        let b = Mat4::rotation(0.31, -4.2, 123.456);
        for i in 0..16 {
            assert_eq!(a.0[i].to_bits(), b.0[i].to_bits(), "entry {i}");
        }
    }

    // ── expansion entries ─────────────────────────────────────────────────

    #[test]
    fn entries_match_documented_expansion() {
        let (ax, ay, az) = (0.4f32, -1.1f32, 2.6f32);
        let (sx, cx) = ax.sin_cos();
        let (sy, cy) = ay.sin_cos();
        let (sz, cz) = az.sin_cos();

        let m = Mat4::rotation(ax, ay, az);

        assert_eq!(m.0[0], cy * cz);
        assert_eq!(m.0[1], sx * sy * cz - cx * sz);
        assert_eq!(m.0[2], cx * sy * cz + sx * sz);
        assert_eq!(m.0[4], cy * sz);
        assert_eq!(m.0[5], sx * sy * sz + cx * cz);
        assert_eq!(m.0[6], cx * sy * sz - sx * cz);
        assert_eq!(m.0[8], -sy);
        assert_eq!(m.0[9], sx * cy);
        assert_eq!(m.0[10], cx * cy);
    }

    #[test]
    fn single_axis_rotation_leaves_that_axis_fixed() {
        // Rotating around X alone must keep the X basis vector in place.
        let m = Mat4::rotation(0.9, 0.0, 0.0);
        assert_eq!(col3(&m, 0), [1.0, 0.0, 0.0]);

        // Likewise Z-only rotation keeps the Z basis vector.
        let m = Mat4::rotation(0.0, 0.0, -1.3);
        assert_eq!(col3(&m, 2), [0.0, 0.0, 1.0]);
    }
}
