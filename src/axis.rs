//! Axis projection model
//!
//! Pure math mapping a 3D bounding volume onto one of the three orthogonal
//! image planes. Each axis selects which pair of coordinates forms the 2D
//! output plane; the remaining coordinate becomes the camera's view
//! direction. Cameras look along their local `-Z`, matching the transform
//! convention used by the rest of the pipeline.

use glam::{Mat3, Quat, Vec3};
use std::f32::consts::FRAC_PI_2;

use crate::bounds::Bounds;

/// Clearance between the content's far extent and the camera, in scene
/// units. Divided by the downscale factor so the camera stays outside the
/// shrunk scene.
const CAMERA_CLEARANCE: f32 = 1.0;

/// Selects which coordinate pair forms the output image plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AxisType {
    /// Top-down plan: x/z in plane, camera looks straight down `-Y`.
    #[default]
    Xz,
    /// Front elevation: x/y in plane, camera looks along `-Z`.
    Xy,
    /// Side elevation: y/z in plane, camera looks along `-X`.
    Yz,
}

impl AxisType {
    /// Projects a bounding volume onto this axis' image plane.
    pub fn project(self, bounds: &Bounds) -> AxisProjection {
        let (width_min, width_max, height_min, height_max, depth_distance) = match self {
            AxisType::Xz => (
                bounds.min.x,
                bounds.max.x,
                bounds.min.z,
                bounds.max.z,
                bounds.max.y,
            ),
            AxisType::Xy => (
                bounds.min.x,
                bounds.max.x,
                bounds.min.y,
                bounds.max.y,
                bounds.max.z,
            ),
            AxisType::Yz => (
                bounds.min.y,
                bounds.max.y,
                bounds.min.z,
                bounds.max.z,
                bounds.max.x,
            ),
        };
        AxisProjection {
            axis: self,
            width_min,
            width_max,
            height_min,
            height_max,
            depth_distance,
        }
    }

    /// The fixed camera orientation for this axis.
    ///
    /// One constant rotation per axis, chosen so the camera (looking along
    /// its local `-Z`) faces the content plane and produces an upright,
    /// non-mirrored image of it.
    pub fn camera_rotation(self) -> Quat {
        match self {
            AxisType::Xz => Quat::from_rotation_x(-FRAC_PI_2),
            AxisType::Xy => Quat::IDENTITY,
            // Cyclic basis permutation: local X -> +Y, Y -> +Z, Z -> +X.
            AxisType::Yz => Quat::from_mat3(&Mat3::from_cols(Vec3::Y, Vec3::Z, Vec3::X)),
        }
    }

    /// World direction the camera views along for this axis.
    pub fn view_direction(self) -> Vec3 {
        match self {
            AxisType::Xz => Vec3::NEG_Y,
            AxisType::Xy => Vec3::NEG_Z,
            AxisType::Yz => Vec3::NEG_X,
        }
    }
}

/// A bounding volume flattened onto an axis' image plane: in-plane extents
/// plus the out-of-plane distance used to place the camera beyond the
/// content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisProjection {
    pub axis: AxisType,
    pub width_min: f32,
    pub width_max: f32,
    pub height_min: f32,
    pub height_max: f32,
    /// Content's far extent along the camera axis.
    pub depth_distance: f32,
}

impl AxisProjection {
    /// In-plane width. An empty source volume projects to zero.
    #[inline]
    pub fn width(&self) -> f32 {
        (self.width_max - self.width_min).max(0.0)
    }

    /// In-plane height. An empty source volume projects to zero.
    #[inline]
    pub fn height(&self) -> f32 {
        (self.height_max - self.height_min).max(0.0)
    }

    /// The fixed camera orientation for the projected axis.
    #[inline]
    pub fn camera_rotation(&self) -> Quat {
        self.axis.camera_rotation()
    }

    /// Camera placement: centered on the in-plane midpoint, offset beyond
    /// the content along the camera axis. `norm` is the downscale factor
    /// applied to the scene root (1.0 when no downscale happened); the
    /// clearance is divided by it so the camera clears the shrunk content.
    pub fn camera_position(&self, norm: f32) -> Vec3 {
        let a = self.width_min + self.width() * 0.5;
        let b = self.height_min + self.height() * 0.5;
        let depth = self.depth_distance + CAMERA_CLEARANCE / norm;
        match self.axis {
            AxisType::Xz => Vec3::new(a, depth, b),
            AxisType::Xy => Vec3::new(a, b, depth),
            AxisType::Yz => Vec3::new(depth, a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bounds() -> Bounds {
        Bounds::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 6.0, 9.0))
    }

    fn assert_vec3_eq(actual: Vec3, expected: Vec3) {
        assert!(
            (actual - expected).length() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn xz_projects_ground_plane() {
        let projection = AxisType::Xz.project(&sample_bounds());
        assert_eq!(projection.width(), 3.0);
        assert_eq!(projection.height(), 6.0);
        assert_eq!(projection.depth_distance, 6.0);
    }

    #[test]
    fn xy_projects_front_plane() {
        let projection = AxisType::Xy.project(&sample_bounds());
        assert_eq!(projection.width(), 3.0);
        assert_eq!(projection.height(), 4.0);
        assert_eq!(projection.depth_distance, 9.0);
    }

    #[test]
    fn yz_projects_side_plane() {
        let projection = AxisType::Yz.project(&sample_bounds());
        assert_eq!(projection.width(), 4.0);
        assert_eq!(projection.height(), 6.0);
        assert_eq!(projection.depth_distance, 4.0);
    }

    #[test]
    fn camera_rotation_faces_view_direction() {
        for axis in [AxisType::Xz, AxisType::Xy, AxisType::Yz] {
            let forward = axis.camera_rotation() * Vec3::NEG_Z;
            assert_vec3_eq(forward, axis.view_direction());
        }
    }

    #[test]
    fn camera_rotation_is_fixed_per_axis() {
        // Rotation depends on the axis only, never on the content.
        let small = AxisType::Xz.project(&Bounds::new(Vec3::ZERO, Vec3::ONE));
        let large = AxisType::Xz.project(&Bounds::new(Vec3::ZERO, Vec3::splat(1000.0)));
        assert_eq!(small.camera_rotation(), large.camera_rotation());
    }

    #[test]
    fn camera_centered_beyond_content() {
        let projection = AxisType::Xz.project(&sample_bounds());
        assert_vec3_eq(projection.camera_position(1.0), Vec3::new(2.5, 7.0, 6.0));

        let projection = AxisType::Xy.project(&sample_bounds());
        assert_vec3_eq(projection.camera_position(1.0), Vec3::new(2.5, 4.0, 10.0));

        let projection = AxisType::Yz.project(&sample_bounds());
        assert_vec3_eq(projection.camera_position(1.0), Vec3::new(5.0, 4.0, 6.0));
    }

    #[test]
    fn camera_clearance_compensates_for_downscale() {
        let projection = AxisType::Xz.project(&sample_bounds());
        let position = projection.camera_position(0.25);
        assert_vec3_eq(position, Vec3::new(2.5, 6.0 + 4.0, 6.0));
    }

    #[test]
    fn empty_bounds_project_to_zero_extents() {
        let projection = AxisType::Xz.project(&Bounds::EMPTY);
        assert_eq!(projection.width(), 0.0);
        assert_eq!(projection.height(), 0.0);
    }

    #[test]
    fn projection_scales_with_content() {
        for axis in [AxisType::Xz, AxisType::Xy, AxisType::Yz] {
            let base = axis.project(&sample_bounds());
            let scaled = axis.project(&Bounds::new(
                sample_bounds().min * 10.0,
                sample_bounds().max * 10.0,
            ));
            assert!(base.width() > 0.0 && base.height() > 0.0);
            assert!((scaled.width() - base.width() * 10.0).abs() < 1e-3);
            assert!((scaled.height() - base.height() * 10.0).abs() < 1e-3);
        }
    }
}
