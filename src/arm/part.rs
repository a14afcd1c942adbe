use super::frame::RotationAxis;
use glam::{Mat4, Quat, Vec3};
use std::f32::consts::FRAC_PI_2;

/// Shape of a rigid visual primitive, in unit dimensions before scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PartShape {
    /// Cylinder along the local Y axis before orientation is applied.
    Cylinder { radius: f32, height: f32 },
    /// Axis-aligned box with full extents `size`.
    Cuboid { size: Vec3 },
}

/// A static visual primitive positioned relative to its frame's origin.
///
/// Purely presentational; never mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Part {
    pub shape: PartShape,
    pub position: Vec3,
    pub orientation: Quat,
    pub color: [f32; 4],
}

impl Part {
    /// Cylinder laid along `axis`, centered at `position`.
    pub fn cylinder(
        radius: f32,
        height: f32,
        axis: RotationAxis,
        position: Vec3,
        color: [f32; 4],
    ) -> Self {
        // The unit cylinder mesh runs along Y; lay it over for X or Z.
        let orientation = match axis {
            RotationAxis::X => Quat::from_rotation_z(FRAC_PI_2),
            RotationAxis::Y => Quat::IDENTITY,
            RotationAxis::Z => Quat::from_rotation_x(FRAC_PI_2),
        };
        Self {
            shape: PartShape::Cylinder { radius, height },
            position,
            orientation,
            color,
        }
    }

    pub fn cuboid(size: Vec3, position: Vec3, color: [f32; 4]) -> Self {
        Self {
            shape: PartShape::Cuboid { size },
            position,
            orientation: Quat::IDENTITY,
            color,
        }
    }

    /// Model matrix relative to the owning frame, including shape scale.
    pub fn local_matrix(&self) -> Mat4 {
        let scale = match self.shape {
            PartShape::Cylinder { radius, height } => Vec3::new(radius, height, radius),
            PartShape::Cuboid { size } => size,
        };
        Mat4::from_translation(self.position) * Mat4::from_quat(self.orientation) * Mat4::from_scale(scale)
    }
}
