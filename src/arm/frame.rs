use super::part::Part;
use glam::{Mat4, Quat, Vec3};

/// The single rotation axis a joint frame is permitted to turn about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationAxis {
    X,
    Y,
    Z,
}

impl RotationAxis {
    pub fn unit(&self) -> Vec3 {
        match self {
            RotationAxis::X => Vec3::X,
            RotationAxis::Y => Vec3::Y,
            RotationAxis::Z => Vec3::Z,
        }
    }

    pub fn rotation(&self, angle: f32) -> Quat {
        match self {
            RotationAxis::X => Quat::from_rotation_x(angle),
            RotationAxis::Y => Quat::from_rotation_y(angle),
            RotationAxis::Z => Quat::from_rotation_z(angle),
        }
    }
}

/// One node of the kinematic chain.
///
/// A frame owns a fixed position offset relative to its parent frame, a
/// mutable rotation angle about its single assigned axis, and the rigid
/// geometry attached at this pivot. Rotating a frame carries every
/// descendant frame and its geometry with it via transform composition.
#[derive(Debug, Clone)]
pub struct Frame {
    pub name: &'static str,
    pub axis: RotationAxis,
    pub offset: Vec3,
    pub parts: Vec<Part>,
    angle: f32,
}

impl Frame {
    pub fn new(name: &'static str, axis: RotationAxis, offset: Vec3, parts: Vec<Part>) -> Self {
        Self {
            name,
            axis,
            offset,
            parts,
            angle: 0.0,
        }
    }

    /// Current rotation angle in radians.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub(crate) fn set_angle(&mut self, radians: f32) {
        self.angle = radians;
    }

    /// Local transform relative to the parent frame: the fixed offset
    /// followed by the rotation about the assigned axis.
    pub fn local_transform(&self) -> Mat4 {
        Mat4::from_translation(self.offset) * Mat4::from_quat(self.axis.rotation(self.angle))
    }
}
