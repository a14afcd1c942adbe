use super::frame::Frame;
use glam::Mat4;

/// The full kinematic chain: exactly six joint frames in strict ancestor
/// order J0..J5 (Base, Shoulder, Elbow, Wrist1, Wrist2, Wrist3).
///
/// Frame i is the sole child-bearing descendant of frame i-1, so the chain
/// is stored flat in ancestor order and addressed by index. The world
/// transform of frame i is the product of the local transforms of frames
/// 0..=i, which is how forward kinematics falls out of plain composition.
/// Angle application is the only mutation path.
#[derive(Debug, Clone)]
pub struct Arm {
    frames: [Frame; 6],
}

impl Arm {
    pub const DOF: usize = 6;

    pub(crate) fn from_frames(frames: [Frame; 6]) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Set each frame's rotation from a vector of angles in degrees.
    ///
    /// Angles are applied in chain order. A slice shorter than six updates
    /// only the available prefix; elements past the sixth are ignored. The
    /// input is trusted to be within range, clamping is the caller's job.
    pub fn set_angles_deg(&mut self, degrees: &[f32]) {
        for (frame, &deg) in self.frames.iter_mut().zip(degrees) {
            frame.set_angle(deg.to_radians());
        }
    }

    /// Current joint angles in radians, in chain order.
    pub fn joint_angles(&self) -> [f32; 6] {
        let mut out = [0.0; 6];
        for (o, frame) in out.iter_mut().zip(&self.frames) {
            *o = frame.angle();
        }
        out
    }

    /// World transform of every frame: the running product of local
    /// transforms down the chain.
    pub fn world_transforms(&self) -> [Mat4; 6] {
        let mut out = [Mat4::IDENTITY; 6];
        let mut acc = Mat4::IDENTITY;
        for (o, frame) in out.iter_mut().zip(&self.frames) {
            acc *= frame.local_transform();
            *o = acc;
        }
        out
    }

    /// World transform of the tool flange (Wrist3 frame).
    pub fn end_effector_transform(&self) -> Mat4 {
        self.world_transforms()[5]
    }
}

#[cfg(test)]
mod tests {
    use crate::arm::{Arm, RotationAxis};

    const EPS: f32 = 1e-5;

    #[test]
    fn six_frames_in_chain_order() {
        let arm = Arm::industrial();
        let names: Vec<_> = arm.frames().iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            ["base", "shoulder", "elbow", "wrist1", "wrist2", "wrist3"]
        );
        let axes: Vec<_> = arm.frames().iter().map(|f| f.axis).collect();
        assert_eq!(
            axes,
            [
                RotationAxis::Y,
                RotationAxis::X,
                RotationAxis::X,
                RotationAxis::Y,
                RotationAxis::X,
                RotationAxis::Y,
            ]
        );
    }

    #[test]
    fn building_twice_yields_independent_arms() {
        let mut a = Arm::industrial();
        let b = Arm::industrial();
        a.set_angles_deg(&[10.0, 20.0, 30.0, 40.0, 50.0, 60.0]);
        assert_eq!(b.joint_angles(), [0.0; 6]);
        assert!((a.joint_angles()[2] - 30.0_f32.to_radians()).abs() < EPS);
    }

    #[test]
    fn set_angles_converts_degrees_to_radians() {
        let mut arm = Arm::industrial();
        let degs = [0.0, -45.0, 90.0, 0.0, -45.0, 0.0];
        arm.set_angles_deg(&degs);
        for (angle, deg) in arm.joint_angles().iter().zip(&degs) {
            assert!((angle - deg.to_radians()).abs() < EPS);
        }
    }

    #[test]
    fn set_angles_is_idempotent() {
        let mut arm = Arm::industrial();
        let degs = [12.5, -30.0, 77.0, 150.0, -88.0, 179.0];
        arm.set_angles_deg(&degs);
        let first = arm.joint_angles();
        arm.set_angles_deg(&degs);
        assert_eq!(arm.joint_angles(), first);
    }

    #[test]
    fn short_input_updates_only_prefix() {
        let mut arm = Arm::industrial();
        arm.set_angles_deg(&[10.0, 20.0, 30.0, 40.0, 50.0, 60.0]);
        arm.set_angles_deg(&[5.0, 15.0]);
        let angles = arm.joint_angles();
        assert!((angles[0] - 5.0_f32.to_radians()).abs() < EPS);
        assert!((angles[1] - 15.0_f32.to_radians()).abs() < EPS);
        assert!((angles[2] - 30.0_f32.to_radians()).abs() < EPS);
    }

    #[test]
    fn excess_input_is_ignored() {
        let mut arm = Arm::industrial();
        arm.set_angles_deg(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 999.0, 999.0]);
        assert!((arm.joint_angles()[5] - 6.0_f32.to_radians()).abs() < EPS);
    }

    #[test]
    fn zero_pose_stacks_frames_upward() {
        let arm = Arm::industrial();
        let transforms = arm.world_transforms();
        let mut prev_y = -1.0;
        for t in &transforms {
            let y = t.w_axis.y;
            assert!(y > prev_y);
            assert!(t.w_axis.x.abs() < EPS);
            assert!(t.w_axis.z.abs() < EPS);
            prev_y = y;
        }
    }

    #[test]
    fn shoulder_pitch_carries_descendants() {
        let mut arm = Arm::industrial();
        let upright = arm.end_effector_transform().w_axis;
        let shoulder_y = arm.world_transforms()[1].w_axis.y;
        let reach = upright.y - shoulder_y;

        // Pitch the shoulder a quarter turn: everything above it swings
        // from +Y to +Z around the shoulder pivot.
        arm.set_angles_deg(&[0.0, 90.0, 0.0, 0.0, 0.0, 0.0]);
        let bent = arm.end_effector_transform().w_axis;
        assert!((bent.y - shoulder_y).abs() < 1e-4);
        assert!((bent.z - reach).abs() < 1e-4);
    }

    #[test]
    fn base_yaw_leaves_vertical_pose_in_place() {
        let mut arm = Arm::industrial();
        let before = arm.end_effector_transform().w_axis;
        arm.set_angles_deg(&[90.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let after = arm.end_effector_transform().w_axis;
        assert!((before.truncate() - after.truncate()).length() < 1e-4);
    }
}
