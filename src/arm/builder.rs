use super::frame::{Frame, RotationAxis};
use super::model::Arm;
use super::part::Part;
use glam::Vec3;

const LINK: [f32; 4] = [0.92, 0.92, 0.95, 1.0];
const JOINT: [f32; 4] = [0.35, 0.35, 0.38, 1.0];
const CAP: [f32; 4] = [0.92, 0.92, 0.95, 1.0];
const GRIPPER: [f32; 4] = [0.88, 0.88, 0.9, 1.0];
const PAD: [f32; 4] = [0.75, 0.75, 0.78, 1.0];

/// Fixed link lengths and radii of the arm, in meters. Proportions follow a
/// real industrial 6-axis arm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub base_height: f32,
    pub shoulder_link: f32,
    pub elbow_link: f32,
    pub wrist1_height: f32,
    pub wrist1_link: f32,
    pub wrist2_height: f32,
    pub wrist2_link: f32,
    pub wrist3_height: f32,
    pub joint_radius: f32,
    pub link_radius: f32,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            base_height: 0.4,
            shoulder_link: 1.0,
            elbow_link: 0.9,
            wrist1_height: 0.15,
            wrist1_link: 0.3,
            wrist2_height: 0.12,
            wrist2_link: 0.25,
            wrist3_height: 0.1,
            joint_radius: 0.15,
            link_radius: 0.195,
        }
    }
}

impl Arm {
    /// Build the six-frame industrial arm with default dimensions.
    pub fn industrial() -> Self {
        Self::with_dimensions(Dimensions::default())
    }

    /// Build the arm from an explicit dimension table.
    ///
    /// Pure construction: every call yields an independent chain at the
    /// zero pose. Each frame's offset equals the accumulated extents of its
    /// ancestors along the outward axis, so the frame origin sits at the
    /// physical pivot of the corresponding joint.
    pub fn with_dimensions(d: Dimensions) -> Self {
        let jr = d.joint_radius;
        let lr = d.link_radius;
        let plate_height = 0.12;
        let cap_height = 0.03;

        let shoulder_radius = jr * 1.8;
        let elbow_radius = jr * 1.7;
        let wrist2_radius = jr * 1.3;

        // J0: base turntable, yaw about Y. Plate on the ground, vertical
        // body, cap ring at the top where the shoulder mounts.
        let base = Frame::new(
            "base",
            RotationAxis::Y,
            Vec3::ZERO,
            vec![
                Part::cylinder(
                    jr * 3.0,
                    plate_height,
                    RotationAxis::Y,
                    Vec3::new(0.0, plate_height / 2.0, 0.0),
                    LINK,
                ),
                Part::cylinder(
                    jr * 2.2,
                    d.base_height,
                    RotationAxis::Y,
                    Vec3::new(0.0, d.base_height / 2.0 + plate_height, 0.0),
                    JOINT,
                ),
                Part::cylinder(
                    lr,
                    cap_height,
                    RotationAxis::Y,
                    Vec3::new(0.0, d.base_height + plate_height, 0.0),
                    CAP,
                ),
            ],
        );

        // J1: shoulder pitch about X. The joint body lies along the
        // rotation axis; the upper-arm link runs upward from the pivot.
        let shoulder = Frame::new(
            "shoulder",
            RotationAxis::X,
            Vec3::new(0.0, d.base_height + plate_height + shoulder_radius, 0.0),
            vec![
                Part::cylinder(shoulder_radius, 0.25, RotationAxis::X, Vec3::ZERO, JOINT),
                Part::cylinder(
                    lr,
                    d.shoulder_link,
                    RotationAxis::Y,
                    Vec3::new(0.0, shoulder_radius + d.shoulder_link / 2.0, 0.0),
                    LINK,
                ),
            ],
        );

        // J2: elbow pitch about X, seated at the end of the upper arm.
        let elbow = Frame::new(
            "elbow",
            RotationAxis::X,
            Vec3::new(0.0, shoulder_radius + d.shoulder_link + elbow_radius, 0.0),
            vec![
                Part::cylinder(elbow_radius, 0.22, RotationAxis::X, Vec3::ZERO, JOINT),
                Part::cylinder(
                    lr * 0.95,
                    d.elbow_link,
                    RotationAxis::Y,
                    Vec3::new(0.0, elbow_radius + d.elbow_link / 2.0, 0.0),
                    LINK,
                ),
            ],
        );

        // J3: wrist roll about Y at the end of the forearm.
        let wrist1 = Frame::new(
            "wrist1",
            RotationAxis::Y,
            Vec3::new(0.0, elbow_radius + d.elbow_link, 0.0),
            vec![
                Part::cylinder(
                    jr * 1.5,
                    d.wrist1_height,
                    RotationAxis::Y,
                    Vec3::new(0.0, d.wrist1_height / 2.0, 0.0),
                    JOINT,
                ),
                Part::cylinder(
                    lr,
                    cap_height,
                    RotationAxis::Y,
                    Vec3::new(0.0, d.wrist1_height, 0.0),
                    CAP,
                ),
                Part::cylinder(
                    jr * 1.3,
                    0.08,
                    RotationAxis::Y,
                    Vec3::new(0.0, -0.04, 0.0),
                    JOINT,
                ),
                Part::cylinder(
                    lr * 0.9,
                    d.wrist1_link,
                    RotationAxis::Y,
                    Vec3::new(0.0, d.wrist1_height + d.wrist1_link / 2.0, 0.0),
                    LINK,
                ),
            ],
        );

        // J4: wrist pitch about X.
        let wrist2 = Frame::new(
            "wrist2",
            RotationAxis::X,
            Vec3::new(0.0, d.wrist1_height + d.wrist1_link + wrist2_radius, 0.0),
            vec![
                Part::cylinder(
                    wrist2_radius,
                    d.wrist2_height,
                    RotationAxis::X,
                    Vec3::ZERO,
                    JOINT,
                ),
                Part::cylinder(
                    lr * 0.85,
                    d.wrist2_link,
                    RotationAxis::Y,
                    Vec3::new(0.0, wrist2_radius + d.wrist2_link / 2.0, 0.0),
                    LINK,
                ),
            ],
        );

        // J5: wrist roll about Y, carrying the gripper.
        let mut wrist3_parts = vec![
            Part::cylinder(
                jr * 1.2,
                d.wrist3_height,
                RotationAxis::Y,
                Vec3::new(0.0, d.wrist3_height / 2.0, 0.0),
                JOINT,
            ),
            Part::cylinder(
                lr,
                cap_height,
                RotationAxis::Y,
                Vec3::new(0.0, d.wrist3_height, 0.0),
                CAP,
            ),
            Part::cylinder(jr, 0.05, RotationAxis::Y, Vec3::new(0.0, -0.02, 0.0), JOINT),
        ];
        wrist3_parts.extend(gripper_parts(d.wrist3_height));

        let wrist3 = Frame::new(
            "wrist3",
            RotationAxis::Y,
            Vec3::new(0.0, wrist2_radius + d.wrist2_link, 0.0),
            wrist3_parts,
        );

        Arm::from_frames([base, shoulder, elbow, wrist1, wrist2, wrist3])
    }
}

/// Two-finger gripper mounted on top of the wrist3 body: a mounting block,
/// two fingers, and a rubber pad on the inside of each finger.
fn gripper_parts(mount_y: f32) -> Vec<Part> {
    vec![
        Part::cuboid(
            Vec3::new(0.30, 0.12, 0.2),
            Vec3::new(0.0, mount_y + 0.06, 0.0),
            GRIPPER,
        ),
        Part::cuboid(
            Vec3::new(0.05, 0.30, 0.08),
            Vec3::new(-0.10, mount_y + 0.24, 0.0),
            GRIPPER,
        ),
        Part::cuboid(
            Vec3::new(0.05, 0.30, 0.08),
            Vec3::new(0.10, mount_y + 0.24, 0.0),
            GRIPPER,
        ),
        Part::cuboid(
            Vec3::new(0.036, 0.24, 0.07),
            Vec3::new(-0.08, mount_y + 0.24, 0.0),
            PAD,
        ),
        Part::cuboid(
            Vec3::new(0.036, 0.24, 0.07),
            Vec3::new(0.08, mount_y + 0.24, 0.0),
            PAD,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_frame_carries_geometry() {
        let arm = Arm::industrial();
        for frame in arm.frames() {
            assert!(!frame.parts.is_empty(), "{} has no parts", frame.name);
        }
    }

    #[test]
    fn offsets_accumulate_ancestor_extents() {
        let d = Dimensions::default();
        let arm = Arm::with_dimensions(d);
        let frames = arm.frames();

        assert_eq!(frames[0].offset, Vec3::ZERO);
        let shoulder_y = d.base_height + 0.12 + d.joint_radius * 1.8;
        assert!((frames[1].offset.y - shoulder_y).abs() < 1e-6);
        let elbow_y = d.joint_radius * 1.8 + d.shoulder_link + d.joint_radius * 1.7;
        assert!((frames[2].offset.y - elbow_y).abs() < 1e-6);
        let wrist1_y = d.joint_radius * 1.7 + d.elbow_link;
        assert!((frames[3].offset.y - wrist1_y).abs() < 1e-6);
        let wrist2_y = d.wrist1_height + d.wrist1_link + d.joint_radius * 1.3;
        assert!((frames[4].offset.y - wrist2_y).abs() < 1e-6);
        let wrist3_y = d.joint_radius * 1.3 + d.wrist2_link;
        assert!((frames[5].offset.y - wrist3_y).abs() < 1e-6);
    }

    #[test]
    fn custom_dimensions_flow_into_offsets() {
        let d = Dimensions {
            shoulder_link: 2.0,
            ..Dimensions::default()
        };
        let arm = Arm::with_dimensions(d);
        let expected = d.joint_radius * 1.8 + 2.0 + d.joint_radius * 1.7;
        assert!((arm.frames()[2].offset.y - expected).abs() < 1e-6);
    }
}
