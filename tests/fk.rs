use armviz::arm::{Arm, INDUSTRIAL_RANGES};
use armviz::ui::{JointControls, DEFAULT_POSE_DEG};

const EPS: f32 = 1e-5;

#[test]
fn clamped_vector_maps_to_frame_rotations_exactly() {
    let mut arm = Arm::industrial();
    let requested = [200.0, -95.0, 150.0, -181.0, 45.0, 0.5];

    let clamped: Vec<f32> = requested
        .iter()
        .zip(&INDUSTRIAL_RANGES)
        .map(|(&v, r)| r.clamp(v))
        .collect();
    arm.set_angles_deg(&clamped);

    for (i, angle) in arm.joint_angles().iter().enumerate() {
        assert!(
            (angle - clamped[i].to_radians()).abs() < EPS,
            "joint {i}: {angle} vs {}",
            clamped[i].to_radians()
        );
    }
}

#[test]
fn controls_feed_the_arm_through_the_clamp() {
    let mut controls = JointControls::new(INDUSTRIAL_RANGES);
    let mut arm = Arm::industrial();

    *controls.input_mut(0) = "9999".to_string();
    controls.commit_input(0);
    controls.nudge(1, -200.0);
    arm.set_angles_deg(controls.angles());

    let angles = arm.joint_angles();
    assert!((angles[0] - 170.0_f32.to_radians()).abs() < EPS);
    assert!((angles[1] - (-90.0_f32).to_radians()).abs() < EPS);
}

#[test]
fn reset_restores_the_default_pose_end_to_end() {
    let mut controls = JointControls::new(INDUSTRIAL_RANGES);
    let mut arm = Arm::industrial();

    for i in 0..6 {
        controls.set_angle(i, 33.0);
    }
    controls.reset();
    arm.set_angles_deg(controls.angles());

    for (angle, deg) in arm.joint_angles().iter().zip(&DEFAULT_POSE_DEG) {
        assert!((angle - deg.to_radians()).abs() < EPS);
    }
}

#[test]
fn default_pose_bends_the_arm_forward() {
    let mut arm = Arm::industrial();
    let upright = arm.end_effector_transform().w_axis;
    arm.set_angles_deg(&DEFAULT_POSE_DEG);
    let bent = arm.end_effector_transform().w_axis;

    assert!(bent.y < upright.y);
    assert!(bent.truncate().length() > 0.1);
}
