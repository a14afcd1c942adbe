use crate::arm::RangeTable;

/// Startup pose in degrees: slightly bent, elbow up.
pub const DEFAULT_POSE_DEG: [f32; 6] = [0.0, -45.0, 90.0, 0.0, -45.0, 0.0];

pub const JOINT_NAMES: [&str; 6] = ["Base", "Shoulder", "Elbow", "Wrist1", "Wrist2", "Wrist3"];

/// Validated joint angle state for the six input channels.
///
/// Every write path clamps into the injected range table, so `angles` is
/// always valid and is the value both displayed and forwarded to the arm.
/// The text buffers back the numeric entry fields; an unparseable commit
/// reverts the text to the last valid value without touching the angle.
#[derive(Debug, Clone)]
pub struct JointControls {
    ranges: RangeTable,
    angles: [f32; 6],
    inputs: [String; 6],
}

impl JointControls {
    pub fn new(ranges: RangeTable) -> Self {
        let mut controls = Self {
            ranges,
            angles: [0.0; 6],
            inputs: Default::default(),
        };
        controls.reset();
        controls
    }

    pub fn ranges(&self) -> &RangeTable {
        &self.ranges
    }

    pub fn angles(&self) -> &[f32; 6] {
        &self.angles
    }

    pub fn angle(&self, index: usize) -> f32 {
        self.angles[index]
    }

    pub fn input_mut(&mut self, index: usize) -> &mut String {
        &mut self.inputs[index]
    }

    pub fn input(&self, index: usize) -> &str {
        &self.inputs[index]
    }

    /// Clamp `degrees` into the channel's range and make it the new value.
    pub fn set_angle(&mut self, index: usize, degrees: f32) {
        let clamped = self.ranges[index].clamp(degrees);
        self.angles[index] = clamped;
        self.inputs[index] = format_angle(clamped);
    }

    /// Move the channel by `delta` degrees, clamped at the range bounds.
    pub fn nudge(&mut self, index: usize, delta: f32) {
        self.set_angle(index, self.angles[index] + delta);
    }

    /// Commit the channel's text buffer: parse, clamp, apply. Unparseable
    /// text snaps back to the last valid value.
    pub fn commit_input(&mut self, index: usize) {
        match self.inputs[index].trim().parse::<f32>() {
            Ok(value) if value.is_finite() => self.set_angle(index, value),
            _ => self.inputs[index] = format_angle(self.angles[index]),
        }
    }

    /// Restore the default pose on all six channels in one step.
    pub fn reset(&mut self) {
        for (i, &deg) in DEFAULT_POSE_DEG.iter().enumerate() {
            self.angles[i] = self.ranges[i].clamp(deg);
            self.inputs[i] = format_angle(self.angles[i]);
        }
    }
}

fn format_angle(degrees: f32) -> String {
    format!("{degrees:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arm::{FULL_TURN_RANGES, INDUSTRIAL_RANGES};

    #[test]
    fn starts_at_default_pose() {
        let controls = JointControls::new(INDUSTRIAL_RANGES);
        assert_eq!(controls.angles(), &DEFAULT_POSE_DEG);
        assert_eq!(controls.input(1), "-45.00");
    }

    #[test]
    fn set_angle_clamps_into_range() {
        let mut controls = JointControls::new(INDUSTRIAL_RANGES);
        controls.set_angle(1, 200.0);
        assert_eq!(controls.angle(1), 90.0);
        controls.set_angle(1, -91.0);
        assert_eq!(controls.angle(1), -90.0);
        controls.set_angle(1, 90.0);
        assert_eq!(controls.angle(1), 90.0);
    }

    #[test]
    fn commit_parses_and_clamps() {
        let mut controls = JointControls::new(INDUSTRIAL_RANGES);
        *controls.input_mut(2) = "151".to_string();
        controls.commit_input(2);
        assert_eq!(controls.angle(2), 150.0);
        assert_eq!(controls.input(2), "150.00");
    }

    #[test]
    fn unparseable_commit_reverts_text_and_keeps_value() {
        let mut controls = JointControls::new(INDUSTRIAL_RANGES);
        controls.set_angle(0, 12.0);

        *controls.input_mut(0) = "abc".to_string();
        controls.commit_input(0);
        assert_eq!(controls.angle(0), 12.0);
        assert_eq!(controls.input(0), "12.00");

        *controls.input_mut(0) = String::new();
        controls.commit_input(0);
        assert_eq!(controls.angle(0), 12.0);
        assert_eq!(controls.input(0), "12.00");
    }

    #[test]
    fn nonfinite_commit_is_rejected() {
        let mut controls = JointControls::new(FULL_TURN_RANGES);
        *controls.input_mut(3) = "NaN".to_string();
        controls.commit_input(3);
        assert_eq!(controls.angle(3), 0.0);
    }

    #[test]
    fn nudge_moves_one_degree_and_saturates() {
        let mut controls = JointControls::new(INDUSTRIAL_RANGES);
        controls.set_angle(4, 89.5);
        controls.nudge(4, 1.0);
        assert_eq!(controls.angle(4), 90.0);
        controls.nudge(4, 1.0);
        assert_eq!(controls.angle(4), 90.0);
        controls.nudge(4, -1.0);
        assert_eq!(controls.angle(4), 89.0);
    }

    #[test]
    fn reset_is_atomic_and_exact() {
        let mut controls = JointControls::new(FULL_TURN_RANGES);
        for i in 0..6 {
            controls.set_angle(i, 123.0);
        }
        *controls.input_mut(5) = "garbage".to_string();
        controls.reset();
        assert_eq!(controls.angles(), &DEFAULT_POSE_DEG);
        assert_eq!(controls.input(5), "0.00");
    }
}
