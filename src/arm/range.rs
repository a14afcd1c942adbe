/// Inclusive angle range for one joint, in degrees. `min < max` always.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointRange {
    pub min: f32,
    pub max: f32,
}

impl JointRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, degrees: f32) -> f32 {
        degrees.clamp(self.min, self.max)
    }

    pub fn contains(&self, degrees: f32) -> bool {
        degrees >= self.min && degrees <= self.max
    }
}

/// One range per joint, ordered J0..J5.
pub type RangeTable = [JointRange; 6];

/// Realistic industrial limits: base and wrist rolls near full turn, pitch
/// joints restricted.
pub const INDUSTRIAL_RANGES: RangeTable = [
    JointRange::new(-170.0, 170.0),
    JointRange::new(-90.0, 90.0),
    JointRange::new(-150.0, 150.0),
    JointRange::new(-180.0, 180.0),
    JointRange::new(-90.0, 90.0),
    JointRange::new(-180.0, 180.0),
];

/// Permissive table: every joint free over a full turn.
pub const FULL_TURN_RANGES: RangeTable = [JointRange::new(-180.0, 180.0); 6];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_accepts_bounds_unchanged() {
        let r = JointRange::new(-90.0, 90.0);
        assert_eq!(r.clamp(-90.0), -90.0);
        assert_eq!(r.clamp(90.0), 90.0);
        assert_eq!(r.clamp(0.0), 0.0);
    }

    #[test]
    fn clamp_snaps_one_past_bound() {
        let r = JointRange::new(-150.0, 150.0);
        assert_eq!(r.clamp(-151.0), -150.0);
        assert_eq!(r.clamp(151.0), 150.0);
    }

    #[test]
    fn tables_are_well_formed() {
        for r in INDUSTRIAL_RANGES.iter().chain(FULL_TURN_RANGES.iter()) {
            assert!(r.min < r.max);
        }
    }
}
