//! Joint angle input
//!
//! `JointControls` holds the validated per-channel state; the egui panel in
//! `panel` is a thin widget layer over it.

pub mod controls;
pub mod panel;

pub use controls::{JointControls, DEFAULT_POSE_DEG};
pub use panel::joint_panel;
