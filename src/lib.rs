//! # armviz
//!
//! Interactive 3D visualization of a 6-axis articulated robot arm with
//! WebGPU rendering.
//!
//! ## Features
//! - Procedural six-frame arm model with per-joint geometry
//! - Forward kinematics via transform composition down the frame chain
//! - Clamped per-joint angle input (sliders, ±1° steps, numeric entry)
//! - Orbit camera with damping
//!
//! ## Example
//! ```rust
//! use armviz::arm::Arm;
//!
//! let mut arm = Arm::industrial();
//! arm.set_angles_deg(&[0.0, -45.0, 90.0, 0.0, -45.0, 0.0]);
//! let tool = arm.end_effector_transform();
//! println!("tool position: {}", tool.w_axis.truncate());
//! ```

pub mod arm;
pub mod render;
pub mod ui;

pub use arm::{Arm, Dimensions, Frame, JointRange, Part, PartShape, RangeTable, RotationAxis};
pub use arm::{FULL_TURN_RANGES, INDUSTRIAL_RANGES};
pub use ui::{JointControls, DEFAULT_POSE_DEG};
