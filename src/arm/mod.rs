//! 6-axis arm model
//!
//! This module contains the kinematic frame chain, joint range tables, and
//! the procedural model builder.

pub mod builder;
pub mod frame;
pub mod model;
pub mod part;
pub mod range;

pub use builder::Dimensions;
pub use frame::{Frame, RotationAxis};
pub use model::Arm;
pub use part::{Part, PartShape};
pub use range::{JointRange, RangeTable, FULL_TURN_RANGES, INDUSTRIAL_RANGES};
