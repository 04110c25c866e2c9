//! ConePathPlanning - local path planning between track boundary cones
//!
//! This crate plans a short path ahead of a vehicle from its pose and a
//! single snapshot of left/right boundary cones, plus gnuplot helpers to
//! draw the result.

// Core modules
pub mod common;
pub mod utils;

// Algorithm modules
pub mod path_planning;

// Re-export common types for convenience
pub use common::{Point2D, Pose2D, Path2D, Cone, ConeSide};
pub use common::{LocalPathPlanner, Visualizable};
pub use common::{RoboticsError, RoboticsResult};
pub use path_planning::cone_path::{generate_path, ConePathConfig, ConePathPlanner, ConePathResult};
