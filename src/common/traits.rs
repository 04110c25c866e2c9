//! Common traits defining interfaces for the planner

use crate::common::types::*;

/// Trait for single-shot local planners that turn one perception snapshot
/// into a short path ahead of the vehicle
pub trait LocalPathPlanner {
    /// Plan a path from the current pose and the detected cones
    fn generate_path(&self, pose: &Pose2D, cones: &[Cone]) -> Path2D;
}

/// Trait for visualizable results
pub trait Visualizable {
    /// Draw current state to visualizer
    fn visualize(&self, vis: &mut crate::utils::Visualizer);
}
