//! Raw path construction from the vehicle position and centerline target

use crate::common::{Path2D, Point2D, Pose2D};

/// Build the raw three-point path: vehicle position, centerline target,
/// and the target pushed `lookahead` further along the vehicle heading.
pub fn extend_path(pose: &Pose2D, target: Point2D, lookahead: f64) -> Path2D {
    let forward = Point2D::from(target.to_vector() + pose.heading() * lookahead);

    Path2D::from_points(vec![pose.position(), target, forward])
}
