//! Local track centerline estimation from partial boundary information
//!
//! With both boundaries visible the target is the midpoint between the
//! left and right cone centroids. With a single boundary the centroid is
//! shifted by half the track width perpendicular to the vehicle heading,
//! which assumes the track runs parallel to the vehicle. With no cones the
//! target is projected straight ahead.

use log::trace;

use crate::common::{Point2D, Pose2D};

use super::classifier::ClassifiedCones;

/// Which branch of the estimator produced the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenterlineSource {
    BothSides,
    LeftOnly,
    RightOnly,
    /// No cones, straight ahead along the heading
    DeadReckoning,
}

/// Centerline target point and how it was obtained
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterlineEstimate {
    pub target: Point2D,
    pub source: CenterlineSource,
}

/// Estimate one point on the track centerline ahead of the vehicle
pub fn estimate_centerline(
    cones: &ClassifiedCones,
    pose: &Pose2D,
    track_width: f64,
    lookahead: f64,
) -> CenterlineEstimate {
    let half_width = track_width / 2.0;
    let left = Point2D::centroid(&cones.left);
    let right = Point2D::centroid(&cones.right);

    let (target, source) = match (left, right) {
        (Some(l), Some(r)) => {
            let mid = (l.to_vector() + r.to_vector()) / 2.0;
            (mid, CenterlineSource::BothSides)
        }
        // Left boundary only, shift toward the right
        (Some(l), None) => {
            let shifted = l.to_vector() - pose.left_normal() * half_width;
            (shifted, CenterlineSource::LeftOnly)
        }
        (None, Some(r)) => {
            let shifted = r.to_vector() + pose.left_normal() * half_width;
            (shifted, CenterlineSource::RightOnly)
        }
        (None, None) => {
            let ahead = pose.position().to_vector() + pose.heading() * lookahead;
            (ahead, CenterlineSource::DeadReckoning)
        }
    };

    let target = Point2D::from(target);
    trace!("centerline target ({:.3}, {:.3}) from {:?}", target.x, target.y, source);

    CenterlineEstimate { target, source }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    fn classified(left: &[(f64, f64)], right: &[(f64, f64)]) -> ClassifiedCones {
        ClassifiedCones {
            left: left.iter().map(|&p| Point2D::from(p)).collect(),
            right: right.iter().map(|&p| Point2D::from(p)).collect(),
        }
    }

    #[test]
    fn test_both_sides_midpoint() {
        let cones = classified(&[(1.0, 1.0)], &[(1.0, -1.0)]);
        let est = estimate_centerline(&cones, &Pose2D::origin(), 3.0, 3.0);

        assert_eq!(est.source, CenterlineSource::BothSides);
        assert_abs_diff_eq!(est.target.x, 1.0);
        assert_abs_diff_eq!(est.target.y, 0.0);
    }

    #[test]
    fn test_both_sides_averages_each_side() {
        let cones = classified(&[(1.0, 1.0), (3.0, 1.0)], &[(2.0, -2.0)]);
        let est = estimate_centerline(&cones, &Pose2D::origin(), 3.0, 3.0);

        assert_abs_diff_eq!(est.target.x, 2.0);
        assert_abs_diff_eq!(est.target.y, -0.5);
    }

    #[test]
    fn test_right_only_shifts_toward_left() {
        let cones = classified(&[], &[(2.0, -1.0)]);
        let est = estimate_centerline(&cones, &Pose2D::origin(), 3.0, 3.0);

        assert_eq!(est.source, CenterlineSource::RightOnly);
        assert_abs_diff_eq!(est.target.x, 2.0);
        assert_abs_diff_eq!(est.target.y, 0.5);
    }

    #[test]
    fn test_left_only_shifts_toward_right() {
        let cones = classified(&[(2.0, 1.0)], &[]);
        let est = estimate_centerline(&cones, &Pose2D::origin(), 4.0, 3.0);

        assert_eq!(est.source, CenterlineSource::LeftOnly);
        assert_abs_diff_eq!(est.target.x, 2.0);
        assert_abs_diff_eq!(est.target.y, -1.0);
    }

    #[test]
    fn test_single_side_offset_follows_heading() {
        // Heading +y: offset basis (-sin, cos) = (-1, 0)
        let pose = Pose2D::new(0.0, 0.0, FRAC_PI_2);
        let cones = classified(&[(-1.0, 2.0)], &[]);
        let est = estimate_centerline(&cones, &pose, 3.0, 3.0);

        assert_abs_diff_eq!(est.target.x, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(est.target.y, 2.0, epsilon = 1e-12);

        let cones = classified(&[], &[(1.0, 2.0)]);
        let est = estimate_centerline(&cones, &pose, 3.0, 3.0);

        assert_abs_diff_eq!(est.target.x, -0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(est.target.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_no_cones_projects_along_heading() {
        let pose = Pose2D::new(1.0, 2.0, 0.3);
        let est = estimate_centerline(&ClassifiedCones::default(), &pose, 3.0, 3.0);

        assert_eq!(est.source, CenterlineSource::DeadReckoning);
        assert_eq!(est.target.x, 1.0 + 3.0 * 0.3f64.cos());
        assert_eq!(est.target.y, 2.0 + 3.0 * 0.3f64.sin());
    }
}
