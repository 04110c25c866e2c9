//! Cone-based local path planner
//!
//! Runs the classify → centerline → extend → smooth pipeline on one
//! perception snapshot. The planner keeps nothing between calls apart from
//! its configuration.

use log::debug;

use crate::common::{
    Cone, LocalPathPlanner, Path2D, Pose2D, RoboticsError, RoboticsResult, Visualizable,
};
use crate::utils::{colors, PathStyle, PointStyle, Visualizer};

use super::centerline::{estimate_centerline, CenterlineEstimate};
use super::classifier::{classify_cones, ClassifiedCones};
use super::extender::extend_path;
use super::smoother::smooth_path;

/// Default assumed distance between the left and right boundaries [m]
pub const DEFAULT_TRACK_WIDTH: f64 = 3.0;
/// Default forward projection distance [m]
pub const DEFAULT_LOOKAHEAD: f64 = 3.0;

/// Configuration for the cone path planner
#[derive(Debug, Clone, PartialEq)]
pub struct ConePathConfig {
    /// Assumed track width, used when only one boundary is visible [m]
    pub track_width: f64,
    /// Forward distance for the no-cone fallback and path extension [m]
    pub lookahead: f64,
    /// Neighbours on each side averaged by the smoother (1 = 3-point window)
    pub smoothing_half_window: usize,
}

impl Default for ConePathConfig {
    fn default() -> Self {
        Self {
            track_width: DEFAULT_TRACK_WIDTH,
            lookahead: DEFAULT_LOOKAHEAD,
            smoothing_half_window: 1,
        }
    }
}

impl ConePathConfig {
    pub fn with_track_width(mut self, track_width: f64) -> Self {
        self.track_width = track_width;
        self
    }

    pub fn with_lookahead(mut self, lookahead: f64) -> Self {
        self.lookahead = lookahead;
        self
    }

    pub fn with_smoothing_half_window(mut self, half_window: usize) -> Self {
        self.smoothing_half_window = half_window;
        self
    }

    /// Check that distances are finite and positive
    pub fn validate(&self) -> RoboticsResult<()> {
        if !self.track_width.is_finite() || self.track_width <= 0.0 {
            return Err(RoboticsError::InvalidParameter(format!(
                "track_width must be positive and finite, got {}",
                self.track_width
            )));
        }
        if !self.lookahead.is_finite() || self.lookahead <= 0.0 {
            return Err(RoboticsError::InvalidParameter(format!(
                "lookahead must be positive and finite, got {}",
                self.lookahead
            )));
        }
        Ok(())
    }
}

/// Every intermediate stage of one planning call
#[derive(Debug, Clone)]
pub struct ConePathResult {
    pub pose: Pose2D,
    pub cones: ClassifiedCones,
    pub centerline: CenterlineEstimate,
    pub raw_path: Path2D,
    pub path: Path2D,
}

/// Single-shot planner driven by boundary cones
#[derive(Debug, Clone)]
pub struct ConePathPlanner {
    config: ConePathConfig,
}

impl ConePathPlanner {
    /// Create a planner, rejecting an invalid configuration
    pub fn new(config: ConePathConfig) -> RoboticsResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a planner with default lookahead and smoothing
    pub fn with_track_width(track_width: f64) -> RoboticsResult<Self> {
        Self::new(ConePathConfig::default().with_track_width(track_width))
    }

    pub fn config(&self) -> &ConePathConfig {
        &self.config
    }

    /// Plan and keep the intermediate results
    pub fn plan_detailed(&self, pose: &Pose2D, cones: &[Cone]) -> ConePathResult {
        let classified = classify_cones(cones);
        let centerline = estimate_centerline(
            &classified,
            pose,
            self.config.track_width,
            self.config.lookahead,
        );
        let raw_path = extend_path(pose, centerline.target, self.config.lookahead);
        let path = smooth_path(&raw_path, self.config.smoothing_half_window);

        debug!(
            "planned {} points from {} left / {} right cones via {:?}",
            path.len(),
            classified.left.len(),
            classified.right.len(),
            centerline.source
        );

        ConePathResult {
            pose: *pose,
            cones: classified,
            centerline,
            raw_path,
            path,
        }
    }
}

impl Default for ConePathPlanner {
    fn default() -> Self {
        Self {
            config: ConePathConfig::default(),
        }
    }
}

impl LocalPathPlanner for ConePathPlanner {
    fn generate_path(&self, pose: &Pose2D, cones: &[Cone]) -> Path2D {
        self.plan_detailed(pose, cones).path
    }
}

/// Plan with the given track width and default lookahead and smoothing.
///
/// The track width is used as given; callers are expected to pass a
/// positive value.
pub fn generate_path(pose: &Pose2D, cones: &[Cone], track_width: f64) -> Path2D {
    let planner = ConePathPlanner {
        config: ConePathConfig::default().with_track_width(track_width),
    };
    planner.generate_path(pose, cones)
}

impl Visualizable for ConePathResult {
    fn visualize(&self, vis: &mut Visualizer) {
        vis.plot_cones(&self.cones.left, &self.cones.right);
        vis.plot_vehicle(&self.pose, 1.5);
        vis.plot_point(
            self.centerline.target,
            &PointStyle::new(colors::TARGET, "Centerline target").with_symbol('x').with_size(1.5),
        );
        vis.plot_path(
            &self.raw_path,
            &PathStyle::new(colors::RAW_PATH, "Raw path").with_line_width(1.0),
        );
        vis.plot_path(&self.path, &PathStyle::default());
    }
}
