//! Cone Path Planner Module
//!
//! Single-shot local planner that turns the vehicle pose and a snapshot of
//! detected boundary cones into a short smoothed path ahead of the vehicle.
//!
//! # Components
//!
//! - `classifier`: Split cones into left (blue) and right (yellow) sets
//! - `centerline`: Estimate one centerline point from 0, 1 or 2 visible sides
//! - `extender`: Build the raw path by projecting past the centerline target
//! - `smoother`: Moving-average filter over the raw waypoints
//! - `planner`: Configuration and the planner tying the stages together
//!
//! # Example
//!
//! ```
//! use cone_path_planning::common::{Cone, LocalPathPlanner, Pose2D};
//! use cone_path_planning::path_planning::cone_path::{ConePathConfig, ConePathPlanner};
//!
//! let planner = ConePathPlanner::new(ConePathConfig::default().with_track_width(3.0)).unwrap();
//! let cones = vec![Cone::left(1.0, 1.0), Cone::right(1.0, -1.0)];
//! let path = planner.generate_path(&Pose2D::origin(), &cones);
//! assert_eq!(path.len(), 3);
//! ```

pub mod classifier;
pub mod centerline;
pub mod extender;
pub mod smoother;
pub mod planner;

pub use classifier::{classify_cones, ClassifiedCones};
pub use centerline::{estimate_centerline, CenterlineEstimate, CenterlineSource};
pub use extender::extend_path;
pub use smoother::smooth_path;
pub use planner::*;
