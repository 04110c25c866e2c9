//! Utility modules for cone_path_planning

pub mod visualization;

pub use visualization::{Visualizer, PathStyle, PointStyle, colors};
