//! Visualization utilities for cone_path_planning
//!
//! Thin gnuplot wrapper for drawing cones, the vehicle and planned paths.

use gnuplot::{Figure, Caption, Color, PointSymbol, PointSize, LineWidth, AxesCommon, AutoOption};
use crate::common::{Point2D, Pose2D, Path2D, RoboticsError, RoboticsResult};

/// Color palette for consistent styling
pub mod colors {
    pub const RED: &str = "#FF0000";
    pub const BLUE: &str = "#0000FF";
    pub const CYAN: &str = "#00FFFF";
    pub const ORANGE: &str = "#FFA500";
    pub const GRAY: &str = "#808080";
    pub const GOLD: &str = "#E6B800";

    // Semantic colors
    pub const LEFT_CONE: &str = BLUE;
    pub const RIGHT_CONE: &str = GOLD;
    pub const PATH: &str = RED;
    pub const RAW_PATH: &str = GRAY;
    pub const TARGET: &str = ORANGE;
    pub const VEHICLE: &str = CYAN;
}

/// Style for path rendering
#[derive(Debug, Clone)]
pub struct PathStyle {
    pub color: String,
    pub line_width: f64,
    pub caption: String,
}

impl PathStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            line_width: 2.0,
            caption: caption.to_string(),
        }
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            color: colors::PATH.to_string(),
            line_width: 2.0,
            caption: "Path".to_string(),
        }
    }
}

/// Style for point rendering
#[derive(Debug, Clone)]
pub struct PointStyle {
    pub color: String,
    pub size: f64,
    pub symbol: char,
    pub caption: String,
}

impl PointStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            size: 1.0,
            symbol: 'O',
            caption: caption.to_string(),
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_symbol(mut self, symbol: char) -> Self {
        self.symbol = symbol;
        self
    }
}

/// Main visualizer struct
pub struct Visualizer {
    figure: Figure,
    title: String,
    x_label: String,
    y_label: String,
    x_range: Option<(f64, f64)>,
    y_range: Option<(f64, f64)>,
    aspect_ratio: Option<f64>,
    series: usize,
}

impl Visualizer {
    /// Create a new visualizer
    pub fn new() -> Self {
        Self {
            figure: Figure::new(),
            title: String::new(),
            x_label: "X [m]".to_string(),
            y_label: "Y [m]".to_string(),
            x_range: None,
            y_range: None,
            aspect_ratio: Some(1.0),
            series: 0,
        }
    }

    /// Set the plot title
    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = title.to_string();
        self
    }

    /// Set X axis range
    pub fn set_x_range(&mut self, min: f64, max: f64) -> &mut Self {
        self.x_range = Some((min, max));
        self
    }

    /// Set Y axis range
    pub fn set_y_range(&mut self, min: f64, max: f64) -> &mut Self {
        self.y_range = Some((min, max));
        self
    }

    /// Number of line and point series drawn so far
    pub fn series_count(&self) -> usize {
        self.series
    }

    /// Plot a path
    pub fn plot_path(&mut self, path: &Path2D, style: &PathStyle) -> &mut Self {
        self.figure.axes2d()
            .lines(&path.x_coords(), &path.y_coords(), &[
                Caption(&style.caption),
                Color(&style.color),
                LineWidth(style.line_width),
            ]);
        self.series += 1;
        self
    }

    /// Plot a single point
    pub fn plot_point(&mut self, point: Point2D, style: &PointStyle) -> &mut Self {
        self.plot_points(&[point], style)
    }

    /// Plot multiple points. Empty sets are skipped so they don't get a legend entry.
    pub fn plot_points(&mut self, points: &[Point2D], style: &PointStyle) -> &mut Self {
        if points.is_empty() {
            return self;
        }
        let x: Vec<f64> = points.iter().map(|p| p.x).collect();
        let y: Vec<f64> = points.iter().map(|p| p.y).collect();

        self.figure.axes2d()
            .points(&x, &y, &[
                Caption(&style.caption),
                Color(&style.color),
                PointSymbol(style.symbol),
                PointSize(style.size),
            ]);
        self.series += 1;
        self
    }

    /// Plot left (blue) and right (yellow) boundary cones
    pub fn plot_cones(&mut self, left: &[Point2D], right: &[Point2D]) -> &mut Self {
        self.plot_points(left, &PointStyle::new(colors::LEFT_CONE, "Left cones").with_symbol('T').with_size(1.5));
        self.plot_points(right, &PointStyle::new(colors::RIGHT_CONE, "Right cones").with_symbol('T').with_size(1.5))
    }

    /// Plot vehicle pose with heading indicator
    pub fn plot_vehicle(&mut self, pose: &Pose2D, size: f64) -> &mut Self {
        self.figure.axes2d()
            .points(&[pose.x], &[pose.y], &[
                Caption("Vehicle"),
                Color(colors::VEHICLE),
                PointSymbol('O'),
                PointSize(size),
            ]);

        // Heading line (arrow substitute)
        let arrow_len = size * 0.5;
        let end_x = pose.x + arrow_len * pose.yaw.cos();
        let end_y = pose.y + arrow_len * pose.yaw.sin();

        self.figure.axes2d()
            .lines(&[pose.x, end_x], &[pose.y, end_y], &[
                Color(colors::VEHICLE),
                LineWidth(2.0),
            ]);
        self.series += 2;
        self
    }

    /// Finalize and show the plot
    pub fn show(&mut self) -> RoboticsResult<()> {
        self.apply_settings();
        self.figure
            .show()
            .map(|_| ())
            .map_err(|e| RoboticsError::VisualizationError(e.to_string()))
    }

    /// Save plot to PNG file
    pub fn save_png(&mut self, path: &str, width: u32, height: u32) -> RoboticsResult<()> {
        self.apply_settings();
        self.figure
            .save_to_png(path, width, height)
            .map_err(|e| RoboticsError::VisualizationError(e.to_string()))
    }

    fn apply_settings(&mut self) {
        let axes = self.figure.axes2d();

        if !self.title.is_empty() {
            axes.set_title(&self.title, &[]);
        }
        axes.set_x_label(&self.x_label, &[]);
        axes.set_y_label(&self.y_label, &[]);

        if let Some((min, max)) = self.x_range {
            axes.set_x_range(AutoOption::Fix(min), AutoOption::Fix(max));
        }
        if let Some((min, max)) = self.y_range {
            axes.set_y_range(AutoOption::Fix(min), AutoOption::Fix(max));
        }
        if let Some(ratio) = self.aspect_ratio {
            axes.set_aspect_ratio(AutoOption::Fix(ratio));
        }
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}
