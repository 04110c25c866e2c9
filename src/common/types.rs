//! Common types used throughout cone_path_planning

use nalgebra::Vector2;

/// 2D point representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn distance(&self, other: &Point2D) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Arithmetic mean of a set of points, `None` when the set is empty
    pub fn centroid(points: &[Point2D]) -> Option<Point2D> {
        if points.is_empty() {
            return None;
        }
        let sum = points
            .iter()
            .fold(Vector2::<f64>::zeros(), |acc, p| acc + p.to_vector());
        Some(Point2D::from(sum / points.len() as f64))
    }
}

impl From<(f64, f64)> for Point2D {
    fn from(tuple: (f64, f64)) -> Self {
        Self { x: tuple.0, y: tuple.1 }
    }
}

impl From<Vector2<f64>> for Point2D {
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v[0], y: v[1] }
    }
}

/// 2D pose (position + orientation)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose2D {
    pub x: f64,
    pub y: f64,
    pub yaw: f64,
}

impl Pose2D {
    pub fn new(x: f64, y: f64, yaw: f64) -> Self {
        Self { x, y, yaw }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0, yaw: 0.0 }
    }

    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// Unit vector along the heading: (cos yaw, sin yaw)
    pub fn heading(&self) -> Vector2<f64> {
        Vector2::new(self.yaw.cos(), self.yaw.sin())
    }

    /// Unit vector pointing to the left of the heading: (-sin yaw, cos yaw)
    pub fn left_normal(&self) -> Vector2<f64> {
        Vector2::new(-self.yaw.sin(), self.yaw.cos())
    }

    /// Signed lateral offset of `point` from the forward axis, positive to the left
    pub fn lateral_offset(&self, point: &Point2D) -> f64 {
        (point.to_vector() - self.position().to_vector()).dot(&self.left_normal())
    }
}

/// Track side a cone marks, relative to the direction of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConeSide {
    /// Blue cones
    Left,
    /// Yellow cones
    Right,
    /// Any label perception could not map to a side
    Unknown,
}

impl ConeSide {
    /// Map the perception color code: 1 = blue (left), 0 = yellow (right)
    pub fn from_color(color: i32) -> Self {
        match color {
            1 => ConeSide::Left,
            0 => ConeSide::Right,
            _ => ConeSide::Unknown,
        }
    }
}

impl From<i32> for ConeSide {
    fn from(color: i32) -> Self {
        ConeSide::from_color(color)
    }
}

/// Detected track-boundary cone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cone {
    pub x: f64,
    pub y: f64,
    pub side: ConeSide,
}

impl Cone {
    pub fn new(x: f64, y: f64, side: ConeSide) -> Self {
        Self { x, y, side }
    }

    pub fn left(x: f64, y: f64) -> Self {
        Self::new(x, y, ConeSide::Left)
    }

    pub fn right(x: f64, y: f64) -> Self {
        Self::new(x, y, ConeSide::Right)
    }

    /// Build from a raw perception color code
    pub fn from_color(x: f64, y: f64, color: i32) -> Self {
        Self::new(x, y, ConeSide::from_color(color))
    }

    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

/// Path represented as a sequence of 2D points
#[derive(Debug, Clone, PartialEq)]
pub struct Path2D {
    pub points: Vec<Point2D>,
}

impl Path2D {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn from_points(points: Vec<Point2D>) -> Self {
        Self { points }
    }

    #[cfg(test)]
    pub(crate) fn from_xy(x: &[f64], y: &[f64]) -> Self {
        assert_eq!(x.len(), y.len());
        let points = x.iter().zip(y.iter())
            .map(|(&x, &y)| Point2D::new(x, y))
            .collect();
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn x_coords(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn y_coords(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    pub fn total_length(&self) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }
        self.points.windows(2)
            .map(|w| w[0].distance(&w[1]))
            .sum()
    }

    /// Largest distance between consecutive points
    pub fn max_step(&self) -> f64 {
        self.points.windows(2)
            .map(|w| w[0].distance(&w[1]))
            .fold(0.0, f64::max)
    }
}

impl Default for Path2D {
    fn default() -> Self {
        Self::new()
    }
}
