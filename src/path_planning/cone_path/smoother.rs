//! Moving-average smoothing of a raw waypoint sequence

use nalgebra::Vector2;

use crate::common::{Path2D, Point2D};

/// Replace each point with the mean of its neighbours within `half_window`
/// indices. The window is clipped at both ends, so with `half_window = 1`
/// interior points average three points and endpoints average two.
///
/// Single pass over the input; the output has the same length and no
/// resampling is done.
pub fn smooth_path(path: &Path2D, half_window: usize) -> Path2D {
    let n = path.len();
    let points = (0..n)
        .map(|i| {
            let lo = i.saturating_sub(half_window);
            let hi = i.saturating_add(half_window).saturating_add(1).min(n);
            let window = &path.points[lo..hi];
            let sum = window
                .iter()
                .fold(Vector2::<f64>::zeros(), |acc, p| acc + p.to_vector());
            Point2D::from(sum / window.len() as f64)
        })
        .collect();

    Path2D::from_points(points)
}
