use approx::assert_abs_diff_eq;
use cone_path_planning::path_planning::cone_path::CenterlineSource;
use cone_path_planning::{generate_path, Cone, ConePathConfig, ConePathPlanner, LocalPathPlanner, Point2D, Pose2D};

#[test]
fn both_sides_one_cone_each() {
    let planner = ConePathPlanner::default();
    let result = planner.plan_detailed(
        &Pose2D::origin(),
        &[Cone::left(1.0, 1.0), Cone::right(1.0, -1.0)],
    );

    assert_eq!(result.raw_path.points[1], Point2D::new(1.0, 0.0));
    assert_eq!(result.raw_path.points[2], Point2D::new(4.0, 0.0));

    // Smoothed path stays on the x axis
    for p in &result.path.points {
        assert_abs_diff_eq!(p.y, 0.0);
    }
    assert_abs_diff_eq!(result.path.points[0].x, 0.5);
    assert_abs_diff_eq!(result.path.points[1].x, 5.0 / 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(result.path.points[2].x, 2.5);
}

#[test]
fn only_right_cone_visible() {
    let result = ConePathPlanner::with_track_width(3.0)
        .unwrap()
        .plan_detailed(&Pose2D::origin(), &[Cone::right(2.0, -1.0)]);

    assert_eq!(result.centerline.source, CenterlineSource::RightOnly);
    assert_abs_diff_eq!(result.centerline.target.x, 2.0);
    assert_abs_diff_eq!(result.centerline.target.y, 0.5);
}

#[test]
fn unknown_cones_do_not_change_the_path() {
    let pose = Pose2D::new(0.5, 0.5, 0.4);
    let cones = vec![Cone::left(2.0, 2.5), Cone::right(3.0, 0.0)];
    let mut noisy = cones.clone();
    noisy.push(Cone::from_color(2.5, 1.0, 4));
    noisy.push(Cone::from_color(-1.0, 7.0, -1));

    assert_eq!(generate_path(&pose, &cones, 3.0), generate_path(&pose, &noisy, 3.0));
}

#[test]
fn only_unknown_cones_fall_back_to_straight() {
    let pose = Pose2D::new(2.0, 1.0, 1.0);
    let result = ConePathPlanner::default().plan_detailed(&pose, &[Cone::from_color(3.0, 3.0, 9)]);

    assert_eq!(result.centerline.source, CenterlineSource::DeadReckoning);
    assert_eq!(result.raw_path.points[1].x, 2.0 + 3.0 * 1.0f64.cos());
    assert_eq!(result.raw_path.points[1].y, 1.0 + 3.0 * 1.0f64.sin());
}

#[test]
fn configured_lookahead_and_window() {
    let config = ConePathConfig::default()
        .with_lookahead(5.0)
        .with_smoothing_half_window(0);
    let planner = ConePathPlanner::new(config).unwrap();
    let path = planner.generate_path(&Pose2D::origin(), &[]);

    assert_eq!(
        path.points,
        vec![Point2D::new(0.0, 0.0), Point2D::new(5.0, 0.0), Point2D::new(10.0, 0.0)]
    );
}

#[test]
fn trait_object_planning() {
    let planner: Box<dyn LocalPathPlanner> = Box::new(ConePathPlanner::default());
    let path = planner.generate_path(&Pose2D::origin(), &[Cone::left(1.0, 1.5)]);

    assert_eq!(path.len(), 3);
    assert!(path.total_length() > 0.0);
}
