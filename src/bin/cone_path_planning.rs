//
// Local path planning between track boundary cones.
//
// Plans one path per built-in perception snapshot and saves a plot of each.
// Run with RUST_LOG=debug to see which centerline heuristic was used.
//
// author: Ryohei Sasaki (@rsasaki0109)

use cone_path_planning::common::{Cone, Pose2D, Visualizable};
use cone_path_planning::path_planning::cone_path::{ConePathConfig, ConePathPlanner};
use cone_path_planning::utils::Visualizer;
use cone_path_planning::RoboticsResult;
use log::{info, warn};

const TRACK_WIDTH: f64 = 3.0;
const SAVE_PLOTS: bool = true;
const SHOW_ANIMATION: bool = false;

struct Snapshot {
    name: &'static str,
    pose: Pose2D,
    cones: Vec<Cone>,
}

fn snapshots() -> Vec<Snapshot> {
    vec![
        Snapshot {
            name: "both_sides",
            pose: Pose2D::origin(),
            cones: vec![
                Cone::left(1.0, 1.5),
                Cone::left(3.0, 1.6),
                Cone::right(1.2, -1.5),
                Cone::right(3.1, -1.4),
            ],
        },
        Snapshot {
            name: "left_only",
            pose: Pose2D::new(0.0, 0.0, 0.2),
            cones: vec![Cone::left(1.5, 1.8), Cone::left(3.5, 2.2)],
        },
        Snapshot {
            name: "right_only",
            pose: Pose2D::origin(),
            cones: vec![Cone::right(2.0, -1.0)],
        },
        Snapshot {
            name: "no_cones",
            pose: Pose2D::new(1.0, -0.5, -0.3),
            cones: vec![],
        },
        Snapshot {
            name: "unknown_labels",
            pose: Pose2D::origin(),
            cones: vec![Cone::from_color(2.0, 0.0, 2), Cone::from_color(2.0, -1.5, 0)],
        },
    ]
}

fn main() -> RoboticsResult<()> {
    env_logger::init();
    info!("cone path planning start!!");

    let planner = ConePathPlanner::new(ConePathConfig::default().with_track_width(TRACK_WIDTH))?;
    if SAVE_PLOTS {
        std::fs::create_dir_all("img")?;
    }

    for snapshot in snapshots() {
        let result = planner.plan_detailed(&snapshot.pose, &snapshot.cones);

        info!(
            "{}: target ({:.2}, {:.2}) via {:?}, path length {:.2} m, max step {:.2} m",
            snapshot.name,
            result.centerline.target.x,
            result.centerline.target.y,
            result.centerline.source,
            result.path.total_length(),
            result.path.max_step(),
        );
        for p in &result.path.points {
            println!("{} {:.3} {:.3}", snapshot.name, p.x, p.y);
        }

        if SAVE_PLOTS {
            let mut vis = Visualizer::new();
            vis.set_title(&format!("Cone path planning: {}", snapshot.name));
            vis.set_x_range(-1.0, 9.0).set_y_range(-4.0, 4.0);
            result.visualize(&mut vis);

            let file = format!("img/cone_path_{}.png", snapshot.name);
            match vis.save_png(&file, 800, 600) {
                Ok(()) => info!("plot saved to: {}", file),
                Err(e) => warn!("could not save {}: {}", file, e),
            }
            if SHOW_ANIMATION {
                vis.show()?;
            }
        }
    }

    info!("cone path planning finish!!");
    Ok(())
}
