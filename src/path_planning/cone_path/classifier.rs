//! Split detected cones into left and right boundary sets

use log::debug;

use crate::common::{Cone, ConeSide, Point2D};

/// Cone positions grouped by track side
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedCones {
    pub left: Vec<Point2D>,
    pub right: Vec<Point2D>,
}

impl ClassifiedCones {
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

/// Partition cones by side label. Cones with an unknown label are dropped.
pub fn classify_cones(cones: &[Cone]) -> ClassifiedCones {
    let mut classified = ClassifiedCones::default();
    let mut dropped = 0usize;

    for cone in cones {
        match cone.side {
            ConeSide::Left => classified.left.push(cone.position()),
            ConeSide::Right => classified.right.push(cone.position()),
            ConeSide::Unknown => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!("dropped {} cone(s) with unknown side label", dropped);
    }

    classified
}
