//! Orthogonal connector geometry for sibships
//!
//! Each sibship is drawn as one shared bar instead of a line per
//! parent/child pair:
//!
//! ```text
//!   [father]      [mother]
//!      |              |          parent drops
//!      +------+-------+          couple bar
//!             |                  trunk
//!    +--------+--------+         sibling bar
//!    |        |        |         child drops
//!  [kid]    [kid]    [kid]
//! ```
//!
//! Every segment is horizontal or vertical.

use crate::config::LayoutConfig;
use crate::layout::{Sibship, TreeLayout};
use kindred_domain::PersonId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A straight line on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start x
    pub x1: f64,
    /// Start y
    pub y1: f64,
    /// End x
    pub x2: f64,
    /// End y
    pub y2: f64,
}

impl Segment {
    fn horizontal(y: f64, from_x: f64, to_x: f64) -> Self {
        Self {
            x1: from_x,
            y1: y,
            x2: to_x,
            y2: y,
        }
    }

    fn vertical(x: f64, from_y: f64, to_y: f64) -> Self {
        Self {
            x1: x,
            y1: from_y,
            x2: x,
            y2: to_y,
        }
    }

    /// True for horizontal and vertical segments
    pub fn is_axis_aligned(&self) -> bool {
        self.x1 == self.x2 || self.y1 == self.y2
    }

    /// Euclidean length
    pub fn length(&self) -> f64 {
        (self.x2 - self.x1).hypot(self.y2 - self.y1)
    }
}

impl TreeLayout {
    /// Connector segments for every sibship
    ///
    /// `config` must be the geometry the layout was computed with. Segments
    /// of zero length are left out.
    pub fn sibship_connectors(&self, config: &LayoutConfig) -> Vec<Segment> {
        let positions: HashMap<&PersonId, (f64, f64)> = self
            .nodes
            .iter()
            .map(|node| (&node.person.id, (node.x, node.y)))
            .collect();

        self.sibships
            .iter()
            .flat_map(|sibship| sibship_segments(sibship, &positions, config))
            .collect()
    }
}

fn sibship_segments(
    sibship: &Sibship,
    positions: &HashMap<&PersonId, (f64, f64)>,
    config: &LayoutConfig,
) -> Vec<Segment> {
    let parents: Vec<(f64, f64)> = sibship.parents.iter().filter_map(|id| positions.get(id).copied()).collect();
    let children: Vec<(f64, f64)> = sibship.children.iter().filter_map(|id| positions.get(id).copied()).collect();
    if parents.is_empty() || children.is_empty() {
        return Vec::new();
    }

    let half_height = config.node_height / 2.0;
    let clearance = (config.row_gap - config.node_height) / 3.0;

    let parent_bottom = parents.iter().map(|&(_, y)| y + half_height).fold(f64::MIN, f64::max);
    let child_top = children.iter().map(|&(_, y)| y - half_height).fold(f64::MAX, f64::min);
    let couple_y = parent_bottom + clearance;
    let sibling_y = child_top - clearance;

    let (parent_left, parent_right) = span(parents.iter().map(|&(x, _)| x));
    let trunk_x = (parent_left + parent_right) / 2.0;
    let (child_left, child_right) = span(children.iter().map(|&(x, _)| x));

    let mut segments = Vec::with_capacity(parents.len() + children.len() + 3);
    for &(x, y) in &parents {
        segments.push(Segment::vertical(x, y + half_height, couple_y));
    }
    segments.push(Segment::horizontal(couple_y, parent_left, parent_right));
    segments.push(Segment::vertical(trunk_x, couple_y, sibling_y));
    segments.push(Segment::horizontal(
        sibling_y,
        child_left.min(trunk_x),
        child_right.max(trunk_x),
    ));
    for &(x, y) in &children {
        segments.push(Segment::vertical(x, sibling_y, y - half_height));
    }

    segments.retain(|segment| segment.length() > 0.0);
    segments
}

fn span(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::MAX, f64::MIN), |(low, high), value| (low.min(value), high.max(value)))
}
