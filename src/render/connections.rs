// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;

use crate::model::{Node, NodeId, Point, PositionMap, Tree};

/// A parent→child edge of the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Connection {
    pub from: NodeId,
    pub to: NodeId,
}

/// A drawable line between two node boundaries, in logical canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub fn length(&self) -> f64 {
        self.from.distance(self.to)
    }
}

/// Every parent→child pair in depth-first order: an edge is followed by the edges below its child
/// before the next sibling edge.
pub fn derive_connections(tree: &Tree) -> Vec<Connection> {
    fn collect(node: &Node, out: &mut Vec<Connection>) {
        for child in node.children() {
            out.push(Connection {
                from: node.id().clone(),
                to: child.id().clone(),
            });
            collect(child, out);
        }
    }

    let mut connections = Vec::new();
    collect(tree.root(), &mut connections);
    connections
}

/// Shortens the center-to-center line by `inset` at both ends.
///
/// `None` when nothing would remain, i.e. the centers are at most `2 * inset` apart.
pub fn trim_segment(from: Point, to: Point, inset: f64) -> Option<Segment> {
    let delta = to - from;
    let distance = delta.length();
    if distance - 2.0 * inset <= 0.0 {
        return None;
    }

    let unit = Point::new(delta.x / distance, delta.y / distance);
    Some(Segment { from: from + unit * inset, to: to - unit * inset })
}

/// Trimmed segments for `connections`; edges with a missing endpoint position are skipped.
pub fn connection_segments(
    connections: &[Connection],
    positions: &PositionMap,
    inset: f64,
) -> Vec<Segment> {
    connections
        .iter()
        .filter_map(|connection| {
            let from = positions.get(connection.from.as_str())?;
            let to = positions.get(connection.to.as_str())?;
            trim_segment(from, to, inset)
        })
        .collect()
}
