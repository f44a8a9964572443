// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::connections::{connection_segments, derive_connections, Segment};
use crate::canvas::{Interaction, InteractionKind, Viewport};
use crate::model::{MindMap, NodeId, Point, PositionMap, Tree};

/// Size of a node box in logical units. Boxes are centered on the node position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeGeometry {
    pub width: f64,
    pub height: f64,
    /// Extra gap between a node box and the start of a connection line.
    pub link_gap: f64,
}

impl Default for NodeGeometry {
    fn default() -> Self {
        Self { width: 150.0, height: 60.0, link_gap: 5.0 }
    }
}

impl NodeGeometry {
    /// How far connection lines are trimmed at each end.
    pub fn link_inset(&self) -> f64 {
        self.width / 2.0 + self.link_gap
    }

    pub fn contains(&self, center: Point, point: Point) -> bool {
        (point.x - center.x).abs() <= self.width / 2.0
            && (point.y - center.y).abs() <= self.height / 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneNode {
    pub id: NodeId,
    pub label: String,
    /// Depth from the root; only used for styling.
    pub level: usize,
    pub position: Point,
}

/// Nodes in pre-order with their depth. A node without a position is reported at the origin.
pub fn flatten(tree: &Tree, positions: &PositionMap) -> Vec<SceneNode> {
    let mut nodes = Vec::new();
    tree.walk(|node, level| {
        nodes.push(SceneNode {
            id: node.id().clone(),
            label: node.label().to_owned(),
            level,
            position: positions.get(node.id().as_str()).unwrap_or_default(),
        });
    });
    nodes
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub nodes: Vec<SceneNode>,
    pub segments: Vec<Segment>,
    pub scale: f64,
    pub offset: Point,
    pub interaction: InteractionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dragged_node: Option<NodeId>,
    #[serde(skip)]
    geometry: NodeGeometry,
}

impl Scene {
    pub fn build(
        map: &MindMap,
        viewport: &Viewport,
        interaction: &Interaction,
        geometry: &NodeGeometry,
    ) -> Self {
        let connections = derive_connections(map.tree());
        Self {
            nodes: flatten(map.tree(), map.positions()),
            segments: connection_segments(&connections, map.positions(), geometry.link_inset()),
            scale: viewport.scale(),
            offset: viewport.offset(),
            interaction: interaction.kind(),
            dragged_node: interaction.dragged_node().cloned(),
            geometry: geometry.clone(),
        }
    }

    pub fn geometry(&self) -> &NodeGeometry {
        &self.geometry
    }

    pub fn node(&self, id: &str) -> Option<&SceneNode> {
        self.nodes.iter().find(|node| node.id.as_str() == id)
    }

    pub fn canvas_to_screen(&self, canvas: Point) -> Point {
        Viewport::new(self.scale, self.offset).canvas_to_screen(canvas)
    }

    /// The topmost node whose box contains `screen`.
    ///
    /// Later nodes are drawn over earlier ones and a dragged node is drawn over everything.
    pub fn hit_test(&self, screen: Point) -> Option<&SceneNode> {
        let canvas = Viewport::new(self.scale, self.offset).screen_to_canvas(screen);
        let hits = |node: &&SceneNode| self.geometry.contains(node.position, canvas);

        if let Some(dragged) = self.dragged_node.as_ref().and_then(|id| self.node(id.as_str())) {
            if hits(&dragged) {
                return Some(dragged);
            }
        }
        self.nodes.iter().rev().find(hits)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
