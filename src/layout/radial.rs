// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_6, FRAC_PI_8, TAU};

use serde::{Deserialize, Serialize};

use crate::model::{Node, Point, PositionMap, Tree};

/// Parameters of the radial layout.
///
/// Angles are radians measured from +x towards +y. With screen-style y-down coordinates an
/// increasing angle runs clockwise, so level one starts at north (`-π/2`) and proceeds clockwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadialLayout {
    /// Radius of the circle holding the root's direct children.
    pub level_one_radius: f64,
    /// Distance from a parent to each of its children below level one. Also used to seed nodes
    /// added after the initial layout.
    pub sub_branch_radius: f64,
    /// Total angle a fan of siblings may cover.
    pub fan_spread: f64,
    /// Upper bound on the angle between two neighbouring siblings.
    pub max_fan_step: f64,
    /// Angle step used when seeding a freshly added child.
    pub insert_fan_step: f64,
}

impl Default for RadialLayout {
    fn default() -> Self {
        Self {
            level_one_radius: 250.0,
            sub_branch_radius: 140.0,
            fan_spread: FRAC_PI_2,
            max_fan_step: FRAC_PI_6,
            insert_fan_step: FRAC_PI_8,
        }
    }
}

impl RadialLayout {
    /// Computes a complete position map for `tree`, ignoring any positions a user may have set.
    pub fn layout(&self, tree: &Tree) -> PositionMap {
        let mut positions = PositionMap::new();
        let root = tree.root();
        positions.set(root.id().clone(), Point::ORIGIN);

        let count = root.children().len();
        if count == 0 {
            return positions;
        }

        let step = TAU / count as f64;
        for (index, child) in root.children().iter().enumerate() {
            let angle = index as f64 * step - FRAC_PI_2;
            let position = Point::polar(self.level_one_radius, angle);
            positions.set(child.id().clone(), position);
            self.place_fan(child, position, angle, &mut positions);
        }

        positions
    }

    /// Places the children of a non-root node on a fan centered on its outward direction.
    fn place_fan(&self, node: &Node, position: Point, outward: f64, positions: &mut PositionMap) {
        let count = node.children().len();
        if count == 0 {
            return;
        }

        let step = self.fan_step(count);
        let start = -((count - 1) as f64 * step) / 2.0;
        for (index, child) in node.children().iter().enumerate() {
            let angle = outward + start + index as f64 * step;
            let child_position = position + Point::polar(self.sub_branch_radius, angle);
            positions.set(child.id().clone(), child_position);
            self.place_fan(child, child_position, angle, positions);
        }
    }

    /// Angle between neighbouring siblings in a fan of `count` children.
    ///
    /// A single child inherits its parent's direction (step 0); larger fans share `fan_spread`
    /// but never exceed `max_fan_step`.
    pub fn fan_step(&self, count: usize) -> f64 {
        if count <= 1 {
            return 0.0;
        }
        (self.fan_spread / (count - 1) as f64).min(self.max_fan_step)
    }

    /// Seed position for a child that was just appended at zero-based `child_index`.
    ///
    /// Successive additions fan out by `insert_fan_step` from the +x axis. For large sibling
    /// counts the fan wraps and can overlap earlier siblings.
    pub fn seed_child_position(&self, parent: Point, child_index: usize) -> Point {
        let angle = child_index as f64 * self.insert_fan_step;
        parent + Point::polar(self.sub_branch_radius, angle)
    }
}

/// Radial layout with default parameters.
pub fn layout_radial(tree: &Tree) -> PositionMap {
    RadialLayout::default().layout(tree)
}
