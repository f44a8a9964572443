// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::btree_map::{self, BTreeMap};
use std::ops::{Add, Mul, Sub};

use serde::Serialize;

use super::ids::NodeId;

/// A 2D point or vector, in logical canvas units or in screen units depending on context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point at `radius` along `angle` (radians, measured from +x towards +y).
    pub fn polar(radius: f64, angle: f64) -> Self {
        Self { x: radius * angle.cos(), y: radius * angle.sin() }
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(self, other: Point) -> f64 {
        (other - self).length()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// Side table of node positions, keyed by id and deliberately kept out of the tree nodes.
///
/// Structural edits never touch an entry they did not create or delete, so positions the user
/// dragged survive every unrelated mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionMap {
    entries: BTreeMap<NodeId, Point>,
}

impl PositionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<Point> {
        self.entries.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Inserts or overwrites the entry for `id`, returning the previous position.
    pub fn set(&mut self, id: NodeId, position: Point) -> Option<Point> {
        self.entries.insert(id, position)
    }

    pub fn remove(&mut self, id: &str) -> Option<Point> {
        self.entries.remove(id)
    }

    /// Removes every listed id; returns how many entries were actually present.
    pub fn remove_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a NodeId>) -> usize {
        ids.into_iter().filter(|id| self.entries.remove(id.as_str()).is_some()).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, NodeId, Point> {
        self.entries.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &NodeId> {
        self.entries.keys()
    }
}

impl FromIterator<(NodeId, Point)> for PositionMap {
    fn from_iter<I: IntoIterator<Item = (NodeId, Point)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}
