// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::positions::PositionMap;
use super::tree::Tree;

/// The tree store and its position side table, evolving in lock-step.
///
/// Structural changes go through `ops::apply_op`, which swaps tree and positions together and
/// bumps `rev`. Drags only touch `positions_mut`.
#[derive(Debug, Clone, PartialEq)]
pub struct MindMap {
    tree: Tree,
    positions: PositionMap,
    rev: u64,
}

impl MindMap {
    pub fn new(tree: Tree, positions: PositionMap) -> Self {
        Self { tree, positions, rev: 0 }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn positions(&self) -> &PositionMap {
        &self.positions
    }

    pub fn positions_mut(&mut self) -> &mut PositionMap {
        &mut self.positions
    }

    pub(crate) fn set_tree(&mut self, tree: Tree) {
        self.tree = tree;
    }

    pub(crate) fn replace(&mut self, tree: Tree, positions: PositionMap) {
        self.tree = tree;
        self.positions = positions;
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn bump_rev(&mut self) {
        self.rev = self.rev.saturating_add(1);
    }

    /// Ids present in the tree that have no position yet.
    pub fn unplaced_ids(&self) -> Vec<super::NodeId> {
        self.tree.ids().into_iter().filter(|id| !self.positions.contains(id.as_str())).collect()
    }

    /// Ids with a position that are no longer part of the tree.
    pub fn stale_position_ids(&self) -> Vec<super::NodeId> {
        self.positions.ids().filter(|id| !self.tree.contains(id.as_str())).cloned().collect()
    }
}
